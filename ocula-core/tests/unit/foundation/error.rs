use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OculaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(OculaError::asset("x").to_string().contains("asset error:"));
    assert!(OculaError::render("x").to_string().contains("render error:"));
    assert!(OculaError::config("x").to_string().contains("config error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OculaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
