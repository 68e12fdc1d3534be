use super::*;

#[test]
fn defaults_show_grid_in_light_mode() {
    let s = Settings::default();
    assert!(s.show_grid);
    assert!(!s.dark_mode);
    assert_eq!(s.theme_mode(), ThemeMode::Light);
    assert_eq!(s.dot_colors().primary, Rgba8::rgb(0xd4, 0x20, 0x20));
}

#[test]
fn dark_mode_switches_theme_and_dots() {
    let mut s = Settings::default();
    s.apply(SettingsUpdate::DarkMode(true));
    assert_eq!(s.stage_theme().base, Rgba8::rgb(0x04, 0x07, 0x13));
    assert_eq!(s.dot_colors().primary, Rgba8::rgb(0x00, 0xd6, 0x10));
}

#[test]
fn skin_palette_darkens_secondaries() {
    let p = Palette::from_skin(Rgba8::rgb(100, 200, 50), Rgba8::rgb(50, 50, 50));
    assert_eq!(p.dark.secondary, Rgba8::rgb(78, 156, 39));
    assert_eq!(p.light.secondary, Rgba8::rgb(40, 40, 40));
    assert!(p.dark.outline.is_transparent());
}

#[test]
fn settings_deserialize_with_partial_fields() {
    let s: Settings = serde_json::from_str(r#"{ "dark_mode": true }"#).unwrap();
    assert!(s.dark_mode);
    assert!(s.show_grid);
    assert_eq!(s.palette, Palette::default());
}

#[test]
fn palette_outline_defaults_to_transparent() {
    let json = r##"{
        "light": { "primary": "#333333", "secondary": "#292929" },
        "dark": { "primary": "#ffffff", "secondary": "#c7c7c7", "outline": "#000000" }
    }"##;
    let p: Palette = serde_json::from_str(json).unwrap();
    assert!(p.light.outline.is_transparent());
    assert_eq!(p.dark.outline, Rgba8::BLACK);
}
