use super::*;
use crate::foundation::core::Viewport;
use crate::session::settings::StageTheme;

fn close_px(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 2)
}

fn background_list(w: u32, h: u32, mode: ThemeMode) -> DisplayList {
    let mut dl = DisplayList::new(Viewport::new(w, h));
    dl.push(DrawOp::Background {
        mode,
        color: StageTheme::for_mode(mode).base,
    });
    dl
}

#[test]
fn background_fills_with_theme_base() {
    let mut be = CpuBackend::new();
    let frame = be
        .render(&background_list(32, 16, ThemeMode::Dark), &ImageStore::new())
        .unwrap();
    assert_eq!(frame.width, 32);
    assert_eq!(frame.height, 16);
    assert_eq!(frame.data.len(), 32 * 16 * 4);
    let base = StageTheme::for_mode(ThemeMode::Dark).base.to_premul();
    assert!(close_px(frame.pixel(0, 0).unwrap(), base));
    assert!(close_px(frame.pixel(31, 15).unwrap(), base));
}

#[test]
fn background_is_rebuilt_only_on_size_or_theme_change() {
    let mut be = CpuBackend::new();
    let store = ImageStore::new();
    be.render(&background_list(20, 20, ThemeMode::Light), &store).unwrap();
    be.render(&background_list(20, 20, ThemeMode::Light), &store).unwrap();
    assert_eq!(be.background_builds(), 1);

    be.render(&background_list(24, 20, ThemeMode::Light), &store).unwrap();
    assert_eq!(be.background_builds(), 2);

    be.render(&background_list(24, 20, ThemeMode::Dark), &store).unwrap();
    assert_eq!(be.background_builds(), 3);
}

#[test]
fn disc_covers_its_center_only() {
    let mut dl = background_list(40, 40, ThemeMode::Light);
    let fill = Rgba8::rgb(200, 10, 10);
    dl.push(DrawOp::Disc {
        center: Point::new(20.0, 20.0),
        radius: 6.0,
        fill,
        outline: None,
    });
    let frame = CpuBackend::new().render(&dl, &ImageStore::new()).unwrap();
    assert!(close_px(frame.pixel(20, 20).unwrap(), fill.to_premul()));
    let base = StageTheme::for_mode(ThemeMode::Light).base.to_premul();
    assert!(close_px(frame.pixel(2, 2).unwrap(), base));
}

#[test]
fn outline_ring_leaves_transparent_fill_untouched() {
    let mut dl = background_list(40, 40, ThemeMode::Light);
    dl.push(DrawOp::Disc {
        center: Point::new(20.0, 20.0),
        radius: 10.0,
        fill: Rgba8::TRANSPARENT,
        outline: Some(Outline {
            color: Rgba8::BLACK,
            width: 2.0,
        }),
    });
    let frame = CpuBackend::new().render(&dl, &ImageStore::new()).unwrap();
    let base = StageTheme::for_mode(ThemeMode::Light).base.to_premul();
    assert!(close_px(frame.pixel(20, 20).unwrap(), base));
    // Pixel (29, 20) straddles x in [29, 30], fully inside the stroke.
    assert!(close_px(frame.pixel(29, 20).unwrap(), Rgba8::BLACK.to_premul()));
}

#[test]
fn shaded_disc_runs_top_to_bottom() {
    let mut dl = background_list(64, 64, ThemeMode::Dark);
    let top = Rgba8::rgb(250, 250, 250);
    let bottom = Rgba8::rgb(0, 0, 120);
    dl.push(DrawOp::ShadedDisc {
        center: Point::new(32.0, 32.0),
        radius: 24.0,
        stops: vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
        outline: None,
    });
    let frame = CpuBackend::new().render(&dl, &ImageStore::new()).unwrap();
    let upper = frame.pixel(32, 12).unwrap();
    let lower = frame.pixel(32, 52).unwrap();
    assert!(upper[0] > lower[0]);
    assert!(lower[2] > 0);
}

#[test]
fn segment_draws_a_band() {
    let mut dl = background_list(20, 20, ThemeMode::Light);
    dl.push(DrawOp::Segment {
        from: Point::new(0.0, 10.0),
        to: Point::new(20.0, 10.0),
        width: 4.0,
        color: Rgba8::BLACK,
    });
    let frame = CpuBackend::new().render(&dl, &ImageStore::new()).unwrap();
    assert!(close_px(frame.pixel(10, 9).unwrap(), Rgba8::BLACK.to_premul()));
    assert_ne!(frame.pixel(10, 2).unwrap(), Rgba8::BLACK.to_premul());
}

#[test]
fn missing_image_is_skipped_and_present_image_is_drawn() {
    let mut dl = background_list(16, 16, ThemeMode::Light);
    dl.push(DrawOp::Image {
        key: "absent.png".to_owned(),
        rect: Rect::new(0.0, 0.0, 16.0, 16.0),
    });
    let mut be = CpuBackend::new();
    let mut store = ImageStore::new();
    let frame = be.render(&dl, &store).unwrap();
    let base = StageTheme::for_mode(ThemeMode::Light).base.to_premul();
    assert!(close_px(frame.pixel(8, 8).unwrap(), base));

    store.insert(
        "absent.png",
        PreparedImage {
            width: 2,
            height: 2,
            rgba8_premul: Arc::new([0u8, 200, 0, 255].repeat(4)),
        },
    );
    let frame = be.render(&dl, &store).unwrap();
    assert!(close_px(frame.pixel(8, 8).unwrap(), [0, 200, 0, 255]));
}

#[test]
fn empty_viewport_is_an_error() {
    let dl = DisplayList::new(Viewport::new(0, 10));
    assert!(CpuBackend::new().render(&dl, &ImageStore::new()).is_err());
}

#[test]
fn sampled_stops_interpolate() {
    let stops = [
        GradientStop::new(0.0, Rgba8::rgb(0, 0, 0)),
        GradientStop::new(1.0, Rgba8::rgb(200, 100, 0)),
    ];
    assert_eq!(sample_stops(&stops, 0.5), Rgba8::rgb(100, 50, 0));
    assert_eq!(sample_stops(&stops, 2.0), Rgba8::rgb(200, 100, 0));
    assert_eq!(sample_stops(&[], 0.5), Rgba8::TRANSPARENT);
}
