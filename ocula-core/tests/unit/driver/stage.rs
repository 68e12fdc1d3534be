use super::*;

fn list(w: u32, h: u32) -> DisplayList {
    DisplayList::new(Viewport::new(w, h))
}

#[test]
fn grid_line_respects_visibility() {
    let mut settings = Settings::default();
    let mut dl = list(700, 400);
    Stage::new(&settings, &mut dl).grid_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert_eq!(dl.segment_count(), 1);

    settings.show_grid = false;
    let mut dl = list(700, 400);
    Stage::new(&settings, &mut dl).grid_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert_eq!(dl.segment_count(), 0);
}

#[test]
fn odd_line_width_is_half_pixel_aligned() {
    let settings = Settings::default();
    // 700 / 700 = 1px: odd, shifted by 0.5.
    let mut dl = list(700, 400);
    Stage::new(&settings, &mut dl).grid_line(Point::new(3.0, 4.0), Point::new(9.0, 4.0));
    let DrawOp::Segment { from, width, .. } = &dl.ops[0] else {
        panic!("expected segment");
    };
    assert_eq!(*width, 1.0);
    assert_eq!(*from, Point::new(3.5, 4.5));

    // 1400 / 700 = 2px: even, unshifted.
    let mut dl = list(1400, 400);
    Stage::new(&settings, &mut dl).grid_line(Point::new(3.0, 4.0), Point::new(9.0, 4.0));
    let DrawOp::Segment { from, .. } = &dl.ops[0] else {
        panic!("expected segment");
    };
    assert_eq!(*from, Point::new(3.0, 4.0));
}

#[test]
fn transparent_outline_is_dropped() {
    let settings = Settings::default();
    let mut dl = list(100, 100);
    Stage::new(&settings, &mut dl).target(Point::new(50.0, 50.0), 5.0);
    let DrawOp::ShadedDisc { stops, outline, .. } = &dl.ops[0] else {
        panic!("expected shaded disc");
    };
    assert_eq!(outline, &None);
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[1].offset, 0.5);
}

#[test]
fn background_uses_theme_base() {
    let mut settings = Settings::default();
    settings.dark_mode = true;
    let mut dl = list(10, 10);
    Stage::new(&settings, &mut dl).background();
    assert_eq!(
        dl.ops[0],
        DrawOp::Background {
            mode: crate::session::settings::ThemeMode::Dark,
            color: Rgba8::rgb(0x04, 0x07, 0x13),
        }
    );
}
