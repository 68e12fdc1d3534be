use super::*;

#[test]
fn roster_matches_names_and_loop_table() {
    let roster = roster(&ThemedImages::default());
    assert_eq!(roster.len(), PATTERN_NAMES.len());
    assert_eq!(roster.len(), DEFAULT_COMPREHENSIVE_LOOPS.len());
    assert_eq!(roster[0].name, "Vertical Waves");
    assert_eq!(roster[13].name, "Peripheral 2");
    assert!(roster.iter().all(|p| !p.worker.is_active()));
}

#[test]
fn wave_paths_have_expected_shape() {
    let v = vertical_waves_path();
    assert_eq!(v.len(), 14);
    assert_eq!(v.points()[0], Point::new(0.16, 0.1));
    assert!((v.points()[13].x - 0.84).abs() < 1e-12);
    assert_eq!(v.points()[13].y, 0.9);

    let h = horizontal_wave_path();
    assert_eq!(h.len(), 12);
    assert_eq!(h.points()[1], Point::new(0.82, 0.12));
}

#[test]
fn star_closes_on_its_first_point() {
    let s = stellar_path();
    assert_eq!(s.len(), 6);
    assert_eq!(s.points()[0], s.points()[5]);
    for p in s.points() {
        assert!((p.x - 0.5).hypot(p.y - 0.5) - 0.45 < 1e-12);
    }
}

#[test]
fn sweep_layouts_sit_on_their_sides() {
    let h = horizontal_sweep_layout();
    assert_eq!(h.len(), 7);
    assert!(h.iter().all(|p| p.x == 0.15 || p.x == 0.85));
    let v = vertical_sweep_layout();
    assert_eq!(v.len(), 16);
    assert!(v.iter().all(|p| p.y == 0.08 || p.y == 0.92));
}
