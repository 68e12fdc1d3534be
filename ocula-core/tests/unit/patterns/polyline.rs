use super::*;
use crate::{
    foundation::math::ScriptedRandom, render::plan::DisplayList, session::settings::Settings,
};

fn close(a: Option<Point>, b: Point) -> bool {
    a.is_some_and(|a| (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9)
}

fn zigzag() -> Polyline {
    let path = PathSpec::new(vec![
        Point::new(0.1, 0.1),
        Point::new(0.1, 0.9),
        Point::new(0.5, 0.9),
        Point::new(0.5, 0.5),
    ]);
    Polyline::new(path, PathMapping::Stretch, 2125.0, true)
}

#[test]
fn endpoints_land_on_first_and_last_waypoint() {
    let mut p = zigzag();
    p.rescale(Viewport::new(1000, 500));
    assert!(close(p.position(), Point::new(100.0, 50.0)));
    let total = p.travel().total();
    p.travel_mut().set_t(total);
    assert!(close(p.position(), Point::new(500.0, 250.0)));
}

#[test]
fn timeline_uses_aspect_after_resize() {
    let mut p = zigzag();
    let before = p.timeline().times().to_vec();
    p.rescale(Viewport::new(400, 400));
    let after = p.timeline().times().to_vec();
    assert_ne!(before, after);
    assert_eq!(*after.last().unwrap(), p.travel().total());
    assert!(after.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn centered_waypoint_survives_resize() {
    let path = PathSpec::new(vec![Point::new(0.5, 0.5), Point::new(0.9, 0.5)]);
    for mapping in [PathMapping::Stretch, PathMapping::SQUARE_82] {
        let mut p = Polyline::new(path.clone(), mapping, 1000.0, true);
        p.rescale(Viewport::new(800, 600));
        assert!(close(p.position(), Point::new(400.0, 300.0)));
        p.rescale(Viewport::new(1280, 720));
        assert!(close(p.position(), Point::new(640.0, 360.0)));
    }
}

#[test]
fn t_stays_in_domain_under_stalls() {
    let mut p = zigzag();
    let mut rng = ScriptedRandom::new([0.0]);
    p.rescale(Viewport::new(640, 480));
    let mut completions = 0;
    for i in 0..20_000 {
        let dt = if i % 97 == 0 { 10_000.0 } else { 16.0 };
        completions += p.advance(dt, &mut rng);
        let t = p.travel().t();
        assert!((0.0..=p.travel().total()).contains(&t));
    }
    assert!(completions > 0);
}

#[test]
fn draws_grid_and_target() {
    let mut p = zigzag();
    p.rescale(Viewport::new(700, 350));
    let settings = Settings::default();
    let mut list = DisplayList::new(Viewport::new(700, 350));
    p.draw(&mut Stage::new(&settings, &mut list));
    assert_eq!(list.segment_count(), 3);
    assert_eq!(list.shaded_centers().count(), 1);
}
