use super::*;
use crate::foundation::math::ScriptedRandom;

#[test]
fn inner_extreme_keeps_dots_apart() {
    let e = Expansion::new(0.7, 140.0, Axis::Horizontal);
    // 0.7 - 0.2 would let the dots overlap at the center
    assert_eq!(e.inner(), 0.5 + 1.0 / 36.0);
    assert_eq!(Expansion::new(0.9, 140.0, Axis::Horizontal).inner(), 0.9 - 0.2);
}

#[test]
fn one_completion_per_cycle() {
    let mut e = Expansion::new(0.7, 140.0, Axis::Horizontal);
    let mut rng = ScriptedRandom::new([0.0]);
    let mut completions = 0;
    let mut reached_outer = false;
    let mut frames = 0;
    while completions == 0 {
        completions += e.advance(50.0, &mut rng);
        reached_outer |= e.current() == e.outer();
        assert!(e.current() >= e.inner() && e.current() <= e.outer());
        frames += 1;
        assert!(frames < 10_000);
    }
    assert!(reached_outer);
    assert_eq!(e.current(), e.inner());
}

#[test]
fn dots_mirror_about_the_center() {
    let e = Expansion::new(0.7, 140.0, Axis::Vertical);
    let [a, b] = e.dots(400.0, 300.0);
    assert_eq!(a.x, 200.0);
    assert_eq!(b.x, 200.0);
    assert!((a.y + b.y - 300.0).abs() < 1e-9);
}

#[test]
fn stalls_keep_extent_between_extremes() {
    let mut e = Expansion::new(0.7, 140.0, Axis::Horizontal);
    let mut rng = ScriptedRandom::new([0.0]);
    for dt in [16.0, 60_000.0, 1_500.0, 50.0].iter().cycle().take(20_000) {
        e.advance(*dt, &mut rng);
        assert!(e.current() >= e.inner() && e.current() <= e.outer());
    }
}
