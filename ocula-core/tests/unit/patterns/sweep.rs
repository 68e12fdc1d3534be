use super::*;
use crate::{
    foundation::{core::Viewport, math::ScriptedRandom},
    patterns::catalog::{horizontal_sweep_layout, vertical_sweep_layout},
    render::plan::DisplayList,
    session::settings::Settings,
};

fn horizontal(speed: f64) -> Sweep {
    Sweep::new(horizontal_sweep_layout(), Axis::Horizontal, 0.15, 0.85, speed)
}

#[test]
fn ping_pong_visits_every_index_once_per_leg() {
    let mut s = horizontal(1000.0);
    let mut rng = ScriptedRandom::new([0.0]);
    let mut seen = vec![(s.current(), s.forward)];
    let mut completions = 0;
    for _ in 0..100_000 {
        let done = s.advance(16.0, &mut rng);
        let state = (s.current(), s.forward);
        if seen.last() != Some(&state) {
            seen.push(state);
        }
        if done > 0 {
            completions += done;
            break;
        }
    }
    assert_eq!(completions, 1);

    let mut expected: Vec<(usize, bool)> = (0..7).map(|i| (i, true)).collect();
    expected.extend((0..7).rev().map(|i| (i, false)));
    expected.push((0, true));
    assert_eq!(seen, expected);
}

#[test]
fn arrival_snaps_to_the_far_side() {
    let mut s = horizontal(2100.0);
    let mut rng = ScriptedRandom::new([0.0]);
    // First target starts on the high side and heads low.
    assert_eq!(s.dir, -1.0);
    while s.current() == 0 {
        s.advance(50.0, &mut rng);
    }
    assert_eq!(s.positions()[0].x, 0.15);
    // Next target starts low and heads high.
    assert_eq!(s.dir, 1.0);
}

#[test]
fn zero_delta_moves_nothing() {
    let mut s = horizontal(1000.0);
    let mut rng = ScriptedRandom::new([0.0]);
    let before = s.positions().to_vec();
    assert_eq!(s.advance(0.0, &mut rng), 0);
    assert_eq!(s.positions(), &before[..]);
    assert_eq!(s.current(), 0);
}

#[test]
fn per_frame_displacement_is_bounded() {
    let mut s = Sweep::new(vertical_sweep_layout(), Axis::Vertical, 0.08, 0.92, 1_000_000.0);
    let mut rng = ScriptedRandom::new([0.0]);
    for _ in 0..500 {
        let before = s.positions().to_vec();
        s.advance(50.0, &mut rng);
        for (a, b) in before.iter().zip(s.positions()) {
            assert!((a.y - b.y).abs() <= MAX_STEP + 1e-12);
            assert_eq!(a.x, b.x);
        }
        assert!(s.positions().iter().all(|p| (0.08..=0.92).contains(&p.y)));
    }
}

#[test]
fn start_restores_initial_layout() {
    let mut s = horizontal(2100.0);
    let mut rng = ScriptedRandom::new([0.0]);
    for _ in 0..300 {
        s.advance(50.0, &mut rng);
    }
    assert_ne!(s.positions(), &horizontal_sweep_layout()[..]);
    s.reset(&mut rng);
    assert_eq!(s.positions(), &horizontal_sweep_layout()[..]);
    assert_eq!(s.current(), 0);
}

#[test]
fn draws_one_disc_per_target() {
    let s = Sweep::new(vertical_sweep_layout(), Axis::Vertical, 0.08, 0.92, 1200.0);
    let vp = Viewport::new(900, 500);
    let settings = Settings::default();
    let mut list = DisplayList::new(vp);
    s.draw(&mut Stage::new(&settings, &mut list));
    assert_eq!(list.shaded_centers().count(), 16);
}

#[test]
fn collapsed_band_keeps_positions_finite() {
    let mut s = Sweep::new(horizontal_sweep_layout(), Axis::Horizontal, 0.5, 0.5, 1000.0);
    let mut rng = ScriptedRandom::new([0.0]);
    let mut completions = 0;
    for _ in 0..200 {
        completions += s.advance(16.0, &mut rng);
        assert!(s.positions().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
    assert!(completions > 0);
    assert!(s.speed_factor(0.5).is_finite());
}
