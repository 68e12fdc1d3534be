use super::*;
use crate::{
    foundation::math::ScriptedRandom, render::plan::DisplayList, render::plan::DrawOp,
    session::settings::Settings,
};

#[test]
fn trace_is_cached_once() {
    let p = Parametric::new(lemniscate, lemniscate, 11_000.0, false);
    assert_eq!(p.trace().len(), TRACE_SAMPLES + 1);
    let first = p.trace()[0];
    let last = p.trace()[TRACE_SAMPLES];
    assert!((first.x - last.x).abs() < 1e-9 && (first.y - last.y).abs() < 1e-9);
}

#[test]
fn lemniscate_starts_on_the_right_lobe() {
    let p = Parametric::new(lemniscate, lemniscate, 11_000.0, false);
    let vp = Viewport::new(800, 400);
    // fx(0) = 1, fy(0) = 0
    assert_eq!(p.position(vp), Point::new(600.0, 200.0));
}

#[test]
fn restarting_curve_wraps_to_zero() {
    let mut p = Parametric::new(lemniscate, lemniscate, 11_000.0, false);
    let mut rng = ScriptedRandom::new([0.0]);
    let mut completions = 0;
    for _ in 0..50_000 {
        completions += p.advance(16.0, &mut rng);
        assert!((0.0..=p.travel().total()).contains(&p.travel().t()));
        if completions > 0 {
            break;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(p.travel().t(), 0.0);
}

#[test]
fn oscillating_curve_turns_around() {
    let mut p = Parametric::new(partial_circle, circle, 15_000.0, true);
    let mut rng = ScriptedRandom::new([0.0]);
    let total = p.travel().total();
    p.travel_mut().set_t(total - 1.0);
    assert_eq!(p.advance(50.0, &mut rng), 0);
    assert!(p.travel().is_reversing());
    assert_eq!(p.travel().t(), total);
}

#[test]
fn reference_ring_outline_follows_theme() {
    let p = Parametric::new(partial_circle, circle, 15_000.0, true).with_reference_ring();
    let vp = Viewport::new(720, 360);
    let mut settings = Settings::default();
    settings.dark_mode = true;
    let mut list = DisplayList::new(vp);
    p.draw(&mut Stage::new(&settings, &mut list));

    assert_eq!(list.segment_count(), TRACE_SAMPLES);
    let ring = list
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::Disc {
                center, outline, ..
            } => Some((*center, *outline)),
            _ => None,
        })
        .unwrap();
    assert_eq!(ring.0, Point::new(360.0, 72.0));
    assert_eq!(ring.1.unwrap().color, Rgba8::WHITE);
    assert_eq!(list.shaded_centers().count(), 1);
}

#[test]
fn stalls_keep_curve_parameter_in_range() {
    let mut rng = ScriptedRandom::new([0.0]);
    for oscillating in [false, true] {
        let mut p = Parametric::new(circle, circle, 9_000.0, oscillating);
        let deltas = [16.0, 60_000.0, 999.0, 1_000.0, 50.0];
        for (i, dt) in deltas.iter().cycle().take(5_000).enumerate() {
            p.advance(*dt, &mut rng);
            let t = p.travel().t();
            assert!((0.0..=p.travel().total()).contains(&t), "step {i}: t = {t}");
        }
    }
}
