use super::*;
use crate::foundation::math::ScriptedRandom;

#[test]
fn holds_position_until_first_tick() {
    let mut f = RandomFlick::default();
    let mut rng = ScriptedRandom::new([0.0, 1.0]);
    f.reset(&mut rng);
    for _ in 0..62 {
        f.advance(16.0, &mut rng);
    }
    // 992 ms elapsed
    assert_eq!(f.position(), Point::new(0.5, 0.5));
    f.advance(16.0, &mut rng);
    assert_eq!(f.position(), Point::new(0.5, 0.5));
    // t is now 1008; the jump happens on the next frame
    f.advance(16.0, &mut rng);
    let p = f.position();
    assert!((p.x - 0.2).abs() < 1e-12);
    assert!(p.y > 0.89 && p.y <= 0.9);
}

#[test]
fn stalls_are_discarded() {
    let mut f = RandomFlick::default();
    let mut rng = ScriptedRandom::new([0.3]);
    f.advance(1000.0, &mut rng);
    assert_eq!(f.elapsed(), 0.0);
    f.advance(999.0, &mut rng);
    assert_eq!(f.elapsed(), 999.0);
}

#[test]
fn completes_every_period_and_keeps_ticking() {
    let mut f = RandomFlick::default();
    let mut rng = ScriptedRandom::new([0.1, 0.9, 0.4, 0.6]);
    let mut completions = 0;
    let mut jumps = 0;
    let mut last = f.position();
    for _ in 0..(2 * 15_000 / 20) {
        completions += f.advance(20.0, &mut rng);
        assert!((0.0..FLICK_PERIOD_MS).contains(&f.elapsed()));
        if f.position() != last {
            jumps += 1;
            last = f.position();
        }
    }
    assert_eq!(completions, 2);
    // one jump per elapsed second, minus the one still pending
    assert_eq!(jumps, 29);
}
