use super::*;
use crate::{driver::stage::Stage, foundation::math::ScriptedRandom, patterns::Stepper};

/// Completes once on every advanced frame.
struct EveryFrame;

impl Stepper for EveryFrame {
    fn reset(&mut self, _rng: &mut dyn RandomSource) {}

    fn advance(&mut self, _raw_dt_ms: f64, _rng: &mut dyn RandomSource) -> u32 {
        1
    }

    fn draw(&self, _stage: &mut Stage<'_>) {}
}

fn trainer(target: RepeatTarget) -> Trainer {
    Trainer::new(
        Pattern {
            name: "every-frame",
            worker: Worker::new(EveryFrame),
        },
        target,
    )
}

fn tick(t: &mut Trainer, now: f64) -> Option<TrainerFrame> {
    let mut rng = ScriptedRandom::new([0.0]);
    t.frame(now, Viewport::new(8, 8), &Settings::default(), &mut rng)
}

#[test]
fn finishes_after_target_and_stops_worker() {
    let mut t = trainer(RepeatTarget::Count(3));
    let mut rng = ScriptedRandom::new([0.0]);
    t.start(&mut rng);

    assert!(tick(&mut t, 0.0).unwrap().events.is_empty());
    assert_eq!(
        tick(&mut t, 16.0).unwrap().events,
        vec![TrainerEvent::Repeated { count: 1 }]
    );
    assert_eq!(
        tick(&mut t, 32.0).unwrap().events,
        vec![TrainerEvent::Repeated { count: 2 }]
    );
    assert_eq!(
        tick(&mut t, 48.0).unwrap().events,
        vec![TrainerEvent::Finished]
    );
    assert!(!t.is_running());
    assert!(!t.has_pending());
    assert!(tick(&mut t, 64.0).is_none());
}

#[test]
fn unbounded_never_finishes() {
    let mut t = trainer(RepeatTarget::Unbounded);
    let mut rng = ScriptedRandom::new([0.0]);
    t.start(&mut rng);
    for i in 0..100 {
        let frame = tick(&mut t, i as f64 * 16.0).unwrap();
        assert!(!frame.events.contains(&TrainerEvent::Finished));
    }
    assert_eq!(t.count(), 99);
    assert!(t.is_running());
}

#[test]
fn restart_resets_counter() {
    let mut t = trainer(RepeatTarget::Count(5));
    let mut rng = ScriptedRandom::new([0.0]);
    t.start(&mut rng);
    tick(&mut t, 0.0);
    tick(&mut t, 16.0);
    assert_eq!(t.count(), 1);
    t.start(&mut rng);
    assert_eq!(t.count(), 0);
}
