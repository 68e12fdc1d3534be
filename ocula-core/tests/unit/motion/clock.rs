use super::*;

#[test]
fn first_tick_primes_then_reports_deltas() {
    let mut clock = FrameClock::default();
    assert!(!clock.is_primed());
    assert_eq!(clock.tick(100.0), None);
    assert!(clock.is_primed());
    assert_eq!(clock.tick(116.0), Some(16.0));
    clock.reset();
    assert_eq!(clock.tick(500.0), None);
}

#[test]
fn clamp_policy_bounds_delta() {
    let p = DeltaPolicy::Clamp {
        max_ms: STALL_CLAMP_MS,
    };
    assert_eq!(p.apply(16.0), 16.0);
    assert_eq!(p.apply(5000.0), 50.0);
    assert_eq!(p.apply(-3.0), 0.0);
    assert_eq!(p.apply(f64::NAN), 0.0);
}

#[test]
fn discard_policy_drops_stalls() {
    let p = DeltaPolicy::Discard {
        threshold_ms: STALL_DISCARD_MS,
    };
    assert_eq!(p.apply(999.0), 999.0);
    assert_eq!(p.apply(1000.0), 0.0);
    assert_eq!(p.apply(-1.0), 0.0);
}
