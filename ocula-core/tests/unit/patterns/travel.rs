use super::*;

#[test]
fn reversible_completes_on_return() {
    let mut tr = Travel::new(10_000.0, true);
    let mut done = 0;
    let mut frames = 0;
    while done == 0 && frames < 10_000 {
        done += tr.step(50.0, 0.5);
        assert!((0.0..=TRAVEL_TOTAL).contains(&tr.t()));
        frames += 1;
    }
    assert_eq!(done, 1);
    assert_eq!(tr.t(), 0.0);
    assert!(!tr.is_reversing());
    // out and back: 10000 / (50 * 0.5 / 1000 * 10000) = 40 frames each way
    assert_eq!(frames, 80);
}

#[test]
fn one_way_restarts_at_end() {
    let mut tr = Travel::new(10_000.0, false);
    let mut frames = 0;
    loop {
        frames += 1;
        if tr.step(50.0, 0.5) == 1 {
            break;
        }
    }
    assert_eq!(frames, 40);
    assert_eq!(tr.t(), 0.0);
    assert!(!tr.is_reversing());
}

#[test]
fn zero_delta_at_start_is_not_a_completion() {
    let mut tr = Travel::new(2125.0, true);
    assert_eq!(tr.step(0.0, 0.5), 0);
    assert_eq!(tr.step(0.0, 0.0), 0);
}

#[test]
fn oversized_delta_is_clamped() {
    let mut a = Travel::new(2125.0, true);
    let mut b = Travel::new(2125.0, true);
    a.step(50.0, 0.5);
    b.step(5_000.0, 0.5);
    assert_eq!(a.t(), b.t());
}
