use super::*;

const VP: Viewport = Viewport {
    width: 800,
    height: 600,
};

#[test]
fn idle_driver_runs_nothing() {
    let mut d = FrameDriver::default();
    assert!(!d.has_pending());
    assert_eq!(d.begin_frame(0.0, VP), None);
}

#[test]
fn first_frame_primes_and_reports_resize() {
    let mut d = FrameDriver::default();
    d.start();
    let b = d.begin_frame(10.0, VP).unwrap();
    assert_eq!(b.raw_dt_ms, None);
    assert!(b.resized);
    d.end_frame();

    let b = d.begin_frame(26.0, VP).unwrap();
    assert_eq!(b.raw_dt_ms, Some(16.0));
    assert!(!b.resized);
    d.end_frame();

    let b = d.begin_frame(42.0, Viewport::new(1024, 768)).unwrap();
    assert!(b.resized);
}

#[test]
fn callback_is_consumed_until_rescheduled() {
    let mut d = FrameDriver::default();
    d.start();
    assert!(d.begin_frame(0.0, VP).is_some());
    // Not re-requested yet.
    assert!(d.begin_frame(16.0, VP).is_none());
    d.end_frame();
    assert!(d.has_pending());
}

#[test]
fn stop_mid_frame_suppresses_reschedule() {
    let mut d = FrameDriver::default();
    d.start();
    assert!(d.begin_frame(0.0, VP).is_some());
    d.stop();
    d.end_frame();
    assert!(!d.has_pending());
    assert!(!d.is_active());
    assert!(d.begin_frame(16.0, VP).is_none());
}

#[test]
fn restart_resets_clock() {
    let mut d = FrameDriver::default();
    d.start();
    d.begin_frame(0.0, VP);
    d.end_frame();
    d.begin_frame(16.0, VP);
    d.stop();
    d.start();
    let b = d.begin_frame(5000.0, VP).unwrap();
    assert_eq!(b.raw_dt_ms, None);
    assert!(!b.resized);
}
