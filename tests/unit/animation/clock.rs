use super::*;

#[test]
fn manual_clock_sleep_advances_time() {
    let clock = ManualClock::new();
    assert_eq!(clock.now(), Duration::ZERO);
    clock.sleep(Duration::from_millis(16));
    clock.advance(Duration::from_millis(4));
    assert_eq!(clock.now(), Duration::from_millis(20));
    clock.set(Duration::from_millis(5));
    assert_eq!(clock.now(), Duration::from_millis(5));
}

#[test]
fn completion_resolves_at_deadline() {
    let c = Completion::after(Duration::from_millis(100), Duration::from_millis(280));
    assert_eq!(c.deadline(), Duration::from_millis(380));
    assert!(!c.is_resolved(Duration::from_millis(379)));
    assert!(c.is_resolved(Duration::from_millis(380)));
    assert_eq!(c.remaining(Duration::from_millis(300)), Duration::from_millis(80));
    assert_eq!(c.remaining(Duration::from_millis(900)), Duration::ZERO);
}

#[test]
fn wait_on_manual_clock_lands_exactly_on_deadline() {
    let clock = ManualClock::new();
    clock.set(Duration::from_millis(7));
    let c = Completion::after(clock.now(), Duration::from_millis(280));
    c.wait(&clock);
    assert_eq!(clock.now(), Duration::from_millis(287));

    // Already resolved: no further movement.
    c.wait(&clock);
    assert_eq!(clock.now(), Duration::from_millis(287));
}

#[test]
fn system_clock_wait_is_not_early() {
    let clock = SystemClock::new();
    let c = Completion::after(clock.now(), Duration::from_millis(20));
    c.wait(&clock);
    assert!(clock.now() >= c.deadline());
}
