use chrono::{Duration, TimeZone, Utc};
use sentiviz::util::Debouncer;

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap()
}

#[test]
fn burst_collapses_to_one_trailing_fire_with_last_value() {
    let mut debouncer = Debouncer::new(Duration::milliseconds(300));
    let t0 = start();

    for i in 1..=5i64 {
        debouncer.call(i, t0 + Duration::milliseconds(50 * (i - 1)));
    }
    let last_call = t0 + Duration::milliseconds(200);

    assert_eq!(debouncer.poll(last_call + Duration::milliseconds(299)), None);
    assert_eq!(
        debouncer.poll(last_call + Duration::milliseconds(300)),
        Some(5)
    );
    assert_eq!(debouncer.poll(last_call + Duration::milliseconds(600)), None);
}

#[test]
fn each_call_resets_the_quiet_window() {
    let mut debouncer = Debouncer::new(Duration::milliseconds(300));
    let t0 = start();

    debouncer.call("a", t0);
    debouncer.call("b", t0 + Duration::milliseconds(250));

    // The first deadline has passed, but the second call re-armed the window.
    assert_eq!(debouncer.poll(t0 + Duration::milliseconds(300)), None);
    assert_eq!(
        debouncer.poll(t0 + Duration::milliseconds(550)),
        Some("b")
    );
}

#[test]
fn poll_without_calls_never_fires() {
    let mut debouncer: Debouncer<u32> = Debouncer::new(Duration::milliseconds(300));
    assert_eq!(debouncer.poll(start()), None);
    assert!(!debouncer.is_pending());
}

#[test]
fn cancel_drops_the_pending_call() {
    let mut debouncer = Debouncer::new(Duration::milliseconds(300));
    let t0 = start();

    debouncer.call(7, t0);
    assert!(debouncer.is_pending());
    debouncer.cancel();
    assert_eq!(debouncer.poll(t0 + Duration::milliseconds(300)), None);
}
