use chrono::{Duration, TimeZone, Utc};
use tarot_draw::{
    DrawPhase, FixedClock, MAX_DAILY_PICKS, MemoryBackend, PickOutcome, PickRejection,
    STORAGE_KEY, StatusLine, standard_controller,
};

fn morning_clock() -> FixedClock {
    // 2025-02-10 09:00 local (UTC+8)
    FixedClock::new(Utc.with_ymd_and_hms(2025, 2, 10, 1, 0, 0).single().unwrap())
}

#[test]
fn three_draws_then_locked_until_tomorrow() {
    let backend = MemoryBackend::new();
    let clock = morning_clock();
    let mut controller = standard_controller(backend.clone(), &clock, 0x5EED, false);

    for expected in 1..=MAX_DAILY_PICKS {
        let reveal = controller.pick(10).scheduled().cloned().expect("pick accepted");
        assert_eq!(controller.phase(), DrawPhase::Flying);
        let outcome = controller.complete_flight(reveal.token).expect("revealed");
        assert_eq!(outcome.record.count, expected);
        assert_eq!(controller.phase(), DrawPhase::Revealed);
        assert!(controller.again());
    }

    assert!(controller.is_locked());
    assert_eq!(controller.status_line(), StatusLine::Locked);
    assert_eq!(
        controller.pick(0),
        PickOutcome::Rejected(PickRejection::OverQuota)
    );

    // A fresh page load on the same day is still locked.
    let reloaded = standard_controller(backend.clone(), &clock, 1, false);
    assert!(reloaded.is_locked());
    assert_eq!(reloaded.count(), MAX_DAILY_PICKS);

    // Local midnight passes.
    clock.advance(Duration::hours(15));
    let next_day = standard_controller(backend.clone(), &clock, 2, false);
    assert!(!next_day.is_locked());
    assert_eq!(next_day.count(), 0);
    assert_eq!(next_day.status_line(), StatusLine::Remaining(3));

    // The tab left open overnight unlocks on its next pick.
    let reveal = controller.pick(0).scheduled().cloned().expect("new day pick accepted");
    let outcome = controller.complete_flight(reveal.token).expect("revealed");
    assert_eq!(outcome.record.date, "2025-02-11");
    assert_eq!(outcome.record.count, 1);
    assert_eq!(controller.status_line(), StatusLine::Remaining(2));
}

#[test]
fn stored_record_matches_wire_format() {
    let backend = MemoryBackend::new();
    let clock = morning_clock();
    let mut controller = standard_controller(backend.clone(), &clock, 3, false);
    let reveal = controller.pick(0).scheduled().cloned().unwrap();
    let outcome = controller.complete_flight(reveal.token).unwrap();

    let raw = backend.raw(STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["date"], "2025-02-10");
    assert_eq!(value["count"], 1);
    assert_eq!(value["lastCardId"], outcome.card.id);
}

#[test]
fn garbage_in_storage_reads_as_fresh_day() {
    let backend = MemoryBackend::new();
    backend.insert_raw(STORAGE_KEY, "not json at all");
    let clock = morning_clock();
    let mut controller = standard_controller(backend.clone(), &clock, 4, false);
    assert_eq!(controller.count(), 0);
    let reveal = controller.pick(0).scheduled().cloned().unwrap();
    let outcome = controller.complete_flight(reveal.token).unwrap();
    assert_eq!(outcome.record.count, 1);
}

#[test]
fn vip_draws_past_quota() {
    let backend = MemoryBackend::new();
    let clock = morning_clock();
    let mut controller = standard_controller(backend, &clock, 5, true);
    for _ in 0..(MAX_DAILY_PICKS * 2) {
        let reveal = controller.pick(21).scheduled().cloned().unwrap();
        controller.complete_flight(reveal.token).unwrap();
        controller.again();
    }
    assert_eq!(controller.count(), MAX_DAILY_PICKS * 2);
    assert!(controller.can_pick());
    assert_eq!(controller.remaining(), 0);
}
