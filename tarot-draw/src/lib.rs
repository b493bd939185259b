//! Daily Tarot draw engine
//!
//! Platform-agnostic core for the daily card draw: the card catalog, the
//! per-day quota store, the fanned pile layout, and the draw phase machine.
//! Storage, clock, and randomness are injected so the browser front end and
//! the simulation tester share exactly the same rules.

pub mod assets;
pub mod cards;
pub mod clock;
pub mod constants;
pub mod controller;
pub mod layout;
pub mod quota;
pub mod rng;
pub mod session;
pub mod vip;

// Re-export commonly used types
pub use assets::{back_image_path, front_image_path};
pub use cards::{Card, CardCatalog, CatalogError};
pub use clock::{Clock, FixedClock, SystemClock, current_date, date_string};
pub use constants::{FLY_MS, MAX_DAILY_PICKS, REVEAL_HOLD_MS, STORAGE_KEY};
pub use controller::DrawController;
pub use layout::{FanConfig, FanSlot, Row};
pub use quota::{
    DailyPickRecord, MemoryBackend, NullBackend, QuotaBackend, QuotaError, QuotaStore,
};
pub use rng::DrawRng;
pub use session::{
    DrawPhase, DrawSession, DrawStatus, FlightToken, PickOutcome, PickRejection, RevealOutcome,
    ScheduledReveal, StatusLine,
};
pub use vip::vip_from_query;

/// Controller wired with the embedded catalog and a seeded draw stream.
pub fn standard_controller<B, C>(
    backend: B,
    clock: C,
    seed: u64,
    vip: bool,
) -> DrawController<B, C, DrawRng>
where
    B: QuotaBackend,
    C: Clock,
{
    DrawController::new(
        CardCatalog::load_from_static(),
        QuotaStore::new(backend),
        clock,
        DrawRng::from_user_seed(seed),
        vip,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn standard_controller_persists_under_default_key() {
        let backend = MemoryBackend::new();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap());
        let mut controller = standard_controller(backend.clone(), &clock, 99, false);
        let reveal = controller.pick(0).scheduled().cloned().unwrap();
        let outcome = controller.complete_flight(reveal.token).unwrap();

        let stored = backend.raw(STORAGE_KEY).expect("record written");
        let record: DailyPickRecord = serde_json::from_str(&stored).unwrap();
        assert_eq!(record, outcome.record);
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(controller.rng().draws(), 1);
    }

    #[test]
    fn same_seed_draws_same_cards() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap());
        let draw = |seed| {
            let mut controller = standard_controller(NullBackend, &clock, seed, true);
            (0..4)
                .map(|slot| {
                    let reveal = controller.pick(slot).scheduled().cloned().unwrap();
                    let id = controller.complete_flight(reveal.token).unwrap().card.id;
                    controller.again();
                    id
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(5), draw(5));
    }
}
