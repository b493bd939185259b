//! Headless play-through of the daily draw loop.
//!
//! Each seed plays a run of consecutive local days against one shared
//! in-memory storage. Every day starts from a freshly constructed controller,
//! the way a page reload would, so persistence across loads is exercised too.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use tarot_draw::{
    DrawPhase, FixedClock, MAX_DAILY_PICKS, MemoryBackend, PickOutcome, PickRejection,
    current_date, standard_controller,
};

const SLOT_STREAM: u64 = 0x5107_5EED;

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub days: u32,
    pub attempts_per_day: u32,
    pub vip: bool,
    /// Abandon every n-th started flight before it lands.
    pub abandon_every: Option<u32>,
    pub start: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DayTally {
    pub date: String,
    pub completed: u32,
    pub rejected: u32,
    pub abandoned: u32,
    pub stored_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub seed: u64,
    pub vip: bool,
    pub days: Vec<DayTally>,
    pub card_frequency: BTreeMap<u32, u32>,
    pub rng_draws: u64,
    pub violations: Vec<String>,
    pub passed: bool,
}

impl SeedReport {
    fn new(seed: u64, vip: bool) -> Self {
        Self {
            seed,
            vip,
            days: Vec::new(),
            card_frequency: BTreeMap::new(),
            rng_draws: 0,
            violations: Vec::new(),
            passed: false,
        }
    }

    pub fn completed(&self) -> u32 {
        self.days.iter().map(|d| d.completed).sum()
    }

    pub fn rejected(&self) -> u32 {
        self.days.iter().map(|d| d.rejected).sum()
    }

    pub fn abandoned(&self) -> u32 {
        self.days.iter().map(|d| d.abandoned).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub seeds: usize,
    pub passed: usize,
    pub completed: u32,
    pub rejected: u32,
    pub abandoned: u32,
    pub distinct_cards: usize,
}

impl Summary {
    pub fn from_reports(reports: &[SeedReport]) -> Self {
        let mut seen = BTreeMap::<u32, u32>::new();
        for report in reports {
            for (id, n) in &report.card_frequency {
                *seen.entry(*id).or_default() += n;
            }
        }
        Self {
            seeds: reports.len(),
            passed: reports.iter().filter(|r| r.passed).count(),
            completed: reports.iter().map(SeedReport::completed).sum(),
            rejected: reports.iter().map(SeedReport::rejected).sum(),
            abandoned: reports.iter().map(SeedReport::abandoned).sum(),
            distinct_cards: seen.len(),
        }
    }

    pub const fn all_passed(&self) -> bool {
        self.passed == self.seeds
    }
}

fn should_abandon(every: Option<u32>, started: u32) -> bool {
    every.is_some_and(|n| n > 0 && started % n == 0)
}

pub fn run_seed(seed: u64, cfg: &SimulationConfig) -> SeedReport {
    let backend = MemoryBackend::new();
    let clock = FixedClock::new(cfg.start);
    let mut slots = ChaCha8Rng::seed_from_u64(seed ^ SLOT_STREAM);
    let mut report = SeedReport::new(seed, cfg.vip);
    let mut started = 0_u32;

    for day in 0..cfg.days {
        let mut controller = standard_controller(
            backend.clone(),
            &clock,
            seed.wrapping_add(u64::from(day)),
            cfg.vip,
        );
        let mut tally = DayTally {
            date: current_date(&clock),
            ..DayTally::default()
        };
        if controller.count() != 0 {
            report.violations.push(format!(
                "{} opened with count {} instead of 0",
                tally.date,
                controller.count()
            ));
        }
        let total_slots = controller.layout().total_slots();

        for _ in 0..cfg.attempts_per_day {
            let before = controller.count();
            let slot = slots.gen_range(0..total_slots);
            match controller.pick(slot) {
                PickOutcome::Rejected(PickRejection::OverQuota) => {
                    tally.rejected += 1;
                    if cfg.vip || before < MAX_DAILY_PICKS {
                        report.violations.push(format!(
                            "{}: pick refused as over quota at count {before}",
                            tally.date
                        ));
                    }
                }
                PickOutcome::Rejected(other) => {
                    report
                        .violations
                        .push(format!("{}: unexpected rejection {other:?}", tally.date));
                }
                PickOutcome::Started(reveal) => {
                    started += 1;
                    if !cfg.vip && before >= MAX_DAILY_PICKS {
                        report.violations.push(format!(
                            "{}: pick accepted at count {before}",
                            tally.date
                        ));
                    }
                    if controller.phase() != DrawPhase::Flying {
                        report
                            .violations
                            .push(format!("{}: started pick is not flying", tally.date));
                    }

                    if should_abandon(cfg.abandon_every, started) {
                        controller.cancel_flight();
                        tally.abandoned += 1;
                        if controller.complete_flight(reveal.token).is_some() {
                            report.violations.push(format!(
                                "{}: cancelled flight still revealed",
                                tally.date
                            ));
                        }
                        if controller.count() != before
                            || controller.store().count_for(&tally.date) != before
                        {
                            report.violations.push(format!(
                                "{}: cancelled flight consumed quota",
                                tally.date
                            ));
                        }
                        continue;
                    }

                    match controller.complete_flight(reveal.token) {
                        Some(outcome) => {
                            if outcome.front_image != reveal.front_image {
                                report.violations.push(format!(
                                    "{}: card changed between pick and reveal",
                                    tally.date
                                ));
                            }
                            if outcome.record.count != before + 1 {
                                report.violations.push(format!(
                                    "{}: count went {before} -> {}",
                                    tally.date, outcome.record.count
                                ));
                            }
                            if outcome.record.last_card_id != Some(outcome.card.id) {
                                report.violations.push(format!(
                                    "{}: stored last card {:?} but revealed {}",
                                    tally.date, outcome.record.last_card_id, outcome.card.id
                                ));
                            }
                            *report.card_frequency.entry(outcome.card.id).or_default() += 1;
                            tally.completed += 1;
                        }
                        None => report
                            .violations
                            .push(format!("{}: flight never landed", tally.date)),
                    }
                    if controller.complete_flight(reveal.token).is_some() {
                        report.violations.push(format!(
                            "{}: same flight committed twice",
                            tally.date
                        ));
                    }
                    controller.again();
                }
            }
        }

        tally.stored_count = controller.store().count_for(&tally.date);
        if !cfg.vip && tally.stored_count > MAX_DAILY_PICKS {
            report.violations.push(format!(
                "{}: stored count {} exceeds the daily limit",
                tally.date, tally.stored_count
            ));
        }
        if tally.stored_count != tally.completed {
            report.violations.push(format!(
                "{}: stored count {} but {} reveals",
                tally.date, tally.stored_count, tally.completed
            ));
        }
        report.rng_draws += controller.rng().draws();
        log::debug!(
            "seed {seed} {}: {} drawn, {} refused, {} abandoned",
            tally.date,
            tally.completed,
            tally.rejected,
            tally.abandoned
        );
        report.days.push(tally);
        clock.advance(Duration::days(1));
    }

    report.passed = report.violations.is_empty();
    report
}

pub fn run_all(seeds: &[u64], cfg: &SimulationConfig) -> Vec<SeedReport> {
    seeds.iter().map(|&seed| run_seed(seed, cfg)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::local_morning;

    fn config(vip: bool) -> SimulationConfig {
        SimulationConfig {
            days: 3,
            attempts_per_day: 6,
            vip,
            abandon_every: None,
            start: local_morning("2024-05-01").unwrap(),
        }
    }

    #[test]
    fn regular_player_draws_three_per_day() {
        let report = run_seed(7, &config(false));
        assert!(report.passed, "{:?}", report.violations);
        let dates: Vec<_> = report.days.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, ["2024-05-01", "2024-05-02", "2024-05-03"]);
        for day in &report.days {
            assert_eq!(day.completed, 3);
            assert_eq!(day.rejected, 3);
            assert_eq!(day.stored_count, 3);
        }
        assert_eq!(report.card_frequency.values().sum::<u32>(), 9);
    }

    #[test]
    fn vip_player_is_never_refused() {
        let report = run_seed(7, &config(true));
        assert!(report.passed, "{:?}", report.violations);
        assert_eq!(report.completed(), 18);
        assert_eq!(report.rejected(), 0);
    }

    #[test]
    fn abandoned_flights_do_not_consume_quota() {
        let cfg = SimulationConfig {
            abandon_every: Some(2),
            ..config(false)
        };
        let report = run_seed(3, &cfg);
        assert!(report.passed, "{:?}", report.violations);
        assert!(report.abandoned() > 0);
        assert!(report.days.iter().all(|d| d.stored_count == d.completed));
    }

    #[test]
    fn same_seed_same_cards() {
        let a = run_seed(99, &config(false));
        let b = run_seed(99, &config(false));
        assert_eq!(a.card_frequency, b.card_frequency);
        assert_eq!(a.rng_draws, b.rng_draws);
    }

    #[test]
    fn summary_counts_passes() {
        let reports = run_all(&[1, 2], &config(false));
        let summary = Summary::from_reports(&reports);
        assert_eq!(summary.seeds, 2);
        assert!(summary.all_passed());
        assert_eq!(summary.completed, 18);
        assert!(summary.distinct_cards <= 22);
    }
}
