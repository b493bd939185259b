//! Wall-clock access and the fixed-offset calendar date.
use crate::constants::TIMEZONE_OFFSET_HOURS;
use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use std::cell::Cell;

/// Source of the current instant; injected so date rollover is testable.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Host system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and simulations.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

fn local_offset() -> FixedOffset {
    FixedOffset::east_opt(TIMEZONE_OFFSET_HOURS * 3600).unwrap_or_else(|| Utc.fix())
}

/// `YYYY-MM-DD` of the instant in the fixed local offset.
#[must_use]
pub fn date_string(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&local_offset())
        .format("%Y-%m-%d")
        .to_string()
}

/// Today's calendar date according to `clock`.
#[must_use]
pub fn current_date<C: Clock + ?Sized>(clock: &C) -> String {
    date_string(clock.now())
}
