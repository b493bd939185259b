//! The `idle -> flying -> revealed -> idle` draw cycle.
//!
//! The controller never sleeps. `pick` hands back a [`ScheduledReveal`] and
//! the host calls [`DrawController::complete_flight`] once the delay elapses,
//! so tests drive time explicitly and a dropped timer simply never completes.
use crate::cards::CardCatalog;
use crate::clock::{Clock, current_date};
use crate::constants::FLY_MS;
use crate::layout::FanConfig;
use crate::quota::{self, DailyPickRecord, QuotaBackend, QuotaStore};
use crate::session::{
    DrawPhase, DrawSession, DrawStatus, FlightToken, PickOutcome, PickRejection, RevealOutcome,
    ScheduledReveal, StatusLine,
};
use rand::{Rng, RngCore};
use std::time::Duration;

/// Draw phase machine with injected storage, clock, and randomness.
#[derive(Debug)]
pub struct DrawController<B, C, R> {
    catalog: CardCatalog,
    layout: FanConfig,
    store: QuotaStore<B>,
    clock: C,
    rng: R,
    vip: bool,
    count: u32,
    /// Local date `count` belongs to.
    count_date: String,
    locked: bool,
    phase: DrawPhase,
    session: Option<DrawSession>,
    next_token: u64,
    fly_delay: Duration,
}

impl<B, C, R> DrawController<B, C, R>
where
    B: QuotaBackend,
    C: Clock,
    R: RngCore,
{
    /// Build a controller and load today's count from the store.
    pub fn new(catalog: CardCatalog, store: QuotaStore<B>, clock: C, rng: R, vip: bool) -> Self {
        let mut controller = Self {
            catalog,
            layout: FanConfig::default(),
            store,
            clock,
            rng,
            vip,
            count: 0,
            count_date: String::new(),
            locked: false,
            phase: DrawPhase::Idle,
            session: None,
            next_token: 0,
            fly_delay: Duration::from_millis(FLY_MS),
        };
        controller.reload_count();
        controller
    }

    #[must_use]
    pub fn with_fly_delay(mut self, delay: Duration) -> Self {
        self.fly_delay = delay;
        self
    }

    fn today(&self) -> String {
        current_date(&self.clock)
    }

    /// Reload the count when the local date moved on while idle.
    fn roll_over_day(&mut self) {
        if self.phase == DrawPhase::Idle && self.count_date != self.today() {
            self.reload_count();
        }
    }

    fn reload_count(&mut self) {
        let today = self.today();
        self.count = self.store.count_for(&today);
        self.locked = !self.vip && quota::is_over_quota(self.count);
        self.count_date = today;
    }

    #[must_use]
    pub const fn phase(&self) -> DrawPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_vip(&self) -> bool {
        self.vip
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub const fn can_pick(&self) -> bool {
        self.vip || !self.locked
    }

    /// Draws completed today.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        quota::remaining(self.count)
    }

    /// Slot the current session started from, kept until `again`.
    #[must_use]
    pub fn active_slot(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.slot)
    }

    #[must_use]
    pub fn pending_reveal(&self) -> Option<ScheduledReveal> {
        match (self.phase, &self.session) {
            (DrawPhase::Flying, Some(session)) => Some(ScheduledReveal {
                token: session.token,
                delay: self.fly_delay,
                front_image: session.front_image.clone(),
            }),
            _ => None,
        }
    }

    /// The drawn card, visible only once revealed.
    #[must_use]
    pub fn revealed(&self) -> Option<&DrawSession> {
        match self.phase {
            DrawPhase::Revealed => self.session.as_ref(),
            DrawPhase::Idle | DrawPhase::Flying => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> DrawStatus {
        DrawStatus {
            phase: self.phase,
            can_pick: self.can_pick(),
            locked: self.locked,
            vip: self.vip,
            count: self.count,
            remaining: self.remaining(),
            active_slot: self.active_slot(),
        }
    }

    #[must_use]
    pub fn status_line(&self) -> StatusLine {
        self.status().status_line()
    }

    #[must_use]
    pub const fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn layout(&self) -> &FanConfig {
        &self.layout
    }

    #[must_use]
    pub const fn store(&self) -> &QuotaStore<B> {
        &self.store
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub const fn rng(&self) -> &R {
        &self.rng
    }

    /// Start drawing from `slot`.
    ///
    /// The card is chosen uniformly from the whole catalog here and never
    /// recomputed; the slot only drives the animation. A new local day
    /// resets the count first; rejections leave all other state untouched.
    pub fn pick(&mut self, slot: usize) -> PickOutcome {
        self.roll_over_day();
        let rejection = if self.phase != DrawPhase::Idle {
            Some(PickRejection::NotIdle)
        } else if !self.can_pick() {
            Some(PickRejection::OverQuota)
        } else if slot >= self.layout.total_slots() {
            Some(PickRejection::InvalidSlot)
        } else if self.catalog.is_empty() {
            Some(PickRejection::EmptyCatalog)
        } else {
            None
        };
        if let Some(reason) = rejection {
            log::debug!("pick({slot}) ignored: {reason:?} in {} phase", self.phase);
            return PickOutcome::Rejected(reason);
        }

        let index = self.rng.gen_range(0..self.catalog.len());
        let Some(card) = self.catalog.by_index(index).cloned() else {
            return PickOutcome::Rejected(PickRejection::EmptyCatalog);
        };
        self.next_token = self.next_token.wrapping_add(1);
        let token = FlightToken(self.next_token);
        let front_image = card.front_image();
        self.session = Some(DrawSession {
            slot,
            card,
            front_image: front_image.clone(),
            token,
        });
        self.phase = DrawPhase::Flying;
        PickOutcome::Started(ScheduledReveal {
            token,
            delay: self.fly_delay,
            front_image,
        })
    }

    /// Finish the flight identified by `token`: commit the quota, then reveal.
    ///
    /// Returns `None` for a token that is stale, cancelled, or arrives outside
    /// the flying phase; nothing is committed in that case.
    pub fn complete_flight(&mut self, token: FlightToken) -> Option<RevealOutcome> {
        let session = match (self.phase, &self.session) {
            (DrawPhase::Flying, Some(session)) if session.token == token => session.clone(),
            _ => {
                log::debug!("flight {token:?} no longer pending");
                return None;
            }
        };

        let today = self.today();
        let mut record: DailyPickRecord = self.store.commit_draw(&today, session.card.id);
        if today == self.count_date && record.count <= self.count {
            // Storage lost this session's earlier draws; keep counting in memory.
            record.count = self.count.saturating_add(1);
            self.store.save(&record);
        }
        self.count = record.count;
        self.count_date = today;
        if !self.vip && quota::is_over_quota(self.count) {
            self.locked = true;
        }
        self.phase = DrawPhase::Revealed;
        log::info!(
            "drew card {} on {} (count {})",
            session.card.id,
            record.date,
            record.count
        );

        Some(RevealOutcome {
            card: session.card,
            front_image: session.front_image,
            record,
        })
    }

    /// Abandon an in-flight draw without committing it.
    pub fn cancel_flight(&mut self) -> bool {
        if self.phase != DrawPhase::Flying {
            return false;
        }
        self.session = None;
        self.phase = DrawPhase::Idle;
        true
    }

    /// Leave the result and return to the pile. Quota is untouched.
    pub fn again(&mut self) -> bool {
        if self.phase != DrawPhase::Revealed {
            log::debug!("again() ignored in {} phase", self.phase);
            return false;
        }
        self.session = None;
        self.phase = DrawPhase::Idle;
        true
    }

    /// Flip the VIP flag. Turning it off re-checks today's count against the limit.
    pub fn toggle_vip(&mut self) -> bool {
        self.vip = !self.vip;
        if self.vip {
            self.locked = false;
        } else {
            let today = self.today();
            let stored = self.store.count_for(&today);
            let session = if today == self.count_date { self.count } else { 0 };
            self.locked = quota::is_over_quota(stored.max(session));
        }
        self.vip
    }

    /// Pick up a local date rollover while idle; returns the current count.
    pub fn refresh_day(&mut self) -> u32 {
        self.roll_over_day();
        self.count
    }
}
