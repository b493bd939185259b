//! Draw phases and the transient per-pick session.
use crate::cards::Card;
use crate::quota::DailyPickRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Which part of the page is interactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawPhase {
    /// Pile is selectable; no result shown.
    #[default]
    Idle,
    /// A card is in the air; nothing is selectable.
    Flying,
    /// The result is shown and the pile is hidden.
    Revealed,
}

impl DrawPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Flying => "flying",
            Self::Revealed => "revealed",
        }
    }
}

impl fmt::Display for DrawPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one flight so a stale or cancelled timer cannot complete a newer pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlightToken(pub u64);

/// Deferred `flying -> revealed` transition the host must schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReveal {
    pub token: FlightToken,
    pub delay: Duration,
    /// Face image of the chosen card, for preloading while the card flies.
    pub front_image: String,
}

/// State of one pick, fixed at pick time and carried unchanged to the reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawSession {
    pub slot: usize,
    pub card: Card,
    pub front_image: String,
    pub token: FlightToken,
}

/// Why a pick was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickRejection {
    NotIdle,
    OverQuota,
    InvalidSlot,
    EmptyCatalog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Started(ScheduledReveal),
    Rejected(PickRejection),
}

impl PickOutcome {
    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }

    #[must_use]
    pub const fn scheduled(&self) -> Option<&ScheduledReveal> {
        match self {
            Self::Started(reveal) => Some(reveal),
            Self::Rejected(_) => None,
        }
    }
}

/// Result of a completed flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    pub card: Card,
    pub front_image: String,
    pub record: DailyPickRecord,
}

/// Headline shown above the pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Vip,
    Locked,
    Remaining(u32),
}

/// Snapshot the presentation layer renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawStatus {
    pub phase: DrawPhase,
    pub can_pick: bool,
    pub locked: bool,
    pub vip: bool,
    pub count: u32,
    pub remaining: u32,
    pub active_slot: Option<usize>,
}

impl DrawStatus {
    #[must_use]
    pub const fn status_line(&self) -> StatusLine {
        if self.vip {
            StatusLine::Vip
        } else if self.locked {
            StatusLine::Locked
        } else {
            StatusLine::Remaining(self.remaining)
        }
    }

    /// Whether pile buttons accept clicks.
    #[must_use]
    pub const fn pile_interactive(&self) -> bool {
        self.can_pick && matches!(self.phase, DrawPhase::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> DrawStatus {
        DrawStatus {
            phase: DrawPhase::Idle,
            can_pick: true,
            locked: false,
            vip: false,
            count: 1,
            remaining: 2,
            active_slot: None,
        }
    }

    #[test]
    fn phase_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DrawPhase::Flying).unwrap(), "\"flying\"");
        assert_eq!(DrawPhase::Revealed.to_string(), "revealed");
        assert_eq!(DrawPhase::default(), DrawPhase::Idle);
    }

    #[test]
    fn status_line_prefers_vip_then_lock() {
        let base = status();
        assert_eq!(base.status_line(), StatusLine::Remaining(2));
        let locked = DrawStatus {
            locked: true,
            can_pick: false,
            ..base
        };
        assert_eq!(locked.status_line(), StatusLine::Locked);
        assert!(!locked.pile_interactive());
        let vip = DrawStatus { vip: true, ..locked };
        assert_eq!(vip.status_line(), StatusLine::Vip);
    }

    #[test]
    fn pile_is_inert_outside_idle() {
        let flying = DrawStatus {
            phase: DrawPhase::Flying,
            ..status()
        };
        assert!(!flying.pile_interactive());
        assert!(status().pile_interactive());
    }
}
