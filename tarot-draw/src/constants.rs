//! Centralized tuning constants for the daily draw.
//!
//! Quota, timing, and storage keys live here so a change to any of them is a
//! reviewed code change rather than an asset edit.

// Quota ---------------------------------------------------------------------
/// Maximum number of draws a non-VIP player may complete per local day.
pub const MAX_DAILY_PICKS: u32 = 3;

/// Local-storage key for the persisted daily record.
pub const STORAGE_KEY: &str = "tarot_today_pick";

/// Fixed timezone the calendar day is computed in (UTC+8).
pub const TIMEZONE_OFFSET_HOURS: i32 = 8;

// Timing --------------------------------------------------------------------
/// Duration of the flying phase before the result is revealed.
pub const FLY_MS: u64 = 1_800;

/// Secondary hold after the reveal; carries no state change.
pub const REVEAL_HOLD_MS: u64 = 900;

// Assets --------------------------------------------------------------------
pub const BACK_IMAGE: &str = "cards/back.png";
pub(crate) const FRONT_IMAGE_DIR: &str = "cards";
pub(crate) const FRONT_IMAGE_EXT: &str = "png";

// Launch parameters ---------------------------------------------------------
pub const VIP_QUERY_KEY: &str = "vip";
pub const VIP_QUERY_VALUE: &str = "1";

// RNG -----------------------------------------------------------------------
pub(crate) const DRAW_STREAM_TAG: &[u8] = b"draw";
