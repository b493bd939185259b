//! Values read once from the page at start-up.
use crate::dom;
use tarot_draw::vip_from_query;

/// Whether the page was opened with `?vip=1`.
#[must_use]
pub fn is_vip_device() -> bool {
    vip_from_query(&dom::location_search())
}

/// Seed for the draw stream, mixed from `Math.random()` and the current time.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn entropy_seed() -> u64 {
    let random = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    let now = js_sys::Date::now() as u64;
    random ^ now.rotate_left(32)
}
