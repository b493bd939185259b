//! Helpers for constructing URLs to static assets that respect the deployment base path.
use once_cell::sync::Lazy;
use tarot_draw::{back_image_path, front_image_path};

static BACK_IMAGE_URL: Lazy<String> = Lazy::new(|| asset_path(back_image_path()));

/// Prefix `relative` with the deployment base.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/tarot` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL of the card-back image.
#[must_use]
pub fn back_image_url() -> &'static str {
    BACK_IMAGE_URL.as_str()
}

/// URL of a card's face image.
#[must_use]
pub fn front_image_url(card_id: u32) -> String {
    asset_path(&front_image_path(card_id))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
