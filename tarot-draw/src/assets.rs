//! Mapping from card ids to image asset paths.
use crate::constants::{BACK_IMAGE, FRONT_IMAGE_DIR, FRONT_IMAGE_EXT};

/// Relative path of the shared card-back image.
#[must_use]
pub const fn back_image_path() -> &'static str {
    BACK_IMAGE
}

/// Relative path of a card face; the id is zero-padded to two digits.
#[must_use]
pub fn front_image_path(card_id: u32) -> String {
    format!("{FRONT_IMAGE_DIR}/{card_id:02}.{FRONT_IMAGE_EXT}")
}
