//! Quality clamping primitives.
//!
//! All rule-driven quality movement routes through these helpers, so the
//! `[MIN_QUALITY, MAX_QUALITY]` legal range can never be escaped by a normal
//! update. Being outside a boundary makes the matching helper a no-op; a
//! quality that already violates the range is left where it is rather than
//! dragged back in.

use crate::item::Item;

/// Upper bound of the legal quality range.
pub const MAX_QUALITY: i32 = 50;

/// Lower bound of the legal quality range.
pub const MIN_QUALITY: i32 = 0;

/// Raise `quality` by `amount`, never past [`MAX_QUALITY`].
///
/// Only the remaining headroom is applied when `amount` would overshoot;
/// a no-op when quality is already at or above the ceiling. `amount` is
/// expected to be non-negative.
pub fn increase(item: &mut Item, amount: i32) {
    if item.quality < MAX_QUALITY {
        item.quality += amount.min(MAX_QUALITY - item.quality);
    }
}

/// Lower `quality` by `amount`, never below [`MIN_QUALITY`].
///
/// Symmetric headroom logic to [`increase`]; a no-op when quality is already
/// at or below the floor. `amount` is expected to be non-negative.
pub fn decrease(item: &mut Item, amount: i32) {
    if item.quality > MIN_QUALITY {
        item.quality -= amount.min(item.quality - MIN_QUALITY);
    }
}
