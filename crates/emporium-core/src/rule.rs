//! Per-category daily update rules.

use serde::{Deserialize, Serialize};

use crate::bounds;
use crate::item::Item;

/// Tickets appreciate an extra point once the event is this close.
const EVENT_SOON: i32 = 11;

/// And one more point again inside the final rush window.
const EVENT_IMMINENT: i32 = 6;

/// One item category's daily mutation policy.
///
/// A closed set of stateless policies, selected per item by the
/// [`RuleRegistry`](crate::RuleRegistry). Every rule is applied exactly once
/// per tick per item and never fails: all quality movement is clamped by
/// [`bounds`], and any unrecognized item falls back to [`Self::Ordinary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateRule {
    /// Never ages and never changes quality. Legendary quality is
    /// conventionally the sentinel 80, but nothing validates or repairs it:
    /// a legendary item keeps whatever quality it was stocked with, forever.
    Legendary,

    /// Gains quality as it ages, twice as fast past the sell date.
    Appreciating,

    /// Gains quality faster as the event nears, then becomes worthless the
    /// moment the date passes.
    EventTicket,

    /// Degrades twice as fast as ordinary stock.
    FastDecaying,

    /// Ordinary stock: loses one quality per day, two past the sell date.
    Ordinary,
}

impl UpdateRule {
    /// Apply one day of aging to `item`.
    ///
    /// Every rule except [`Self::Legendary`] first decrements `sell_in`, then
    /// adjusts quality, then applies its past-deadline adjustment against the
    /// already-decremented `sell_in`.
    pub fn apply(self, item: &mut Item) {
        match self {
            Self::Legendary => {}
            Self::Appreciating => {
                item.sell_in -= 1;
                bounds::increase(item, 1);
                if item.sell_in < 0 {
                    bounds::increase(item, 1);
                }
            }
            Self::EventTicket => {
                item.sell_in -= 1;
                bounds::increase(item, 1);
                if item.sell_in < EVENT_SOON {
                    bounds::increase(item, 1);
                }
                if item.sell_in < EVENT_IMMINENT {
                    bounds::increase(item, 1);
                }
                if item.sell_in < 0 {
                    // A reset, not a clamp: tickets are worthless after the event.
                    item.quality = 0;
                }
            }
            Self::FastDecaying => decay(item, 2),
            Self::Ordinary => decay(item, 1),
        }
    }
}

/// Shared decay step: `amount` off per day, twice that past the deadline.
fn decay(item: &mut Item, amount: i32) {
    item.sell_in -= 1;
    bounds::decrease(item, amount);
    if item.sell_in < 0 {
        bounds::decrease(item, amount);
    }
}
