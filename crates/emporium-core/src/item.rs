//! Shop item model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A single piece of stock: its name, days left to sell, and quality score.
///
/// `name` is the item's stable identity — the engine selects an update rule by
/// exact name match and never rewrites it. `sell_in` may go arbitrarily
/// negative once the sale deadline has passed. `quality` stays within
/// `[0, 50]` for everything the standard rules govern; legendary stock carries
/// a fixed sentinel (conventionally 80) that the engine never touches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Item name, matched exactly against the rule registry.
    pub name: String,

    /// Days until the sale deadline; negative means the deadline has passed.
    pub sell_in: i32,

    /// Desirability score.
    pub quality: i32,
}

impl Item {
    /// Create a new item.
    ///
    /// No range validation happens here: whoever stocks the shelf is
    /// responsible for a starting quality within `[0, 50]` (or the legendary
    /// sentinel).
    #[must_use]
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }
}

/// Renders the classic stock-report line: `name, sell_in, quality`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parses a stock-report line back into an item.
///
/// The two trailing comma-separated fields are the integers; everything
/// before them is the name, so names that themselves contain commas
/// round-trip.
impl FromStr for Item {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(CoreError::InvalidStockLine(s.to_string()));
        };

        Ok(Self {
            name: name.trim().to_string(),
            sell_in: sell_in.trim().parse()?,
            quality: quality.trim().parse()?,
        })
    }
}
