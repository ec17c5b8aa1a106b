//! Error types for emporium-core.

use thiserror::Error;

/// Result type alias for emporium-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in emporium-core operations.
///
/// The aging engine itself is total — every item name resolves to a rule and
/// every quality change is clamped — so errors only arise on the stock-line
/// parsing surface.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stock line did not have the `name, sell_in, quality` shape.
    #[error("invalid stock line: {0}")]
    InvalidStockLine(String),

    /// A numeric field in a stock line failed to parse.
    #[error("invalid number in stock line: {0}")]
    Number(#[from] std::num::ParseIntError),
}
