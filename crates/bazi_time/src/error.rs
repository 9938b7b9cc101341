//! Error types for time handling.

use thiserror::Error;

/// Errors from offset parsing or timestamp arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// UTC offset text could not be parsed or is outside ±14 hours.
    #[error("invalid UTC offset: {0}")]
    InvalidOffset(String),
    /// A numeric input was NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    /// Shifting the timestamp left the representable calendar range.
    #[error("timestamp out of range: {0}")]
    OutOfRange(String),
}
