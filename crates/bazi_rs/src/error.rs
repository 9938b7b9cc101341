use bazi_time::TimeError;
use thiserror::Error;

/// Errors from chart computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Non-finite input or a corrected timestamp outside the calendar range.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// The location resolver had no entry for a place name.
    #[error("could not resolve place {0:?}")]
    UnresolvedPlace(String),
}
