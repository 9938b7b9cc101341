//! Error types for parsing chart symbols.

use thiserror::Error;

/// Errors from turning text into stems, branches, elements or pillars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Character is not one of the 10 heavenly stems.
    #[error("unknown heavenly stem: {0:?}")]
    UnknownStem(char),
    /// Character is not one of the 12 earthly branches.
    #[error("unknown earthly branch: {0:?}")]
    UnknownBranch(char),
    /// Name is not one of the five elements.
    #[error("unknown element: {0:?}")]
    UnknownElement(String),
    /// Pillar text is not exactly one stem followed by one branch.
    #[error("invalid pillar: {0:?}")]
    InvalidPillar(String),
}
