use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from locating, reading or validating a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid config value `{key}`: {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    /// File the error came from, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => Some(path),
            Self::Invalid { .. } => None,
        }
    }

    pub(crate) fn invalid(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::Invalid {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}
