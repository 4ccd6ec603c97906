//! Error types for lootbuilder.
//!
//! Library crates use [`LootBuilderError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all lootbuilder operations.
#[derive(Debug, thiserror::Error)]
pub enum LootBuilderError {
    /// Invalid raid level identifier (empty, path separators, reserved names).
    #[error("invalid raid level: {message}")]
    Naming { message: String },

    /// The pool fragment directory does not exist or is not a directory.
    #[error("pools directory not found: {path:?}")]
    MissingPoolsDir { path: PathBuf },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A pool fragment failed the well-formedness check.
    #[error("invalid pool fragment {path:?}: {message}")]
    Fragment { path: PathBuf, message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, LootBuilderError>;

impl LootBuilderError {
    /// Create a naming error from any displayable message.
    pub fn naming(msg: impl Into<String>) -> Self {
        Self::Naming {
            message: msg.into(),
        }
    }

    /// Create a missing-pools-directory error for the given path.
    pub fn missing_pools_dir(path: impl Into<PathBuf>) -> Self {
        Self::MissingPoolsDir { path: path.into() }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a fragment error naming the offending file.
    pub fn fragment(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Fragment {
            path: path.into(),
            message: msg.into(),
        }
    }
}
