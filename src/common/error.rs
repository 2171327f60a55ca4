//! Error types for pagesim.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Simulators only ever produce [`Error::InvalidInput`] (and, on a bug,
/// [`Error::CapacityViolation`]). Everything else comes from the exporter.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected input: zero frame capacity, a sentinel page id in the
    /// reference string, an unknown policy name.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A page was inserted into a full frame set without a prior eviction.
    ///
    /// This indicates a bug in a simulator, never a user error.
    #[error("frame set capacity violated (capacity {capacity})")]
    CapacityViolation { capacity: usize },

    /// The export destination could not be written.
    #[error("failed to export results to {}: {source}", .path.display())]
    ExportIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading an exported artifact back.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The artifact decoded but failed its integrity checks.
    #[error("corrupt artifact: {0}")]
    CorruptArtifact(String),
}

impl Error {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
