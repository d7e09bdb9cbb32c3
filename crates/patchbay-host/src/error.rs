//! Host boundary error types
//!
//! Resolution cannot fail; only the stores behind the adapter can.

use std::path::PathBuf;

/// Errors raised while reading from or publishing to the host store
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Store file could not be read or written
    #[error("host store I/O error: {path}: {source}")]
    Io {
        /// Path of the store file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Store contents could not be (de)serialized
    #[error("host store format error: {0}")]
    Format(#[from] serde_yaml::Error),

    /// The host refused a write
    #[error("host rejected write to '{path}': {reason}")]
    Rejected {
        /// Path that was being written
        path: String,
        /// Why the write was refused
        reason: String,
    },
}

impl HostError {
    /// Create an I/O error for the given store path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a rejected-write error
    pub fn rejected(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
