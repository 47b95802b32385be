//! Error types for the slimbook library

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for slimbook operations
#[derive(Error, Debug)]
pub enum SlimbookError {
    /// Caller supplied an unusable argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Model could not be identified or does not support the feature
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reading, writing or parsing an attribute file failed
    #[error("I/O failure on {}: {source}", .path.display())]
    IoFailure {
        /// Attribute file that was being accessed
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },
}

impl SlimbookError {
    /// Wrap an I/O error together with the attribute path it happened on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        SlimbookError::IoFailure {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Report unparsable attribute content as an I/O failure
    pub fn invalid_data(path: impl AsRef<Path>, detail: impl Into<String>) -> Self {
        Self::io(path, io::Error::new(io::ErrorKind::InvalidData, detail.into()))
    }

    /// Classic errno value for this error (`EINVAL`, `ENOENT` or `EIO`)
    pub fn errno(&self) -> i32 {
        match self {
            SlimbookError::InvalidArgument(_) => libc::EINVAL,
            SlimbookError::NotFound(_) => libc::ENOENT,
            SlimbookError::IoFailure { .. } => libc::EIO,
        }
    }
}

/// Result type for slimbook operations
pub type Result<T> = std::result::Result<T, SlimbookError>;
