use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when the command line has the wrong shape.
pub const USAGE_EXIT_CODE: i32 = 42;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Usage: {program} X.Y.Z")]
    UsageError { program: String },
    #[error("Failed to access file '{}'", path.display())]
    FileAccessError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid version pattern '{pattern}'")]
    InvalidPatternError {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl UpdateError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UpdateError::FileAccessError { path: path.into(), source }
    }
}
