use crate::error::UpdateError;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Name of the capture group that narrows a match down to the version itself.
pub const MARKER_GROUP: &str = "marker";

pub const CSPROJ_PATH: &str = "./AntlrTreeRewriter/AntlrTreeRewriter/AntlrTreeRewriter.csproj";
pub const CSPROJ_PATTERN: &str = r"<Version>(?P<marker>.*?)</Version>";
pub const README_PATH: &str = "./README.md";
pub const README_PATTERN: &str = r#"Version="(?P<marker>.*?)""#;

/// A file holding a version marker and the pattern that locates it.
///
/// When the pattern has a `marker` group only that group is replaced,
/// otherwise the whole match is.
#[derive(Debug, Clone)]
pub struct FileTarget {
    path: PathBuf,
    pattern: Regex,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>, pattern: &str) -> Result<Self, UpdateError> {
        let pattern = Regex::new(pattern).map_err(|source| UpdateError::InvalidPatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(FileTarget { path: path.into(), pattern })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

/// The files bumped when no other target list is supplied, in update order.
pub fn default_targets() -> Result<Vec<FileTarget>, UpdateError> {
    Ok(vec![
        FileTarget::new(CSPROJ_PATH, CSPROJ_PATTERN)?,
        FileTarget::new(README_PATH, README_PATTERN)?,
    ])
}
