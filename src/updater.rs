use crate::error::UpdateError;
use crate::targets::{FileTarget, MARKER_GROUP};
use log::{debug, info, warn};
use regex::Regex;
use semver::Version;
use std::path::PathBuf;

/// Outcome of rewriting a single target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub path: PathBuf,
    /// 0 when the pattern found nothing, 1 otherwise.
    pub replaced: usize,
}

/// Replaces the first match of `pattern` in `text` with `version`.
///
/// Only the `marker` group is swapped out when the pattern defines one. The
/// version is inserted literally, so `$` in it is not treated as a group
/// reference.
pub fn replace_first(pattern: &Regex, text: &str, version: &str) -> (String, usize) {
    let Some(captures) = pattern.captures(text) else {
        return (text.to_string(), 0);
    };
    let span = captures.name(MARKER_GROUP).unwrap_or_else(|| captures.get_match());

    let mut new_text = String::with_capacity(text.len() - span.len() + version.len());
    new_text.push_str(&text[..span.start()]);
    new_text.push_str(version);
    new_text.push_str(&text[span.end()..]);
    (new_text, 1)
}

pub struct VersionUpdater {
    targets: Vec<FileTarget>,
}

impl VersionUpdater {
    pub fn new(targets: Vec<FileTarget>) -> Self {
        VersionUpdater { targets }
    }

    pub fn targets(&self) -> &[FileTarget] {
        &self.targets
    }

    /// Rewrites every target in order.
    ///
    /// Stops at the first file that cannot be read or written; targets
    /// already processed keep their new contents.
    pub fn update_all(&self, version: &str) -> Result<Vec<Substitution>, UpdateError> {
        if Version::parse(version).is_err() {
            warn!("'{}' is not a semantic version, writing it anyway", version);
        }
        info!("Updating version to {}", version);

        self.targets
            .iter()
            .map(|target| Self::update_file(target, version))
            .collect()
    }

    pub fn update_file(target: &FileTarget, version: &str) -> Result<Substitution, UpdateError> {
        let path = target.path();
        debug!("Reading file: '{}'", path.display());
        let contents =
            std::fs::read_to_string(path).map_err(|e| UpdateError::file_access(path, e))?;

        let (new_contents, replaced) = replace_first(target.pattern(), &contents, version);
        if replaced == 0 {
            debug!("No version marker found in '{}'", path.display());
        } else {
            info!("Updated '{}'", path.display());
        }

        std::fs::write(path, new_contents).map_err(|e| UpdateError::file_access(path, e))?;
        Ok(Substitution { path: path.to_path_buf(), replaced })
    }
}
