// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Generated artifact file management.
//!
//! The generated lombok.config file is fully owned by lombokgen. It is
//! created, overwritten as a whole, or deleted. It is never patched.
//!
//! # Idempotent Writes
//!
//! Build tools watch file modification times to decide what needs to be
//! rebuilt. Rewriting the artifact with identical content would needlessly
//! invalidate everything that depends on it. Thus, [`write`] compares freshly
//! rendered content against what is already on disk, and only touches the
//! file when the two differ.
//!
//! # Pitfalls
//!
//! The read-compare-write sequence is not atomic. Two processes targeting the
//! same path race each other, and whichever writes last wins. Invocations on
//! distinct paths share no state.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs::{read, remove_file, write as write_file},
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

/// Result of a conditional write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content differed or the file was missing, so it was written.
    Written,

    /// Content on disk already matched. Nothing was touched.
    Skipped,
}

/// Result of removing the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// Artifact existed and was removed.
    Deleted,

    /// Artifact did not exist.
    NotPresent,
}

impl Display for WriteOutcome {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Written => fmt.write_str("written"),
            Self::Skipped => fmt.write_str("skipped"),
        }
    }
}

impl Display for CleanOutcome {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Deleted => fmt.write_str("deleted"),
            Self::NotPresent => fmt.write_str("not present"),
        }
    }
}

/// Notify an external incremental build system about refreshed files.
///
/// Only called after [`WriteOutcome::Written`]. Never called for skipped
/// writes, or for cleaning.
pub trait BuildContext: Send + Sync {
    /// Mark file at path as refreshed.
    fn refresh(&self, path: &Path);
}

/// Build context that only records refreshes in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBuildContext;

impl BuildContext for TracingBuildContext {
    fn refresh(&self, path: &Path) {
        debug!("refreshed {:?}", path.display());
    }
}

/// Write content to path unless it already holds the exact same content.
///
/// Missing parent directories are created before writing.
///
/// # Errors
///
/// - Return [`Error::ReadArtifact`] if existing file cannot be read.
/// - Return [`Error::CreateParentDir`] if missing parent directory cannot be
///   created.
/// - Return [`Error::WriteArtifact`] if file cannot be written.
#[instrument(skip(path, content), level = "debug")]
pub fn write(path: impl AsRef<Path>, content: impl AsRef<str>) -> Result<WriteOutcome> {
    let path = path.as_ref();
    let content = content.as_ref();

    if !should_write(path, content)? {
        debug!("{:?} is up to date", path.display());
        return Ok(WriteOutcome::Skipped);
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        mkdirp::mkdirp(parent).map_err(|err| Error::CreateParentDir {
            source: err,
            path: parent.to_path_buf(),
        })?;
    }

    write_file(path, content.as_bytes()).map_err(|err| Error::WriteArtifact {
        source: err,
        path: path.to_path_buf(),
    })?;

    Ok(WriteOutcome::Written)
}

// INVARIANT: Content that is not valid UTF-8 never equals rendered content.
fn should_write(path: &Path, content: &str) -> Result<bool> {
    match read(path) {
        Ok(existing) => Ok(existing != content.as_bytes()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(true),
        Err(err) => Err(Error::ReadArtifact {
            source: err,
            path: path.to_path_buf(),
        }),
    }
}

/// Remove file at path if it exists.
///
/// # Errors
///
/// - Return [`Error::DeleteArtifact`] if existing file cannot be removed.
#[instrument(skip(path), level = "debug")]
pub fn clean(path: impl AsRef<Path>) -> Result<CleanOutcome> {
    let path = path.as_ref();
    match remove_file(path) {
        Ok(()) => Ok(CleanOutcome::Deleted),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(CleanOutcome::NotPresent),
        Err(err) => Err(Error::DeleteArtifact {
            source: err,
            path: path.to_path_buf(),
        }),
    }
}

/// Artifact file management error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Existing artifact cannot be read for comparison.
    #[error("failed to read existing artifact at {:?}", path.display())]
    ReadArtifact {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Parent directory of artifact cannot be created.
    #[error("failed to create parent directory {:?}", path.display())]
    CreateParentDir {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Artifact cannot be written to.
    #[error("failed to write artifact at {:?}", path.display())]
    WriteArtifact {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Artifact exists but cannot be deleted.
    #[error("failed to delete artifact at {:?}", path.display())]
    DeleteArtifact {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Friendly result alias :3
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;
    use std::fs::{create_dir, metadata, read_to_string};

    #[sealed_test]
    fn write_creates_missing_file() -> anyhow::Result<()> {
        let outcome = write("lombok.config", "config.stopBubbling = true")?;
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(read_to_string("lombok.config")?, "config.stopBubbling = true");
        Ok(())
    }

    #[sealed_test]
    fn write_creates_missing_parent_dirs() -> anyhow::Result<()> {
        let outcome = write("src/main/lombok.config", "config.stopBubbling = true")?;
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(
            read_to_string("src/main/lombok.config")?,
            "config.stopBubbling = true"
        );
        Ok(())
    }

    #[sealed_test]
    fn write_skips_identical_content() -> anyhow::Result<()> {
        write_file("lombok.config", "config.stopBubbling = true\nfoo = 1")?;
        let before = metadata("lombok.config")?.modified()?;

        let outcome = write("lombok.config", "config.stopBubbling = true\nfoo = 1")?;
        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(metadata("lombok.config")?.modified()?, before);
        Ok(())
    }

    #[sealed_test]
    fn write_overwrites_different_content() -> anyhow::Result<()> {
        write_file("lombok.config", "config.stopBubbling = true\nfoo = 1\nbar = 2")?;

        let outcome = write("lombok.config", "config.stopBubbling = true\nfoo = 2")?;
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(
            read_to_string("lombok.config")?,
            "config.stopBubbling = true\nfoo = 2"
        );
        Ok(())
    }

    #[sealed_test]
    fn write_overwrites_invalid_utf8_content() -> anyhow::Result<()> {
        write_file("lombok.config", [0xff_u8, 0xfe, 0xfd])?;
        let outcome = write("lombok.config", "config.stopBubbling = true")?;
        assert_eq!(outcome, WriteOutcome::Written);
        Ok(())
    }

    #[sealed_test]
    fn write_fails_to_read_directory() -> anyhow::Result<()> {
        create_dir("lombok.config")?;
        let result = write("lombok.config", "config.stopBubbling = true");
        assert!(matches!(result, Err(Error::ReadArtifact { .. })));
        Ok(())
    }

    // INVARIANT: Reading a dangling link is NotFound, but creating its target
    // fails because the target's directory is missing.
    #[cfg(unix)]
    #[sealed_test]
    fn write_fails_through_dangling_symlink() -> anyhow::Result<()> {
        std::os::unix::fs::symlink("missing/lombok.config", "lombok.config")?;
        let result = write("lombok.config", "config.stopBubbling = true");
        assert!(matches!(result, Err(Error::WriteArtifact { .. })));
        assert!(!Path::new("missing").exists());
        Ok(())
    }

    #[sealed_test]
    fn clean_deletes_then_reports_not_present() -> anyhow::Result<()> {
        write_file("lombok.config", "config.stopBubbling = true")?;

        assert_eq!(clean("lombok.config")?, CleanOutcome::Deleted);
        assert!(!Path::new("lombok.config").exists());
        assert_eq!(clean("lombok.config")?, CleanOutcome::NotPresent);
        Ok(())
    }

    #[sealed_test]
    fn clean_fails_on_directory() -> anyhow::Result<()> {
        create_dir("lombok.config")?;
        let result = clean("lombok.config");
        assert!(matches!(result, Err(Error::DeleteArtifact { .. })));
        Ok(())
    }
}
