// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Path resolution utilities.
//!
//! Determine where the generated artifact and the project settings file live
//! relative to a project base directory.

use std::path::{Path, PathBuf};

/// Name of project settings file.
pub const SETTINGS_FILE_NAME: &str = "lombok.toml";

/// Determine absolute path to project base directory.
///
/// Uses the current working directory when no base directory is given.
/// Relative base directories are made absolute against it.
///
/// # Errors
///
/// - Return [`NoBaseDir`] if current working directory cannot be determined.
pub fn basedir(path: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|_| NoBaseDir)?;
    Ok(match path {
        Some(path) => cwd.join(path),
        None => cwd,
    })
}

/// Determine default path to generated lombok.config file.
///
/// Uses `<basedir>/src/lombok.config`. Does not check if the path returned
/// actually exists.
pub fn default_config_file(basedir: impl AsRef<Path>) -> PathBuf {
    basedir.as_ref().join("src").join("lombok.config")
}

/// Determine default path to project settings file.
///
/// Uses `<basedir>/lombok.toml`. Does not check if the path returned actually
/// exists.
pub fn default_settings_file(basedir: impl AsRef<Path>) -> PathBuf {
    basedir.as_ref().join(SETTINGS_FILE_NAME)
}

/// No way to determine project base directory.
#[derive(Clone, Debug, thiserror::Error)]
#[error("cannot determine absolute path to project base directory")]
pub struct NoBaseDir;

/// Friendly result alias :3
pub type Result<T, E = NoBaseDir> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;

    #[test]
    fn default_paths_live_under_basedir() {
        assert_eq!(
            default_config_file("/project"),
            PathBuf::from("/project/src/lombok.config")
        );
        assert_eq!(
            default_settings_file("/project"),
            PathBuf::from("/project/lombok.toml")
        );
    }

    #[sealed_test]
    fn basedir_defaults_to_current_dir() -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        assert_eq!(basedir(None)?, cwd);
        assert_eq!(basedir(Some(Path::new("module")))?, cwd.join("module"));
        assert_eq!(basedir(Some(Path::new("/abs")))?, PathBuf::from("/abs"));
        Ok(())
    }
}
