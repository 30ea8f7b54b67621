// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Build lifecycle entry points.
//!
//! lombokgen hooks into a build in two places. The __generate__ step runs
//! early in a build, collecting directives from the project settings,
//! rendering them, and writing the result to the artifact path only if it
//! changed. The __clean__ step removes the artifact again. Both steps are
//! independent of each other and share no state.

use crate::{
    artifact::{self, BuildContext, CleanOutcome, WriteOutcome},
    config::{ConfigError, ProjectSettings},
    directive::collect_directives,
    path::default_config_file,
    render::{render, HEADER},
};

use std::{
    fs::read_to_string,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument, warn};

/// Load project settings file.
///
/// A missing settings file is not an error. Default settings are used
/// instead.
///
/// # Errors
///
/// - Return [`Error::ReadSettings`] if settings file exists but cannot be
///   read.
/// - Return [`Error::Config`] if settings file cannot be parsed.
#[instrument(skip(path), level = "debug")]
pub fn load_settings(path: impl AsRef<Path>) -> Result<ProjectSettings> {
    let path = path.as_ref();
    match read_to_string(path) {
        Ok(data) => Ok(data.parse()?),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("no settings file at {:?}, using defaults", path.display());
            Ok(ProjectSettings::default())
        }
        Err(err) => Err(Error::ReadSettings {
            source: err,
            path: path.to_path_buf(),
        }),
    }
}

/// Determine where the artifact of a project lives.
///
/// Uses the configured artifact path if any, resolved against the base
/// directory. Otherwise falls back to [`default_config_file`].
pub fn artifact_path(settings: &ProjectSettings, basedir: impl AsRef<Path>) -> PathBuf {
    match &settings.config_file {
        Some(config_file) => config_file.resolve(basedir),
        None => default_config_file(basedir),
    }
}

/// Generate artifact from project settings.
///
/// Notifies build context only when the artifact was actually written.
///
/// # Errors
///
/// - Return [`Error::Artifact`] if artifact cannot be read or written.
#[instrument(skip(settings, basedir, context), level = "debug")]
pub fn generate(
    settings: &ProjectSettings,
    basedir: impl AsRef<Path>,
    context: &impl BuildContext,
) -> Result<WriteOutcome> {
    for name in settings.options.unknown_names() {
        warn!("ignoring unknown option {name:?}");
    }

    let directives = collect_directives(&settings.options);
    debug!("directives: {directives:?}");
    debug!("config lines: {:?}", settings.config_lines);

    let content = render(HEADER, &directives, &settings.config_lines);
    let path = artifact_path(settings, basedir);
    let outcome = artifact::write(&path, content)?;
    match outcome {
        WriteOutcome::Written => {
            context.refresh(&path);
            info!("Updated lombok.config successfully at {:?}", path.display());
        }
        WriteOutcome::Skipped => {
            info!("No updates to lombok.config were needed at {:?}", path.display())
        }
    }

    Ok(outcome)
}

/// Remove artifact of project.
///
/// # Errors
///
/// - Return [`Error::Artifact`] if existing artifact cannot be deleted.
#[instrument(skip(settings, basedir), level = "debug")]
pub fn clean(settings: &ProjectSettings, basedir: impl AsRef<Path>) -> Result<CleanOutcome> {
    let path = artifact_path(settings, basedir);
    let outcome = artifact::clean(&path)?;
    match outcome {
        CleanOutcome::Deleted => {
            info!("lombok.config successfully deleted at {:?}", path.display())
        }
        CleanOutcome::NotPresent => info!("No lombok.config to delete at {:?}", path.display()),
    }

    Ok(outcome)
}

/// Lifecycle error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings file exists but cannot be read.
    #[error("failed to read settings file at {:?}", path.display())]
    ReadSettings {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Settings file is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Artifact file management failed.
    #[error(transparent)]
    Artifact(#[from] artifact::Error),
}

/// Friendly result alias :3
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArtifactPath;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;
    use std::{fs::write, sync::Mutex};

    #[derive(Debug, Default)]
    struct RecordingContext {
        refreshed: Mutex<Vec<PathBuf>>,
    }

    impl BuildContext for RecordingContext {
        fn refresh(&self, path: &Path) {
            self.refreshed.lock().unwrap().push(path.to_path_buf());
        }
    }

    fn settings_with_lines(lines: &[&str]) -> ProjectSettings {
        ProjectSettings {
            config_file: Some(ArtifactPath::new("lombok.config")),
            config_lines: lines.iter().map(ToString::to_string).collect(),
            ..Default::default()
        }
    }

    #[sealed_test]
    fn generate_with_only_extra_lines() -> anyhow::Result<()> {
        let settings = settings_with_lines(&["x.custom = 1"]);
        let context = RecordingContext::default();

        let outcome = generate(&settings, ".", &context)?;
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(
            read_to_string("lombok.config")?,
            "config.stopBubbling = true\nx.custom = 1"
        );

        Ok(())
    }

    #[sealed_test]
    fn generate_twice_writes_then_skips() -> anyhow::Result<()> {
        let settings: ProjectSettings = indoc! {r#"
            config_file = "lombok.config"
            config_lines = ["lombok.experimental.flagUsage = WARNING"]

            [options]
            accessors_chain = true
            accessors_prefix = "m_, f_"
        "#}
        .parse()?;
        let context = RecordingContext::default();

        assert_eq!(generate(&settings, ".", &context)?, WriteOutcome::Written);
        let first = read_to_string("lombok.config")?;
        assert_eq!(generate(&settings, ".", &context)?, WriteOutcome::Skipped);
        let second = read_to_string("lombok.config")?;

        let expect = indoc! {r#"
            config.stopBubbling = true
            lombok.accessors.chain = true
            lombok.accessors.prefix += m_
            lombok.accessors.prefix += f_
            lombok.experimental.flagUsage = WARNING"#};
        assert_eq!(first, expect);
        assert_eq!(second, expect);
        assert_eq!(
            *context.refreshed.lock().unwrap(),
            vec![PathBuf::from("./lombok.config")]
        );

        Ok(())
    }

    #[sealed_test]
    fn generate_skips_existing_identical_artifact() -> anyhow::Result<()> {
        write("lombok.config", "config.stopBubbling = true\nx.custom = 1")?;
        let settings = settings_with_lines(&["x.custom = 1"]);
        let context = RecordingContext::default();

        assert_eq!(generate(&settings, ".", &context)?, WriteOutcome::Skipped);
        assert!(context.refreshed.lock().unwrap().is_empty());

        Ok(())
    }

    #[sealed_test]
    fn generate_uses_default_artifact_path() -> anyhow::Result<()> {
        let context = RecordingContext::default();
        generate(&ProjectSettings::default(), "project", &context)?;
        assert_eq!(
            read_to_string("project/src/lombok.config")?,
            "config.stopBubbling = true"
        );

        Ok(())
    }

    #[sealed_test]
    fn clean_removes_generated_artifact() -> anyhow::Result<()> {
        let settings = settings_with_lines(&[]);
        let context = RecordingContext::default();
        generate(&settings, ".", &context)?;

        assert_eq!(clean(&settings, ".")?, CleanOutcome::Deleted);
        assert_eq!(clean(&settings, ".")?, CleanOutcome::NotPresent);
        assert_eq!(context.refreshed.lock().unwrap().len(), 1);

        Ok(())
    }

    #[sealed_test]
    fn load_settings_defaults_when_missing() -> anyhow::Result<()> {
        assert_eq!(load_settings("lombok.toml")?, ProjectSettings::default());
        Ok(())
    }

    #[sealed_test]
    fn load_settings_reports_malformed_file() -> anyhow::Result<()> {
        write("lombok.toml", "config_lines = [")?;
        let result = load_settings("lombok.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::Deserialize(_)))));
        Ok(())
    }
}
