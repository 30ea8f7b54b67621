// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Configuration layout.
//!
//! Specify the layout of the project settings file that lombokgen reads to
//! figure out what to generate, and where. File I/O is left to the caller to
//! figure out.
//!
//! # General Layout
//!
//! ```toml
//! config_file = "$PROJECT_ROOT/src/lombok.config"
//! config_lines = ["lombok.experimental.flagUsage = WARNING"]
//!
//! [options]
//! accessors_chain = true
//! accessors_prefix = ["m_", "f_"]
//! ```
//!
//! Every entry is optional. The names allowed in the `[options]` table are
//! the slot names of [`crate::directive::SLOTS`].

use crate::directive::{find_slot, OptionSource, SlotAccessError};

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    str::FromStr,
};
use toml::{Table, Value};

/// Project settings layout.
#[derive(Default, Debug, PartialEq, Clone, Deserialize, Serialize)]
pub struct ProjectSettings {
    /// Path to generated lombok.config file.
    pub config_file: Option<ArtifactPath>,

    /// Additional lines appended verbatim after generated directives.
    #[serde(default)]
    pub config_lines: Vec<String>,

    /// Values of option slots.
    #[serde(default)]
    pub options: OptionTable,
}

impl FromStr for ProjectSettings {
    type Err = ConfigError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut settings: ProjectSettings =
            toml::de::from_str(data).map_err(ConfigError::Deserialize)?;

        // INVARIANT: Perform shell expansion on artifact path field.
        if let Some(config_file) = settings.config_file.take() {
            settings.config_file = Some(ArtifactPath::new(
                shellexpand::full(config_file.to_string().as_str())
                    .map_err(ConfigError::ShellExpansion)?
                    .into_owned(),
            ));
        }

        Ok(settings)
    }
}

impl Display for ProjectSettings {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(ConfigError::Serialize)?
                .as_str(),
        )
    }
}

/// Path to the generated artifact.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct ArtifactPath(PathBuf);

impl ArtifactPath {
    /// Construct new artifact path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Resolve artifact path against a base directory.
    ///
    /// Absolute paths are returned as is.
    pub fn resolve(&self, basedir: impl AsRef<Path>) -> PathBuf {
        if self.0.is_absolute() {
            self.0.clone()
        } else {
            basedir.as_ref().join(&self.0)
        }
    }

    /// Treat artifact path as [`Path`] slice.
    pub fn as_path(&self) -> &Path {
        self.0.as_path()
    }
}

impl Display for ArtifactPath {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.as_path().to_string_lossy().as_ref())
    }
}

/// Option slot values keyed by slot name.
///
/// Values keep whatever TOML type the user wrote. They are converted to text
/// only when a slot is read, so one badly typed value only affects its own
/// slot.
#[derive(Default, Debug, PartialEq, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct OptionTable(Table);

impl OptionTable {
    /// Construct new empty option table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set slot value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), Value::String(value.into()));
    }

    /// Names in table that do not match any declared slot.
    pub fn unknown_names(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|name| find_slot(name).is_none())
    }
}

impl OptionSource for OptionTable {
    fn slot_value(&self, name: &str) -> Result<Option<String>, SlotAccessError> {
        self.0.get(name).map(value_to_text).transpose()
    }
}

fn value_to_text(value: &Value) -> Result<String, SlotAccessError> {
    match value {
        Value::Array(entries) => {
            let mut tokens = Vec::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                tokens.push(scalar_to_text(entry).ok_or(SlotAccessError::UnsupportedEntry {
                    kind: entry.type_str(),
                    index,
                })?);
            }
            Ok(tokens.join(", "))
        }
        scalar => scalar_to_text(scalar).ok_or(SlotAccessError::Unsupported {
            kind: scalar.type_str(),
        }),
    }
}

fn scalar_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Integer(number) => Some(number.to_string()),
        Value::Float(number) => Some(number.to_string()),
        Value::Boolean(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to serialize configuration.
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// Failed to perform shell expansion on configuration.
    #[error(transparent)]
    ShellExpansion(#[from] shellexpand::LookupError<std::env::VarError>),
}

impl From<ConfigError> for FmtError {
    fn from(_: ConfigError) -> Self {
        FmtError
    }
}
