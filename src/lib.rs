// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Generate and maintain a project's lombok.config file.
//!
//! lombokgen turns a small, typed set of lombok options into a canonical
//! lombok.config file as part of a build. The file is only rewritten when its
//! content actually changes, so downstream build steps are not invalidated
//! for nothing.
//!
//! # Pipeline
//!
//! 1. [`directive`] collects directives from the declared option slots.
//! 2. [`render`] turns directives and extra lines into canonical text.
//! 3. [`artifact`] writes that text only if it differs from what is on disk.
//!
//! Cleaning simply removes the artifact again. See [`lifecycle`] for both
//! entry points.

pub mod artifact;
pub mod config;
pub mod directive;
pub mod lifecycle;
pub mod path;
pub mod render;

pub use artifact::{BuildContext, CleanOutcome, TracingBuildContext, WriteOutcome};
pub use config::{ArtifactPath, OptionTable, ProjectSettings};
pub use directive::{collect_directives, Directive, DirectiveKind, OptionSource, Slot, SLOTS};
pub use lifecycle::{artifact_path, clean, generate, load_settings};
pub use render::{render, HEADER};
