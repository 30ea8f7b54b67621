// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use lombokgen::{
    config::{ArtifactPath, ProjectSettings},
    lifecycle::{clean, generate, load_settings},
    path::{basedir, default_settings_file},
    TracingBuildContext,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{
    path::{Path, PathBuf},
    process::exit,
};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "lombokgen [options] <command>",
    subcommand_help_heading = "Commands",
    version
)]
struct Cli {
    /// Project base directory, defaults to current directory.
    #[arg(short = 'C', long, global = true, value_name = "path")]
    pub basedir: Option<PathBuf>,

    /// Path to project settings file, defaults to "<basedir>/lombok.toml".
    #[arg(short, long, global = true, value_name = "path")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    fn run(self) -> Result<()> {
        let basedir = basedir(self.basedir.as_deref())?;
        let settings_path = match self.settings {
            Some(path) => path,
            None => default_settings_file(&basedir),
        };
        let settings = load_settings(&settings_path)
            .with_context(|| format!("could not load settings {:?}", settings_path.display()))?;

        match self.command {
            Command::Generate(opts) => run_generate(opts, settings, &basedir),
            Command::Clean(opts) => run_clean(opts, settings, &basedir),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Generate lombok.config, writing it only if its content changed.
    #[command(override_usage = "lombokgen generate [options]")]
    Generate(GenerateOptions),

    /// Delete generated lombok.config.
    #[command(override_usage = "lombokgen clean [options]")]
    Clean(CleanOptions),
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct GenerateOptions {
    /// Path to lombok.config relative to base directory.
    #[arg(short = 'f', long, value_name = "path")]
    pub config_file: Option<PathBuf>,

    /// Additional line to append to lombok.config.
    #[arg(short, long = "line", value_name = "text")]
    pub lines: Vec<String>,

    /// Set option slot value, overriding settings file.
    #[arg(short = 'D', long = "set", value_name = "name=value", value_parser = parse_assignment)]
    pub assignments: Vec<(String, String)>,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct CleanOptions {
    /// Path to lombok.config relative to base directory.
    #[arg(short = 'f', long, value_name = "path")]
    pub config_file: Option<PathBuf>,
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}

fn run_generate(opts: GenerateOptions, mut settings: ProjectSettings, basedir: &Path) -> Result<()> {
    if let Some(path) = opts.config_file {
        settings.config_file = Some(ArtifactPath::new(path));
    }
    settings.config_lines.extend(opts.lines);
    for (name, value) in opts.assignments {
        settings.options.set(name, value);
    }
    debug!("effective settings:\n{settings}");

    generate(&settings, basedir, &TracingBuildContext).context("could not generate lombok.config")?;

    Ok(())
}

fn run_clean(opts: CleanOptions, mut settings: ProjectSettings, basedir: &Path) -> Result<()> {
    if let Some(path) = opts.config_file {
        settings.config_file = Some(ArtifactPath::new(path));
    }

    clean(&settings, basedir).context("could not delete lombok.config")?;

    Ok(())
}

fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected <name>=<value>, found {arg:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing option name in {arg:?}"));
    }

    Ok((name.to_string(), value.to_string()))
}
