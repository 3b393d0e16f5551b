//! Output formatting for run results
//!
//! This module provides:
//! - Text output for human-readable display
//! - JSON output for machine processing
//! - Diff output for showing the changed dependency rows

mod diff;
mod json;
mod text;

pub use diff::DiffFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::cli::CliArgs;
use crate::orchestrator::OrchestratorResult;
use std::io::Write;

/// Message printed when the PR carries no relevant dependency update
pub const NO_UPDATES_MESSAGE: &str = "There are no dependency updates.";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, colored listing
    Text,
    /// Single JSON document on stdout
    Json,
    /// Changed dependency rows as a unified diff
    Diff,
}

impl OutputFormat {
    /// Format selected by the `--json` / `--diff` flags; JSON takes precedence
    pub fn from_flags(json: bool, diff: bool) -> Self {
        match (json, diff) {
            (true, _) => OutputFormat::Json,
            (false, true) => OutputFormat::Diff,
            (false, false) => OutputFormat::Text,
        }
    }
}

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// One summary line
    Quiet,
    Normal,
    /// Adds skipped updates and POM statistics
    Verbose,
}

impl Verbosity {
    /// Level selected by `--verbose` / `--quiet`; quiet takes precedence
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }
}

/// How a run result is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub verbosity: Verbosity,
    /// Prefix output with `(dry-run)`
    pub dry_run: bool,
    /// Style text output with ANSI colors
    pub color: bool,
}

impl OutputConfig {
    /// Collect the output options of the command line
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            format: OutputFormat::from_flags(args.json, args.diff),
            verbosity: Verbosity::from_flags(args.verbose, args.quiet),
            dry_run: args.dry_run,
            color: !args.no_color,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the orchestrator result
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Format and write just the summary
    fn format_summary(
        &self,
        result: &OrchestratorResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(
            config.verbosity,
            config.dry_run,
            config.color,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new(config.verbosity)),
        OutputFormat::Diff => Box::new(DiffFormatter::new(config.dry_run)),
    }
}
