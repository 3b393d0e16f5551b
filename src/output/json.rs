//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of a run result
//! - New, skipped and merged updates as separate arrays

use crate::changelog::Placement;
use crate::domain::{DependencyUpdate, SkipReason};
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Whether the release notes were written
    written: bool,
    /// Path of the release notes
    release_notes: String,
    /// Where the dependency block was placed
    placement: Option<Placement>,
    /// Updates taken from the PR
    updates: &'a [DependencyUpdate],
    /// Updates dropped by the scope filter
    skipped: Vec<JsonSkip<'a>>,
    /// Full content of the new dependency table
    merged: &'a [DependencyUpdate],
    /// POM statistics, verbose only
    #[serde(skip_serializing_if = "Option::is_none")]
    pom: Option<JsonPom>,
}

/// JSON representation of a skipped update
#[derive(Serialize)]
struct JsonSkip<'a> {
    #[serde(flatten)]
    update: &'a DependencyUpdate,
    reason: SkipReason,
}

#[derive(Serialize)]
struct JsonPom {
    dependencies: usize,
    managed: usize,
}

/// JSON representation of the summary
#[derive(Serialize)]
struct JsonSummary {
    updates: usize,
    skipped: usize,
    merged: usize,
    written: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let pom = (self.verbosity == Verbosity::Verbose).then(|| JsonPom {
            dependencies: result.declared,
            managed: result.managed,
        });

        let output = JsonOutput {
            dry_run: result.dry_run,
            written: result.written,
            release_notes: result.release_notes.display().to_string(),
            placement: result.placement,
            updates: &result.outcome.kept,
            skipped: result
                .outcome
                .skipped
                .iter()
                .map(|s| JsonSkip {
                    update: &s.update,
                    reason: s.reason,
                })
                .collect(),
            merged: &result.merged,
            pom,
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }

    fn format_summary(
        &self,
        result: &OrchestratorResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonSummary {
            updates: result.outcome.kept.len(),
            skipped: result.outcome.skipped.len(),
            merged: result.merged.len(),
            written: result.written,
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
