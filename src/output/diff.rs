//! Diff output formatter for showing changes
//!
//! This module provides:
//! - Unified diff style display of the release notes' dependency rows
//! - Before/after rows for every added or replaced dependency

use crate::changelog::render_row;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, NO_UPDATES_MESSAGE};
use std::io::Write;

/// Diff formatter for showing dependency row changes
pub struct DiffFormatter {
    /// Whether this is a dry-run
    dry_run: bool,
}

impl DiffFormatter {
    /// Create a new diff formatter
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> &'static str {
        if self.dry_run {
            "(dry-run) "
        } else {
            ""
        }
    }
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let changed = result.changed();

        if !changed.is_empty() {
            let path = result.release_notes.display();
            writeln!(writer, "{}--- a/{}", self.dry_run_prefix(), path)?;
            writeln!(writer, "{}+++ b/{}", self.dry_run_prefix(), path)?;

            for update in &changed {
                writeln!(writer, "@@ {} @@", update.coordinate())?;
                if let Some(old) = result.replaced(update) {
                    writeln!(writer, "-{}", render_row(old))?;
                }
                writeln!(writer, "+{}", render_row(update))?;
            }

            writeln!(writer)?;
        }

        self.format_summary(result, writer)
    }

    fn format_summary(
        &self,
        result: &OrchestratorResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();

        if !result.has_updates() {
            return writeln!(writer, "{}# {}", prefix, NO_UPDATES_MESSAGE);
        }

        writeln!(
            writer,
            "{}# {} dependency row(s) changed",
            prefix,
            result.changed().len()
        )
    }
}
