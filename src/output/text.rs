//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Aligned listing of the new dependency updates with colors
//! - Skipped update display with reasons (verbose)
//! - Summary naming the release notes and where the table was placed

use crate::domain::DependencyUpdate;
use crate::orchestrator::OrchestratorResult;
use crate::output::{OutputFormatter, Verbosity, NO_UPDATES_MESSAGE};
use crate::update::SkippedUpdate;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if self.dry_run {
            if self.color {
                format!("{} ", "(dry-run)".cyan())
            } else {
                "(dry-run) ".to_string()
            }
        } else {
            String::new()
        }
    }

    /// Format one update as `name  old → new (group)`
    fn format_update_line(
        &self,
        update: &DependencyUpdate,
        width: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let name = format!("{:<width$}", update.artifact_id, width = width);

        if self.color {
            writeln!(
                writer,
                "  {}  {} {} {} {}",
                name.bold(),
                update.old_version.dimmed(),
                "→".dimmed(),
                update.new_version.green(),
                format!("({})", update.group_id).dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {}  {} → {} ({})",
                name, update.old_version, update.new_version, update.group_id
            )
        }
    }

    /// Format one skipped update with its reason
    fn format_skip_line(
        &self,
        skipped: &SkippedUpdate,
        width: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let name = format!("{:<width$}", skipped.update.artifact_id, width = width);

        if self.color {
            writeln!(
                writer,
                "  {}  {} {}",
                name.dimmed(),
                format!("({})", skipped.update.group_id).dimmed(),
                format!("[{}]", skipped.reason).yellow()
            )
        } else {
            writeln!(
                writer,
                "  {}  ({}) [{}]",
                name, skipped.update.group_id, skipped.reason
            )
        }
    }

    fn format_skipped(
        &self,
        result: &OrchestratorResult,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let skipped = &result.outcome.skipped;
        if skipped.is_empty() {
            return Ok(());
        }

        if self.color {
            writeln!(writer, "{}:", "Skipped".yellow().bold())?;
        } else {
            writeln!(writer, "Skipped:")?;
        }

        let width = skipped
            .iter()
            .map(|s| s.update.artifact_id.len())
            .max()
            .unwrap_or(0);
        for entry in skipped {
            self.format_skip_line(entry, width, writer)?;
        }
        writeln!(writer)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &OrchestratorResult, writer: &mut dyn Write) -> std::io::Result<()> {
        // In quiet mode, only show summary
        if self.verbosity == Verbosity::Quiet {
            return self.format_summary(result, writer);
        }

        if result.has_updates() {
            let heading = format!("{}:", result.release_notes.display());
            if self.color {
                writeln!(writer, "{}", heading.bold())?;
            } else {
                writeln!(writer, "{}", heading)?;
            }

            let kept = &result.outcome.kept;
            let width = kept.iter().map(|u| u.artifact_id.len()).max().unwrap_or(0);
            for update in kept {
                self.format_update_line(update, width, writer)?;
            }
            writeln!(writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            self.format_skipped(result, writer)?;
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
            return writeln!(writer, "{}{}", prefix, NO_UPDATES_MESSAGE);
        }

        let updates = result.outcome.kept.len();

        if self.verbosity == Verbosity::Quiet {
            // Minimal output
            if self.color {
                return writeln!(writer, "{}{} updated", prefix, updates.to_string().green());
            }
            return writeln!(writer, "{}{} updated", prefix, updates);
        }

        let placement = result
            .placement
            .map(|p| p.to_string())
            .unwrap_or_default();
        let rows = result.merged.len();

        if self.color {
            writeln!(writer, "{}{}:", prefix, "Summary".bold())?;
            writeln!(
                writer,
                "  {} new update(s), {} dependency row(s) in {}",
                updates.to_string().green(),
                rows,
                result.release_notes.display()
            )?;
            writeln!(writer, "  {}", placement.dimmed())?;
        } else {
            writeln!(writer, "{}Summary:", prefix)?;
            writeln!(
                writer,
                "  {} new update(s), {} dependency row(s) in {}",
                updates,
                rows,
                result.release_notes.display()
            )?;
            writeln!(writer, "  {}", placement)?;
        }

        if self.dry_run {
            writeln!(writer, "  release notes not written")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures::{empty_result, updated_result};

    fn render(formatter: &TextFormatter, result: &OrchestratorResult) -> String {
        let mut buffer = Vec::new();
        formatter.format(result, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_dry_run_prefix() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, true, false);
        assert_eq!(formatter.dry_run_prefix(), "(dry-run) ");

        let formatter = TextFormatter::with_color(Verbosity::Normal, false, false);
        assert_eq!(formatter.dry_run_prefix(), "");
    }

    #[test]
    fn test_format_lists_new_updates() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false, false);
        let output = render(&formatter, &updated_result(false));

        assert!(output.contains("release_notes.md:"));
        assert!(output.contains("  core         1.0.0 → 1.1.0 (com.example)"));
        assert!(output.contains("  logging-api  2.0 → 2.1 (org.logging)"));
        assert!(output.contains("2 new update(s), 3 dependency row(s) in release_notes.md"));
        assert!(output.contains("replaced existing dependency block"));
        assert!(!output.contains("Skipped"));
    }

    #[test]
    fn test_format_verbose_shows_skipped() {
        let formatter = TextFormatter::with_color(Verbosity::Verbose, false, false);
        let output = render(&formatter, &updated_result(false));

        assert!(output.contains("Skipped:"));
        assert!(output.contains("testing  (com.example) [test scope]"));
    }

    #[test]
    fn test_format_dry_run() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, true, false);
        let output = render(&formatter, &updated_result(true));

        assert!(output.contains("(dry-run) Summary:"));
        assert!(output.contains("release notes not written"));
    }

    #[test]
    fn test_format_quiet() {
        let formatter = TextFormatter::with_color(Verbosity::Quiet, false, false);
        let output = render(&formatter, &updated_result(false));
        assert_eq!(output, "2 updated\n");
    }

    #[test]
    fn test_format_no_updates() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false, false);
        let output = render(&formatter, &empty_result());
        assert_eq!(output, "There are no dependency updates.\n");
    }

    #[test]
    fn test_format_no_updates_quiet() {
        let formatter = TextFormatter::with_color(Verbosity::Quiet, false, false);
        let output = render(&formatter, &empty_result());
        assert_eq!(output, "There are no dependency updates.\n");
    }
}
