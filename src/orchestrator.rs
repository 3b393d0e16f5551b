//! Orchestrator for the release notes update workflow
//!
//! This module provides:
//! - Workflow coordination: read → parse → dedupe → filter → merge → render → write
//! - Dry-run mode support
//! - A result record consumed by the output formatters

use crate::changelog::{update_release_notes, Placement};
use crate::cli::CliArgs;
use crate::domain::DependencyUpdate;
use crate::error::AppError;
use crate::manifest::{read_document, write_document, PomScopeResolver};
use crate::parser::{PrBodyParser, ReleaseNotesParser, UpdateTableParser};
use crate::update::{merge_updates, FilterOutcome, UpdateFilter};
use std::path::PathBuf;

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
}

/// Result of running the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorResult {
    /// Path of the release notes
    pub release_notes: PathBuf,
    /// Whether this was a dry-run
    pub dry_run: bool,
    /// Updates found in the PR description, before de-duplication
    pub parsed: Vec<DependencyUpdate>,
    /// Number of `<dependency>` declarations in the POM's dependencies section
    pub declared: usize,
    /// Number of `<dependency>` declarations in the POM's dependencyManagement section
    pub managed: usize,
    /// Updates kept for and skipped from the release notes
    pub outcome: FilterOutcome,
    /// Updates recorded in the release notes before this run
    pub previous: Vec<DependencyUpdate>,
    /// Updates that make up the new dependency table
    pub merged: Vec<DependencyUpdate>,
    /// Where the dependency block was placed, `None` if nothing changed
    pub placement: Option<Placement>,
    /// Whether the release notes file was written
    pub written: bool,
}

impl OrchestratorResult {
    /// Returns true if the PR carried at least one relevant update
    pub fn has_updates(&self) -> bool {
        !self.outcome.kept.is_empty()
    }

    /// Updates that were added or changed by this run, in table order
    pub fn changed(&self) -> Vec<&DependencyUpdate> {
        self.merged
            .iter()
            .filter(|update| !self.previous.contains(update))
            .collect()
    }

    /// The recorded update a new update replaces, if any
    pub fn replaced(&self, update: &DependencyUpdate) -> Option<&DependencyUpdate> {
        self.previous
            .iter()
            .find(|old| old.group_id == update.group_id && old.artifact_id == update.artifact_id)
    }
}

impl Orchestrator {
    /// Create a new orchestrator with the given CLI arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the update workflow
    ///
    /// All three input files are read before anything is parsed. The release
    /// notes are rewritten in a single write at the end, never in dry-run
    /// mode and never when the PR carries no relevant update.
    pub fn run(&self) -> Result<OrchestratorResult, AppError> {
        let pr_body = read_document(&self.args.pr_body)?;
        let pom = read_document(&self.args.pom)?;
        let notes = read_document(&self.args.release_notes)?;

        let resolver = PomScopeResolver::parse(&pom)?;
        let parsed = PrBodyParser.parse(&pr_body)?;
        let outcome = UpdateFilter::new(&resolver).apply(parsed.clone())?;

        let mut result = OrchestratorResult {
            release_notes: self.args.release_notes.clone(),
            dry_run: self.args.dry_run,
            parsed,
            declared: resolver.dependency_count(),
            managed: resolver.managed_count(),
            outcome,
            previous: Vec::new(),
            merged: Vec::new(),
            placement: None,
            written: false,
        };

        if !result.has_updates() {
            return Ok(result);
        }

        result.previous = ReleaseNotesParser.parse(&notes)?;
        result.merged = merge_updates(result.previous.clone(), result.outcome.kept.clone())?;

        let updated = update_release_notes(&notes, &result.merged)?;
        if !self.args.dry_run {
            write_document(&self.args.release_notes, &updated.content)?;
            result.written = true;
        }

        result.placement = Some(updated.placement);
        Ok(result)
    }
}
