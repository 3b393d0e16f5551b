//! Update filtering
//!
//! Only dependencies that ship with the artifact belong in the release
//! notes. Updates are de-duplicated first and then classified through a
//! [`ScopeResolver`]:
//! - `test` and `system` scoped dependencies are dropped
//! - dependencies the POM does not declare are dropped as well

use crate::domain::{DependencyUpdate, SkipReason};
use crate::error::AppError;
use crate::manifest::ScopeResolver;
use std::collections::HashSet;

/// An update that was kept out of the release notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUpdate {
    /// The dropped update
    pub update: DependencyUpdate,
    /// Why it was dropped
    pub reason: SkipReason,
}

/// Result of filtering a batch of updates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Updates that belong in the release notes, in input order
    pub kept: Vec<DependencyUpdate>,
    /// Updates that were dropped, in input order
    pub skipped: Vec<SkippedUpdate>,
}

impl FilterOutcome {
    /// Returns true if no update survived the filter
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

/// Collapse identical updates, keeping the first occurrence of each
pub fn deduplicate(updates: Vec<DependencyUpdate>) -> Vec<DependencyUpdate> {
    let mut seen = HashSet::new();
    updates
        .into_iter()
        .filter(|update| seen.insert(update.clone()))
        .collect()
}

/// Scope-based filter for dependency updates
pub struct UpdateFilter<'a> {
    resolver: &'a dyn ScopeResolver,
}

impl<'a> UpdateFilter<'a> {
    /// Create a filter that classifies updates with `resolver`
    pub fn new(resolver: &'a dyn ScopeResolver) -> Self {
        Self { resolver }
    }

    /// Determine why an update must be skipped, if at all
    pub fn skip_reason(&self, update: &DependencyUpdate) -> Result<Option<SkipReason>, AppError> {
        let scope = self
            .resolver
            .resolve(&update.group_id, &update.artifact_id)?;

        Ok(match scope {
            Some(scope) => SkipReason::for_scope(scope),
            None => Some(SkipReason::Undeclared),
        })
    }

    /// De-duplicate `updates` and split them into kept and skipped ones
    pub fn apply(&self, updates: Vec<DependencyUpdate>) -> Result<FilterOutcome, AppError> {
        let mut outcome = FilterOutcome::default();

        for update in deduplicate(updates) {
            match self.skip_reason(&update)? {
                Some(reason) => outcome.skipped.push(SkippedUpdate { update, reason }),
                None => outcome.kept.push(update),
            }
        }

        Ok(outcome)
    }
}
