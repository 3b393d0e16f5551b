//! Reasons for keeping an update out of the release notes

use super::DependencyScope;
use serde::Serialize;
use std::fmt;

/// Reason why a dependency update was dropped by the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Resolved scope is `test`
    TestScope,
    /// Resolved scope is `system`
    SystemScope,
    /// No declaration of the dependency in the POM
    Undeclared,
}

impl SkipReason {
    /// Returns the skip reason for a resolved scope, if the scope is excluded
    pub fn for_scope(scope: DependencyScope) -> Option<Self> {
        match scope {
            DependencyScope::Test => Some(SkipReason::TestScope),
            DependencyScope::System => Some(SkipReason::SystemScope),
            _ => None,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TestScope => write!(f, "test scope"),
            SkipReason::SystemScope => write!(f, "system scope"),
            SkipReason::Undeclared => write!(f, "not declared in POM"),
        }
    }
}
