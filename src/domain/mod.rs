//! Core domain models for depnotes
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency update records taken from PRs and release notes
//! - Maven dependency scopes
//! - Reasons for dropping an update from the release notes

mod scope;
mod skip;
mod update;

pub use scope::DependencyScope;
pub use skip::SkipReason;
pub use update::DependencyUpdate;
