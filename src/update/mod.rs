//! Reconciliation of new and recorded dependency updates
//!
//! This module provides:
//! - De-duplication and scope filtering of updates taken from a PR
//! - Merging of new updates over the ones already in the release notes

mod filter;
mod merge;

pub use filter::{deduplicate, FilterOutcome, SkippedUpdate, UpdateFilter};
pub use merge::merge_updates;
