//! Project file access
//!
//! This module provides functionality to:
//! - Classify dependency scopes from a `pom.xml`
//! - Read and write whole documents with path-aware errors

mod pom;
mod writer;

pub use pom::{PomScopeResolver, ScopeResolver};
pub use writer::{read_document, write_document};
