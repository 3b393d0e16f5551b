//! depnotes - release-notes maintenance for Dependabot dependency bumps
//!
//! This library provides the pipeline that keeps the "Dependency Updates"
//! block of a Maven project's release notes in sync with Dependabot PRs:
//! - Parsing the `| Package | From | To |` table of a PR description
//! - Classifying each dependency's scope from the project's `pom.xml`
//! - Merging new bumps over the ones already recorded in the release notes
//! - Rendering and splicing the details block back into the document

pub mod changelog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod update;
