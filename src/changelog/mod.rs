//! Release notes rendering and splicing
//!
//! This module provides:
//! - Rendering of the collapsible "Dependency Updates" table
//! - Splicing the rendered block into an existing release notes document

mod render;
mod updater;

pub use render::{render_block, render_row, render_table, search_url};
pub use updater::{update_release_notes, Placement, UpdatedNotes};

/// First line of the collapsible dependency block
pub const DETAILS_HEAD: &str = "<details><summary>Dependency Updates</summary>";

/// Last line of the collapsible dependency block
pub const DETAILS_TAIL: &str = "</details>";

/// Heading appended when the release notes have no Improvements section
pub const IMPROVEMENTS_HEADING: &str = "### Improvements";
