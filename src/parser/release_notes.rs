//! Release notes dependency table parser
//!
//! Expected format, as written by [`crate::changelog`]:
//!
//! ```text
//! <details><summary>Dependency Updates</summary>
//!
//! | Dependency | From | To |
//! | --- | --- | --- |
//! | [artifact-id](maven-central-search-link) (`group-id`) | `old` | `new` |
//!
//! </details>
//! ```
//!
//! Rows are only ever produced by our own renderer, so any deviation is
//! reported as an error instead of being skipped.

use super::{parse_markdown_link, strip_code_span, TableRow, UpdateTableParser};
use crate::domain::DependencyUpdate;
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\|\s*Dependency\s*\|\s*From\s*\|\s*To\s*\|\s*$").unwrap()
});

// Group id suffix: (`group-id`)
static GROUP_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(`([^`]+)`\)$").unwrap());

/// Parser for the dependency table in the release notes
pub struct ReleaseNotesParser;

impl ReleaseNotesParser {
    /// Extract `(groupId, artifactId)` from `[artifact](url) (`group`)`
    fn extract_coordinate(cell: &str) -> Result<(&str, &str), ParseError> {
        let parts: Vec<&str> = cell.trim().split(' ').collect();
        if parts.len() != 2 {
            return Err(ParseError::malformed_cell(
                cell,
                format!(
                    "expected a link and a group id separated by a single space, found {} parts",
                    parts.len()
                ),
            ));
        }

        let (artifact_id, _) = parse_markdown_link(parts[0])
            .ok_or_else(|| ParseError::malformed_cell(cell, "artifact id is not a markdown link"))?;

        let group_id = GROUP_ID_RE
            .captures(parts[1].trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| ParseError::malformed_cell(cell, "unable to extract the group id"))?;

        Ok((group_id, artifact_id))
    }
}

impl UpdateTableParser for ReleaseNotesParser {
    fn header(&self) -> &Regex {
        &HEADER_RE
    }

    fn parse_row(&self, row: &TableRow<'_>) -> Result<Option<DependencyUpdate>, ParseError> {
        let [dependency, from, to] = row.cells;
        let (group_id, artifact_id) = Self::extract_coordinate(dependency)?;

        Ok(Some(DependencyUpdate::new(
            group_id,
            artifact_id,
            strip_code_span(from),
            strip_code_span(to),
        )))
    }
}
