//! Markdown table parsers for dependency updates
//!
//! Both the Dependabot PR description and the release notes carry their
//! updates in a three-column pipe table. This module locates such a table
//! after a header row and splits its rows; the submodules interpret the
//! cells:
//! - PR descriptions (`| Package | From | To |`)
//! - Release notes (`| Dependency | From | To |`)

mod pr_body;
mod release_notes;

pub use pr_body::PrBodyParser;
pub use release_notes::ReleaseNotesParser;

use crate::domain::DependencyUpdate;
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

// Markdown link: [text](target)
static MARKDOWN_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)$").unwrap());

// Maven coordinate: group:artifact, identifier-like segments starting with a letter
static MAVEN_COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z][a-zA-Z0-9._\-]*):([a-zA-Z][a-zA-Z0-9._\-]*)$").unwrap()
});

/// Number of `|`-separated segments in a three-column row,
/// including the empty ones outside the enclosing bars
const ROW_SEGMENTS: usize = 5;

/// A data row of a three-column table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow<'a> {
    /// The trimmed row as it appears in the document
    pub raw: &'a str,
    /// Trimmed cell contents
    pub cells: [&'a str; 3],
}

/// Trait for parsers that read dependency updates out of a markdown table
pub trait UpdateTableParser {
    /// Pattern matching the table's header row
    fn header(&self) -> &Regex;

    /// Interpret a single data row; `None` skips the row
    fn parse_row(&self, row: &TableRow<'_>) -> Result<Option<DependencyUpdate>, ParseError>;

    /// Parse all updates of the first matching table, in table order
    fn parse(&self, document: &str) -> Result<Vec<DependencyUpdate>, ParseError> {
        let mut updates = Vec::new();
        for raw in extract_table_rows(document, self.header()) {
            let row = split_row(raw)?;
            if let Some(update) = self.parse_row(&row)? {
                updates.push(update);
            }
        }
        Ok(updates)
    }
}

/// Return the data rows of the first table whose header matches `header`.
///
/// Collection starts at the header line and stops at the first line that
/// does not both start and end with `|`. The header and separator rows are
/// not part of the result. A document without such a table yields no rows.
pub fn extract_table_rows<'a>(document: &'a str, header: &Regex) -> Vec<&'a str> {
    let lines: Vec<&str> = document.lines().collect();
    let Some(offset) = lines.iter().position(|line| header.is_match(line)) else {
        return Vec::new();
    };

    lines[offset..]
        .iter()
        .map(|line| line.trim())
        .take_while(|line| line.starts_with('|') && line.ends_with('|'))
        .skip(2)
        .collect()
}

/// Split a row into its three trimmed cells
pub fn split_row(row: &str) -> Result<TableRow<'_>, ParseError> {
    let segments: Vec<&str> = row.split('|').collect();
    if segments.len() != ROW_SEGMENTS {
        return Err(ParseError::malformed_row(row, segments.len()));
    }

    Ok(TableRow {
        raw: row,
        cells: [segments[1].trim(), segments[2].trim(), segments[3].trim()],
    })
}

/// Split a markdown link into its text and target
pub fn parse_markdown_link(value: &str) -> Option<(&str, &str)> {
    let caps = MARKDOWN_LINK_RE.captures(value.trim())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Split a `groupId:artifactId` coordinate
pub fn parse_maven_coordinate(value: &str) -> Option<(&str, &str)> {
    let caps = MAVEN_COORDINATE_RE.captures(value.trim())?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Remove a single leading and a single trailing backtick, each if present
pub fn strip_code_span(cell: &str) -> &str {
    let cell = cell.trim();
    let cell = cell.strip_prefix('`').unwrap_or(cell);
    let cell = cell.strip_suffix('`').unwrap_or(cell);
    cell.trim()
}
