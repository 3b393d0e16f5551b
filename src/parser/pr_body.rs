//! Dependabot PR description parser
//!
//! Expected format:
//!
//! ```text
//! Bumps the production-minor-patch group with 2 updates:
//!
//! | Package | From | To |
//! | --- | --- | --- |
//! | com.example:plain | `1.0` | `2.0` |
//! | [com.example:linked](https://github.com/...) | `1.0` | `2.0` |
//! ```
//!
//! Dependabot groups several ecosystems into one table, so rows whose
//! package is not a Maven coordinate (e.g. GitHub Actions) are skipped.

use super::{
    parse_markdown_link, parse_maven_coordinate, strip_code_span, TableRow, UpdateTableParser,
};
use crate::domain::DependencyUpdate;
use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\|\s*Package\s*\|\s*From\s*\|\s*To\s*\|\s*$").unwrap()
});

/// Parser for the update table of a Dependabot PR description
pub struct PrBodyParser;

impl PrBodyParser {
    /// Extract `(groupId, artifactId)` from a bare or linked coordinate
    fn extract_coordinate(cell: &str) -> Option<(&str, &str)> {
        let name = parse_markdown_link(cell).map_or(cell, |(text, _)| text);
        parse_maven_coordinate(name)
    }
}

impl UpdateTableParser for PrBodyParser {
    fn header(&self) -> &Regex {
        &HEADER_RE
    }

    fn parse_row(&self, row: &TableRow<'_>) -> Result<Option<DependencyUpdate>, ParseError> {
        let [package, from, to] = row.cells;
        let Some((group_id, artifact_id)) = Self::extract_coordinate(package) else {
            return Ok(None);
        };

        Ok(Some(DependencyUpdate::new(
            group_id,
            artifact_id,
            strip_code_span(from),
            strip_code_span(to),
        )))
    }
}
