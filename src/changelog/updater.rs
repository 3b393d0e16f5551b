//! Splicing the dependency block into the release notes
//!
//! Placement rules, in priority order:
//! 1. An existing details block is replaced in place
//! 2. Otherwise the block is added at the end of the Improvements section
//! 3. Otherwise a new Improvements section is appended to the document
//!
//! The run of newlines that ends the document is carried over unchanged.

use super::render::render_block;
use super::{DETAILS_HEAD, DETAILS_TAIL, IMPROVEMENTS_HEADING};
use crate::domain::DependencyUpdate;
use crate::error::StructureError;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

static IMPROVEMENTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#+\s+.*Improvements$").unwrap());

/// Where the dependency block ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// An existing details block was replaced
    ReplacedDetails,
    /// The block was added to an existing Improvements section
    InsertedIntoSection,
    /// A new Improvements section was appended
    AppendedSection,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::ReplacedDetails => write!(f, "replaced existing dependency block"),
            Placement::InsertedIntoSection => write!(f, "added to Improvements section"),
            Placement::AppendedSection => write!(f, "appended new Improvements section"),
        }
    }
}

/// Release notes after splicing in the dependency block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedNotes {
    /// Full document text
    pub content: String,
    /// How the block was placed
    pub placement: Placement,
}

/// Render `updates` and splice them into `document`
pub fn update_release_notes(
    document: &str,
    updates: &[DependencyUpdate],
) -> Result<UpdatedNotes, StructureError> {
    let body = document.trim_end_matches(['\r', '\n']);
    let trailing = &document[body.len()..];
    let lines: Vec<&str> = body.lines().collect();
    let block = render_block(updates);
    let block: Vec<&str> = block.iter().map(String::as_str).collect();

    let (new_lines, placement) = if let Some(range) = find_details_block(&lines)? {
        let mut out = Vec::with_capacity(lines.len() + block.len());
        out.extend_from_slice(&lines[..range.start]);
        out.extend_from_slice(&block);
        out.extend_from_slice(&lines[range.end..]);
        (out, Placement::ReplacedDetails)
    } else if let Some(end) = find_improvements_end(&lines) {
        let mut out = Vec::with_capacity(lines.len() + block.len() + 2);
        out.extend_from_slice(&lines[..end]);
        out.push("");
        out.extend_from_slice(&block);
        out.push("");
        out.extend_from_slice(&lines[end..]);
        (out, Placement::InsertedIntoSection)
    } else {
        let mut out = Vec::with_capacity(lines.len() + block.len() + 4);
        out.extend_from_slice(&lines);
        out.extend_from_slice(&["", IMPROVEMENTS_HEADING, ""]);
        out.extend_from_slice(&block);
        out.push("");
        (out, Placement::AppendedSection)
    };

    let mut content = new_lines.join("\n");
    if !trailing.is_empty() {
        content.truncate(content.trim_end_matches('\n').len());
        content.push_str(trailing);
    }

    Ok(UpdatedNotes { content, placement })
}

/// Line range of the details block, tail inclusive
fn find_details_block(lines: &[&str]) -> Result<Option<Range<usize>>, StructureError> {
    let Some(start) = lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case(DETAILS_HEAD))
    else {
        return Ok(None);
    };

    lines[start + 1..]
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case(DETAILS_TAIL))
        .map(|offset| Some(start..start + offset + 2))
        .ok_or_else(|| StructureError::unterminated(DETAILS_TAIL, "the release notes"))
}

/// Index of the first line after the Improvements section
fn find_improvements_end(lines: &[&str]) -> Option<usize> {
    let start = lines
        .iter()
        .position(|line| IMPROVEMENTS_RE.is_match(line.trim()))?;

    let end = lines[start + 1..]
        .iter()
        .position(|line| line.trim().starts_with('#'))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_update() -> DependencyUpdate {
        DependencyUpdate::new("new.group.id", "new-artifact-id", "new-from", "new-to")
    }

    const NEW_ROW: &str = "| [new-artifact-id](https://search.maven.org/search?q=g%3Anew.group.id%2Ba%3Anew-artifact-id) (`new.group.id`) | `new-from` | `new-to` |";

    #[test]
    fn test_replace_existing_details_block() {
        let data = "
### 📈 Improvements

- First Improvement
- Second Improvement

<details><summary>Dependency Updates</summary>

| Dependency | From | To |
| --- | --- | --- |
| [artifact-id](https://foo.bar) (`group.id`) | `from` | `to` |

</details>";

        let result = update_release_notes(data, &[new_update()]).unwrap();
        let expected = format!(
            "
### 📈 Improvements

- First Improvement
- Second Improvement

<details><summary>Dependency Updates</summary>

| Dependency | From | To |
| --- | --- | --- |
{}

</details>",
            NEW_ROW
        );

        assert_eq!(result.placement, Placement::ReplacedDetails);
        assert_eq!(result.content, expected);
    }

    #[test]
    fn test_replace_keeps_surrounding_content() {
        let data = "# Release\n\n<DETAILS><SUMMARY>Dependency Updates</SUMMARY>\nold stuff\n  </details>  \n\n### Fixed Issues\n\n- Bug\n";

        let result = update_release_notes(data, &[new_update()]).unwrap();
        assert_eq!(result.placement, Placement::ReplacedDetails);
        assert!(result.content.starts_with("# Release\n\n<details>"));
        assert!(result.content.ends_with("</details>\n\n### Fixed Issues\n\n- Bug\n"));
        assert!(!result.content.contains("old stuff"));
    }

    #[test]
    fn test_insert_into_improvements_section() {
        let data = "
### 📈 Improvements

- First Improvement
- Second Improvement
";

        let result = update_release_notes(data, &[new_update()]).unwrap();
        let expected = format!(
            "
### 📈 Improvements

- First Improvement
- Second Improvement

<details><summary>Dependency Updates</summary>

| Dependency | From | To |
| --- | --- | --- |
{}

</details>
",
            NEW_ROW
        );

        assert_eq!(result.placement, Placement::InsertedIntoSection);
        assert_eq!(result.content, expected);
    }

    #[test]
    fn test_insert_before_next_heading() {
        let data = "## Improvements\n\n- One\n\n## Fixed Issues\n\n- Two";

        let result = update_release_notes(data, &[new_update()]).unwrap();
        let lines: Vec<&str> = result.content.lines().collect();

        let tail = lines.iter().position(|l| *l == DETAILS_TAIL).unwrap();
        let next_heading = lines.iter().position(|l| *l == "## Fixed Issues").unwrap();
        assert_eq!(lines[2], "- One");
        assert!(tail < next_heading);
        assert!(result.content.ends_with("## Fixed Issues\n\n- Two"));
    }

    #[test]
    fn test_append_improvements_section() {
        let data = "
### ✨ New Functionality

- New Feature";

        let result = update_release_notes(data, &[new_update()]).unwrap();
        let expected = format!(
            "
### ✨ New Functionality

- New Feature

### Improvements

<details><summary>Dependency Updates</summary>

| Dependency | From | To |
| --- | --- | --- |
{}

</details>
",
            NEW_ROW
        );

        assert_eq!(result.placement, Placement::AppendedSection);
        assert_eq!(result.content, expected);
    }

    #[test]
    fn test_appended_section_is_found_on_next_run() {
        let first = update_release_notes("# Notes", &[new_update()]).unwrap();
        assert_eq!(first.placement, Placement::AppendedSection);

        let second = update_release_notes(&first.content, &[new_update()]).unwrap();
        assert_eq!(second.placement, Placement::ReplacedDetails);
        assert_eq!(second.content, first.content);
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        let data = "<details><summary>Dependency Updates</summary>\n</details>\n";
        let result = update_release_notes(data, &[new_update()]).unwrap();
        assert!(result.content.ends_with("</details>\n"));
    }

    #[test]
    fn test_trailing_blank_lines_are_kept() {
        let data = "# Notes\n\n<details><summary>Dependency Updates</summary>\n</details>\n\n\n";
        let result = update_release_notes(data, &[new_update()]).unwrap();
        assert!(result.content.starts_with("# Notes\n\n<details>"));
        assert!(result.content.ends_with("</details>\n\n\n"));
    }

    #[test]
    fn test_trailing_blank_lines_after_improvements_section() {
        let data = "### Improvements\n\n- One\n\n\n";
        let result = update_release_notes(data, &[new_update()]).unwrap();
        assert_eq!(result.placement, Placement::InsertedIntoSection);
        assert!(result.content.starts_with("### Improvements\n\n- One\n\n<details>"));
        assert!(result.content.ends_with("</details>\n\n\n"));
    }

    #[test]
    fn test_crlf_trailing_newline_is_kept() {
        let data = "### Improvements\r\n\r\n- One\r\n";
        let result = update_release_notes(data, &[new_update()]).unwrap();
        assert!(result.content.ends_with("</details>\r\n"));
    }

    #[test]
    fn test_missing_details_tail() {
        let data = "### Improvements\n\n<details><summary>Dependency Updates</summary>\n\n| a |";
        let err = update_release_notes(data, &[new_update()]).unwrap_err();
        assert!(format!("{}", err).contains("</details>"));
    }

    #[test]
    fn test_empty_document() {
        let result = update_release_notes("", &[new_update()]).unwrap();
        assert_eq!(result.placement, Placement::AppendedSection);
        assert!(result.content.starts_with("\n### Improvements\n\n<details>"));
    }
}
