//! Markdown rendering of dependency updates
//!
//! The row layout must stay in sync with
//! [`ReleaseNotesParser`](crate::parser::ReleaseNotesParser),
//! which reads these rows back on the next run.

use super::{DETAILS_HEAD, DETAILS_TAIL};
use crate::domain::DependencyUpdate;
use url::form_urlencoded;

const SEARCH_ENDPOINT: &str = "https://search.maven.org/search?q=";
const TABLE_HEAD: &str = "| Dependency | From | To |";
const TABLE_SEPARATOR: &str = "| --- | --- | --- |";

/// Maven Central search link for a dependency
///
/// The query `g:<groupId>+a:<artifactId>` is form-encoded as a whole.
pub fn search_url(group_id: &str, artifact_id: &str) -> String {
    let query = format!("g:{}+a:{}", group_id, artifact_id);
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}{}", SEARCH_ENDPOINT, encoded)
}

/// Render a single table row
pub fn render_row(update: &DependencyUpdate) -> String {
    format!(
        "| [{}]({}) (`{}`) | `{}` | `{}` |",
        update.artifact_id,
        search_url(&update.group_id, &update.artifact_id),
        update.group_id,
        update.old_version,
        update.new_version
    )
}

/// Render the table header, separator and one row per update
pub fn render_table(updates: &[DependencyUpdate]) -> Vec<String> {
    let mut lines = Vec::with_capacity(updates.len() + 2);
    lines.push(TABLE_HEAD.to_string());
    lines.push(TABLE_SEPARATOR.to_string());
    lines.extend(updates.iter().map(render_row));
    lines
}

/// Render the full `<details>` block wrapping the table
pub fn render_block(updates: &[DependencyUpdate]) -> Vec<String> {
    let mut lines = vec![DETAILS_HEAD.to_string(), String::new()];
    lines.extend(render_table(updates));
    lines.push(String::new());
    lines.push(DETAILS_TAIL.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ReleaseNotesParser;
    use crate::parser::UpdateTableParser;

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url("new.group.id", "new-artifact-id"),
            "https://search.maven.org/search?q=g%3Anew.group.id%2Ba%3Anew-artifact-id"
        );
    }

    #[test]
    fn test_search_url_encodes_special_characters() {
        let url = search_url("odd group", "a&b");
        assert!(url.ends_with("g%3Aodd+group%2Ba%3Aa%26b"));
    }

    #[test]
    fn test_render_row() {
        let update = DependencyUpdate::new("new.group.id", "new-artifact-id", "new-from", "new-to");
        assert_eq!(
            render_row(&update),
            "| [new-artifact-id](https://search.maven.org/search?q=g%3Anew.group.id%2Ba%3Anew-artifact-id) (`new.group.id`) | `new-from` | `new-to` |"
        );
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(
            render_table(&[]),
            vec!["| Dependency | From | To |", "| --- | --- | --- |"]
        );
    }

    #[test]
    fn test_render_block_layout() {
        let block = render_block(&[DependencyUpdate::new("g", "a", "1", "2")]);
        assert_eq!(block.len(), 7);
        assert_eq!(block[0], DETAILS_HEAD);
        assert_eq!(block[1], "");
        assert_eq!(block[2], "| Dependency | From | To |");
        assert_eq!(block[5], "");
        assert_eq!(block[6], DETAILS_TAIL);
    }

    #[test]
    fn test_rendered_block_parses_back() {
        let updates = vec![
            DependencyUpdate::new("com.example", "alpha", "1.0.0", "1.1.0"),
            DependencyUpdate::new("org.sample.core", "beta-core", "2.3", "2.4-rc1"),
        ];
        let document = render_block(&updates).join("\n");

        let parsed = ReleaseNotesParser.parse(&document).unwrap();
        assert_eq!(parsed, updates);
    }
}
