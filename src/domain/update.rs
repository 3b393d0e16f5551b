//! Dependency update record

use serde::Serialize;
use std::fmt;

/// A single dependency version bump.
///
/// Equality and hashing cover all four fields, which is what
/// de-duplication relies on. Merging identifies updates by
/// [`DependencyUpdate::coordinate`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DependencyUpdate {
    /// Maven group id
    pub group_id: String,
    /// Maven artifact id
    pub artifact_id: String,
    /// Version before the bump
    pub old_version: String,
    /// Version after the bump
    pub new_version: String,
}

impl DependencyUpdate {
    /// Creates a new dependency update
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
        }
    }

    /// Returns the `groupId:artifactId` coordinate
    pub fn coordinate(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl fmt::Display for DependencyUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} -> {}",
            self.group_id, self.artifact_id, self.old_version, self.new_version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new() {
        let update = DependencyUpdate::new("some.group", "some-artifact", "1.2.3", "2.3.4");
        assert_eq!(update.group_id, "some.group");
        assert_eq!(update.artifact_id, "some-artifact");
        assert_eq!(update.old_version, "1.2.3");
        assert_eq!(update.new_version, "2.3.4");
    }

    #[test]
    fn test_coordinate() {
        let update = DependencyUpdate::new("some.group", "some-artifact", "1.2.3", "2.3.4");
        assert_eq!(update.coordinate(), "some.group:some-artifact");
    }

    #[test]
    fn test_equality_covers_versions() {
        let first = DependencyUpdate::new("g", "a", "1", "2");
        let same = DependencyUpdate::new("g", "a", "1", "2");
        let other = DependencyUpdate::new("g", "a", "2", "3");
        assert_eq!(first, same);
        assert_ne!(first, other);
        assert_eq!(first.coordinate(), other.coordinate());
    }

    #[test]
    fn test_hash_collapses_identical_updates() {
        let set: HashSet<DependencyUpdate> = [
            DependencyUpdate::new("g", "a", "1", "2"),
            DependencyUpdate::new("g", "a", "1", "2"),
            DependencyUpdate::new("g", "a", "2", "3"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let update = DependencyUpdate::new("org.slf4j", "slf4j-api", "2.0.9", "2.0.12");
        assert_eq!(format!("{}", update), "org.slf4j:slf4j-api 2.0.9 -> 2.0.12");
    }

    #[test]
    fn test_serialize_field_names() {
        let update = DependencyUpdate::new("g", "a", "1", "2");
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(
            json,
            r#"{"group_id":"g","artifact_id":"a","old_version":"1","new_version":"2"}"#
        );
    }
}
