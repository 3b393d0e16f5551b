//! Merging of new updates over recorded ones

use crate::domain::DependencyUpdate;
use crate::error::MergeError;
use std::collections::HashSet;

/// Merge `new` updates over `old` ones.
///
/// A coordinate bumped by `new` replaces any recorded update of the same
/// coordinate. The same coordinate appearing twice in `new` is an error.
/// The result is sorted by artifact id.
pub fn merge_updates(
    old: Vec<DependencyUpdate>,
    new: Vec<DependencyUpdate>,
) -> Result<Vec<DependencyUpdate>, MergeError> {
    let mut merged = Vec::with_capacity(old.len() + new.len());
    let mut claimed: HashSet<String> = HashSet::new();

    for update in new {
        let coordinate = update.coordinate();
        if !claimed.insert(coordinate.clone()) {
            return Err(MergeError::DuplicateUpdate { coordinate });
        }
        merged.push(update);
    }

    for update in old {
        if claimed.insert(update.coordinate()) {
            merged.push(update);
        }
    }

    merged.sort_by(|a, b| a.artifact_id.cmp(&b.artifact_id));
    Ok(merged)
}
