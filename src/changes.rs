//! Commit delta between two deployment tags

use crate::domain::{ChangeEntry, DeploymentDelta, Tag};
use crate::git::Repository;

/// Compute the commits deployed by `new_tag` since `previous`.
///
/// No query is issued when there is no previous tag. A failing commit-log query
/// yields an empty delta instead of an error.
pub fn extract_changes<R: Repository + ?Sized>(
    repo: &R,
    previous: Option<&Tag>,
    new_tag: &Tag,
) -> DeploymentDelta {
    let previous = match previous {
        Some(tag) if !tag.name.is_empty() => tag,
        _ => return DeploymentDelta::empty(),
    };

    match repo.commit_log(previous.as_str(), new_tag.as_str()) {
        Ok(commits) => commits
            .into_iter()
            .map(|commit| ChangeEntry::new(commit.subject, commit.author))
            .collect::<Vec<_>>()
            .into(),
        Err(e) => {
            tracing::warn!(
                from = %previous,
                to = %new_tag,
                error = %e,
                "commit log query failed, reporting no changes"
            );
            DeploymentDelta::empty()
        }
    }
}
