//! Deployment-ordered tag resolution for one prefix namespace

use crate::domain::{Tag, TagSequence};
use crate::git::Repository;

/// Read the tags under `prefix`, most recently deployed first.
///
/// A failing tag listing degrades to an empty sequence.
pub fn resolve_sequence<R: Repository + ?Sized>(repo: &R, prefix: &str) -> TagSequence {
    match repo.list_tags_by_date(prefix) {
        Ok(oldest_first) => TagSequence::from_deployment_order(oldest_first),
        Err(e) => {
            tracing::warn!(prefix, error = %e, "tag listing failed, treating namespace as empty");
            TagSequence::default()
        }
    }
}

/// Find the tag deployed just before `new_tag`, if any.
///
/// `None` is the first-deployment case: the namespace is empty, `new_tag` is not
/// in it, or `new_tag` is the oldest tag.
pub fn find_previous_tag<R: Repository + ?Sized>(
    repo: &R,
    prefix: &str,
    new_tag: &Tag,
) -> Option<Tag> {
    let sequence = resolve_sequence(repo, prefix);
    tracing::debug!(prefix, tags = sequence.len(), "resolved tag sequence");

    sequence.previous_of(new_tag.as_str()).cloned()
}
