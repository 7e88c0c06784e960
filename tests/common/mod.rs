// Shared fixtures for integration tests
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

fn signature(name: &str, seconds: i64) -> Signature<'static> {
    let email = format!("{}@example.com", name.to_lowercase());
    Signature::new(name, &email, &Time::new(seconds, 0)).expect("Could not build signature")
}

/// Create a commit with an empty tree, optionally moving HEAD
pub fn commit(
    repo: &Repository,
    update_head: bool,
    message: &str,
    author: &str,
    seconds: i64,
    parents: &[Oid],
) -> Oid {
    let tree_id = repo
        .index()
        .expect("Could not get index")
        .write_tree()
        .expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let parents: Vec<_> = parents
        .iter()
        .map(|oid| repo.find_commit(*oid).expect("Could not find parent"))
        .collect();
    let parent_refs: Vec<_> = parents.iter().collect();
    let sig = signature(author, seconds);

    repo.commit(
        if update_head { Some("HEAD") } else { None },
        &sig,
        &sig,
        message,
        &tree,
        &parent_refs,
    )
    .expect("Could not create commit")
}

/// Create an annotated tag whose tagger date is `seconds`
pub fn annotated_tag(repo: &Repository, name: &str, target: Oid, seconds: i64) {
    let object = repo.find_object(target, None).expect("Could not find object");
    repo.tag(name, &object, &signature("Deployer", seconds), name, false)
        .expect("Could not create tag");
}

/// A staging history with a merge in the middle:
///
/// ```text
/// c1 "initial"        <- app-stg-9 (tagged at 1100), app-stg-old (lightweight)
/// c2 "add search"
/// s1 "side fix"       (on a side branch)
/// m  "Merge branch 'side'"
/// c3 "fix bug"        <- app-stg-10 (tagged at 5000), prod-1
/// ```
///
/// Tag names sort lexically as 10 < 9, deploy order is 9 then 10.
pub fn staging_repo() -> TempDir {
    let dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(dir.path()).expect("Could not init git repo");

    let c1 = commit(&repo, true, "initial", "Alice", 1_000, &[]);
    let c2 = commit(&repo, true, "add search", "Bob", 2_000, &[c1]);
    let s1 = commit(&repo, false, "side fix", "Carol", 2_500, &[c1]);
    let m = commit(&repo, true, "Merge branch 'side'", "Alice", 3_000, &[c2, s1]);
    let c3 = commit(&repo, true, "fix bug", "Alice", 4_000, &[m]);

    annotated_tag(&repo, "app-stg-9", c1, 1_100);
    annotated_tag(&repo, "app-stg-10", c3, 5_000);
    annotated_tag(&repo, "prod-1", c3, 6_000);
    repo.tag_lightweight(
        "app-stg-old",
        &repo.find_object(c1, None).expect("Could not find object"),
        false,
    )
    .expect("Could not create lightweight tag");

    dir
}
