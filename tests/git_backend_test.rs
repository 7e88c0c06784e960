// tests/git_backend_test.rs
mod common;

use std::process::Command;

use deploy_changes::git::{
    Git2Backend, Git2Repository, GitBackend, Repository, SystemGitRepository,
};
use deploy_changes::DeployChangesError;
use tempfile::TempDir;

fn subjects(repo: &dyn Repository, from: &str, to: &str) -> Vec<String> {
    repo.commit_log(from, to)
        .expect("commit log should succeed")
        .into_iter()
        .map(|c| format!("{} [{}]", c.subject, c.author))
        .collect()
}

fn system_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn test_git2_lists_tags_by_tagger_date() {
    let fixture = common::staging_repo();
    let repo = Git2Repository::open(fixture.path()).unwrap();

    let tags = repo.list_tags_by_date("app-stg-").unwrap();
    assert_eq!(tags, vec!["app-stg-old", "app-stg-9", "app-stg-10"]);
}

#[test]
fn test_git2_empty_namespace() {
    let fixture = common::staging_repo();
    let repo = Git2Repository::open(fixture.path()).unwrap();

    assert!(repo.list_tags_by_date("app-prod-").unwrap().is_empty());
}

#[test]
fn test_git2_tag_exists_needs_exact_single_match() {
    let fixture = common::staging_repo();
    let repo = Git2Repository::open(fixture.path()).unwrap();

    assert!(repo.tag_exists("app-stg-10").unwrap());
    assert!(!repo.tag_exists("app-stg-11").unwrap());
    assert!(!repo.tag_exists("app-stg-*").unwrap());
}

#[test]
fn test_git2_commit_log_skips_merges_newest_first() {
    let fixture = common::staging_repo();
    let repo = Git2Repository::open(fixture.path()).unwrap();

    assert_eq!(
        subjects(&repo, "app-stg-9", "app-stg-10"),
        vec!["fix bug [Alice]", "side fix [Carol]", "add search [Bob]"]
    );
}

#[test]
fn test_git2_commit_log_same_commit_is_empty() {
    let fixture = common::staging_repo();
    let repo = Git2Repository::open(fixture.path()).unwrap();

    assert!(repo.commit_log("app-stg-10", "prod-1").unwrap().is_empty());
}

#[test]
fn test_git2_commit_log_unknown_tag_fails() {
    let fixture = common::staging_repo();
    let repo = Git2Repository::open(fixture.path()).unwrap();

    assert!(repo.commit_log("app-stg-1", "app-stg-10").is_err());
}

#[test]
fn test_git2_backend_clones_tags() {
    let fixture = common::staging_repo();
    let root = TempDir::new().unwrap();
    let dest = root.path().join("storefront");

    let repo = Git2Backend
        .clone_repository(fixture.path().to_str().unwrap(), &dest)
        .expect("local clone should succeed");

    assert!(dest.is_dir());
    assert_eq!(
        repo.list_tags_by_date("app-stg-").unwrap(),
        vec!["app-stg-old", "app-stg-9", "app-stg-10"]
    );
}

#[test]
fn test_git2_backend_clone_failure() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("no-such-repo");
    let dest = root.path().join("checkout");

    let err = Git2Backend
        .clone_repository(missing.to_str().unwrap(), &dest)
        .err()
        .expect("clone of a missing repository should fail");

    assert!(matches!(err, DeployChangesError::RepositoryCloneFailed { .. }));
}

#[test]
fn test_system_git_matches_libgit2() {
    if !system_git_available() {
        eprintln!("git binary not found, skipping");
        return;
    }

    let fixture = common::staging_repo();
    let repo = SystemGitRepository::new(fixture.path());

    assert_eq!(
        repo.list_tags_by_date("app-stg-").unwrap(),
        vec!["app-stg-old", "app-stg-9", "app-stg-10"]
    );
    assert!(repo.tag_exists("app-stg-9").unwrap());
    assert!(!repo.tag_exists("app-stg-1").unwrap());
    assert_eq!(
        subjects(&repo, "app-stg-9", "app-stg-10"),
        vec!["fix bug [Alice]", "side fix [Carol]", "add search [Bob]"]
    );
}

#[test]
fn test_system_git_failed_query_reports_status() {
    if !system_git_available() {
        eprintln!("git binary not found, skipping");
        return;
    }

    let fixture = common::staging_repo();
    let repo = SystemGitRepository::new(fixture.path());

    let err = repo.commit_log("app-stg-1", "app-stg-10").unwrap_err();
    assert!(matches!(err, DeployChangesError::Command { .. }));
}
