//! Git operations abstraction layer
//!
//! The deployment workflow only ever needs four things from git: clone a
//! repository, list the tags of a prefix namespace in deployment order, check
//! that a tag exists, and read the commits between two tags. These are split
//! over two traits:
//!
//! - [GitBackend] materializes a checkout and hands back a [Repository]
//! - [Repository] answers queries against that checkout
//!
//! Implementations:
//!
//! - [repository::Git2Backend]: in-process, using the `git2` crate
//! - [system::SystemGitBackend]: shells out to the `git` binary
//! - [mock::MockBackend]: in-memory, for tests
//!
//! Every call returns an explicit [crate::error::Result]; callers decide which
//! failures are fatal and which degrade to an empty answer.

pub mod mock;
pub mod repository;
pub mod system;

pub use mock::{MockBackend, MockRepository};
pub use repository::{Git2Backend, Git2Repository};
pub use system::{SystemGitBackend, SystemGitRepository};

use std::path::Path;

use crate::error::Result;

/// Commit information read from a tag range
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The full commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
    /// The commit author name
    pub author: String,
}

/// Read-only queries against a checked out repository
pub trait Repository {
    /// List tags whose names start with `prefix`
    ///
    /// Tags are ordered by tagger date, oldest first. Tags without a tagger
    /// date (lightweight tags) sort before annotated ones; ties keep name order.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names without the `refs/tags/` prefix
    /// * `Err` - If the tag references cannot be read
    fn list_tags_by_date(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check that exactly one tag matches `name`
    fn tag_exists(&self, name: &str) -> Result<bool>;

    /// Get non-merge commits reachable from `to_tag` but not from `from_tag`
    ///
    /// # Returns
    /// * `Ok(Vec<CommitInfo>)` - Commits newest first
    /// * `Err` - If either tag cannot be resolved or the walk fails
    fn commit_log(&self, from_tag: &str, to_tag: &str) -> Result<Vec<CommitInfo>>;
}

/// Produces a checkout of a remote repository
pub trait GitBackend {
    type Repo: Repository;

    /// Clone `url` into `dest`
    ///
    /// Fails with [crate::error::DeployChangesError::RepositoryCloneFailed]
    /// when the clone errors or `dest` does not exist afterwards.
    fn clone_repository(&self, url: &str, dest: &Path) -> Result<Self::Repo>;
}
