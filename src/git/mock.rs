use std::cell::Cell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{DeployChangesError, Result};
use crate::git::{CommitInfo, GitBackend, Repository};

/// Mock repository for testing without actual git operations
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    /// (name, tagger timestamp) in insertion order
    tags: Vec<(String, i64)>,
    ranges: HashMap<(String, String), Vec<CommitInfo>>,
    failing: bool,
    log_queries: Cell<usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag created at `tagger_time` (seconds since the epoch)
    pub fn add_tag(&mut self, name: impl Into<String>, tagger_time: i64) {
        self.tags.push((name.into(), tagger_time));
    }

    /// Register the commits returned for `from..to`, newest first
    pub fn add_range(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        commits: Vec<CommitInfo>,
    ) {
        self.ranges.insert((from.into(), to.into()), commits);
    }

    /// Make every query fail, as a broken checkout would
    pub fn fail_queries(&mut self) {
        self.failing = true;
    }

    /// Number of `commit_log` calls made so far
    pub fn log_queries(&self) -> usize {
        self.log_queries.get()
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(DeployChangesError::Command {
                command: "git".to_string(),
                status: 128,
                stderr: "fatal: mock failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Repository for MockRepository {
    fn list_tags_by_date(&self, prefix: &str) -> Result<Vec<String>> {
        self.check()?;

        let mut tags: Vec<&(String, i64)> = self
            .tags
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .collect();
        tags.sort_by_key(|(_, time)| *time);

        Ok(tags.into_iter().map(|(name, _)| name.clone()).collect())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        self.check()?;

        Ok(self.tags.iter().filter(|(tag, _)| tag == name).count() == 1)
    }

    fn commit_log(&self, from_tag: &str, to_tag: &str) -> Result<Vec<CommitInfo>> {
        self.log_queries.set(self.log_queries.get() + 1);
        self.check()?;

        Ok(self
            .ranges
            .get(&(from_tag.to_string(), to_tag.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

/// Backend that "clones" by creating the destination directory
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    repo: MockRepository,
    clone_failure: Option<String>,
}

impl MockBackend {
    pub fn new(repo: MockRepository) -> Self {
        MockBackend {
            repo,
            clone_failure: None,
        }
    }

    /// Make `clone_repository` fail with `reason`
    pub fn failing_clone(reason: impl Into<String>) -> Self {
        MockBackend {
            repo: MockRepository::new(),
            clone_failure: Some(reason.into()),
        }
    }
}

impl GitBackend for MockBackend {
    type Repo = MockRepository;

    fn clone_repository(&self, url: &str, dest: &Path) -> Result<MockRepository> {
        if let Some(reason) = &self.clone_failure {
            return Err(DeployChangesError::RepositoryCloneFailed {
                url: url.to_string(),
                reason: reason.clone(),
            });
        }

        fs::create_dir_all(dest)?;
        Ok(self.repo.clone())
    }
}
