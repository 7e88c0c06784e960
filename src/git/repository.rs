use std::path::Path;

use git2::{build::RepoBuilder, AutotagOption, FetchOptions, Oid, Repository as Git2Repo};

use crate::error::{DeployChangesError, Result};
use crate::git::{CommitInfo, GitBackend, Repository};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open a repository at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn tag_commit(&self, tag_name: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(&format!("refs/tags/{}", tag_name))?;
        let commit = object.peel_to_commit()?;

        Ok(commit.id())
    }
}

impl Repository for Git2Repository {
    fn list_tags_by_date(&self, prefix: &str) -> Result<Vec<String>> {
        let pattern = format!("{}*", prefix);
        let names = self.repo.tag_names(Some(&pattern))?;

        let mut dated = Vec::new();
        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
            let tagger_time = reference
                .peel_to_tag()
                .ok()
                .and_then(|tag| tag.tagger().map(|sig| sig.when().seconds()));

            dated.push((tagger_time, name.to_string()));
        }

        dated.sort();
        Ok(dated.into_iter().map(|(_, name)| name).collect())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let matches = self.repo.tag_names(Some(name))?;

        Ok(matches.iter().flatten().count() == 1)
    }

    fn commit_log(&self, from_tag: &str, to_tag: &str) -> Result<Vec<CommitInfo>> {
        let from_oid = self.tag_commit(from_tag)?;
        let to_oid = self.tag_commit(to_tag)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(git2::Sort::TIME)?;
        revwalk.push(to_oid)?;
        revwalk.hide(from_oid)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            if commit.parent_count() > 1 {
                continue;
            }

            commits.push(CommitInfo {
                hash: oid.to_string(),
                subject: commit.summary().unwrap_or_default().to_string(),
                author: commit.author().name().unwrap_or("unknown").to_string(),
            });
        }

        Ok(commits)
    }
}

/// Clones with libgit2, fetching every tag of the remote
#[derive(Debug, Clone, Default)]
pub struct Git2Backend;

impl GitBackend for Git2Backend {
    type Repo = Git2Repository;

    fn clone_repository(&self, url: &str, dest: &Path) -> Result<Git2Repository> {
        let mut fetch_options = FetchOptions::new();
        fetch_options.download_tags(AutotagOption::All);

        let repo = RepoBuilder::new()
            .fetch_options(fetch_options)
            .clone(url, dest)
            .map_err(|e| DeployChangesError::RepositoryCloneFailed {
                url: url.to_string(),
                reason: e.message().to_string(),
            })?;

        if !dest.is_dir() {
            return Err(DeployChangesError::RepositoryCloneFailed {
                url: url.to_string(),
                reason: format!("'{}' missing after clone", dest.display()),
            });
        }

        Ok(Git2Repository::from_git2(repo))
    }
}
