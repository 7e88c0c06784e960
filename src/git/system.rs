use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{DeployChangesError, Result};
use crate::git::{CommitInfo, GitBackend, Repository};

const FIELD_SEPARATOR: char = '\u{1f}';

/// Run `git` with `args`, returning stdout on success.
///
/// A non-zero exit becomes [DeployChangesError::Command] with the exit code and
/// captured stderr.
fn run_git(dir: Option<&Path>, args: &[&str]) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let output = cmd.output()?;

    if !output.status.success() {
        return Err(DeployChangesError::Command {
            command: format!("git {}", args.join(" ")),
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// A checkout queried through the `git` binary
#[derive(Debug, Clone)]
pub struct SystemGitRepository {
    dir: PathBuf,
}

impl SystemGitRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SystemGitRepository { dir: dir.into() }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        run_git(Some(&self.dir), args)
    }
}

impl Repository for SystemGitRepository {
    fn list_tags_by_date(&self, prefix: &str) -> Result<Vec<String>> {
        let pattern = format!("refs/tags/{}*", prefix);
        let stdout = self.git(&[
            "for-each-ref",
            "--sort=taggerdate",
            "--format=%(refname)",
            pattern.as_str(),
        ])?;

        Ok(stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.trim_start_matches("refs/tags/").to_string())
            .collect())
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        let stdout = self.git(&["tag", "-l", name])?;

        Ok(stdout.lines().filter(|line| !line.is_empty()).count() == 1)
    }

    fn commit_log(&self, from_tag: &str, to_tag: &str) -> Result<Vec<CommitInfo>> {
        let range = format!("refs/tags/{}..refs/tags/{}", from_tag, to_tag);
        let stdout = self.git(&[
            "log",
            "--no-merges",
            "--format=%H%x1f%s%x1f%an",
            range.as_str(),
        ])?;

        Ok(stdout.lines().filter_map(parse_log_line).collect())
    }
}

fn parse_log_line(line: &str) -> Option<CommitInfo> {
    let mut fields = line.splitn(3, FIELD_SEPARATOR);
    let hash = fields.next()?.to_string();
    let subject = fields.next()?.to_string();
    let author = fields.next().unwrap_or("unknown").to_string();

    Some(CommitInfo {
        hash,
        subject,
        author,
    })
}

/// Clones with `git clone`
#[derive(Debug, Clone, Default)]
pub struct SystemGitBackend;

impl GitBackend for SystemGitBackend {
    type Repo = SystemGitRepository;

    fn clone_repository(&self, url: &str, dest: &Path) -> Result<SystemGitRepository> {
        let dest_str = dest.to_string_lossy();

        run_git(None, &["clone", "--quiet", url, dest_str.as_ref()]).map_err(|e| {
            DeployChangesError::RepositoryCloneFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !dest.is_dir() {
            return Err(DeployChangesError::RepositoryCloneFailed {
                url: url.to_string(),
                reason: format!("'{}' missing after clone", dest.display()),
            });
        }

        Ok(SystemGitRepository::new(dest))
    }
}
