//! Input gate: each check inspects one value and returns the matching error.
//!
//! Checks never transform their input. Values arrive as `Option<&str>` so that
//! "not provided" and "provided but empty" fail the same way.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{DeployChangesError, Result};
use crate::git::Repository;

fn repository_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https://github\.com/([^/]+?)/([^/]+)").expect("repository URL pattern")
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Checkout directory name for a repository URL: the `<repo>` segment without
/// a `.git` suffix.
///
/// `None` when the URL does not match or the name is empty or made of dots only,
/// since such a name would point the checkout at the workspace root or its parent.
pub fn repository_name(url: &str) -> Option<&str> {
    let repo = repository_url_regex().captures(url)?.get(2)?.as_str();
    let name = repo.strip_suffix(".git").unwrap_or(repo);

    name.chars().any(|c| c != '.').then_some(name)
}

/// `https://github.com/<owner>/<repo>` with non-empty owner and repo segments
pub fn validate_repository_url(url: Option<&str>) -> Result<()> {
    match url {
        Some(url) if repository_name(url).is_some() => Ok(()),
        other => Err(DeployChangesError::InvalidRepositoryUrl {
            url: other.unwrap_or_default().to_string(),
        }),
    }
}

pub fn validate_tag_prefix(prefix: Option<&str>) -> Result<()> {
    non_empty(prefix)
        .map(|_| ())
        .ok_or(DeployChangesError::MissingTagPrefix)
}

/// Build numbers must parse as an integer greater than zero
pub fn validate_build_number(build_number: Option<&str>) -> Result<()> {
    let digits = non_empty(build_number).filter(|n| n.bytes().all(|b| b.is_ascii_digit()));

    match digits.and_then(|n| n.parse::<u64>().ok()) {
        Some(n) if n > 0 => Ok(()),
        _ => Err(DeployChangesError::MissingBuildNumber),
    }
}

pub fn validate_job_name(job_name: Option<&str>) -> Result<()> {
    non_empty(job_name)
        .map(|_| ())
        .ok_or(DeployChangesError::MissingJobName)
}

pub fn validate_chat_channel(channel: Option<&str>) -> Result<()> {
    non_empty(channel)
        .map(|_| ())
        .ok_or(DeployChangesError::MissingChatChannel)
}

pub fn validate_chat_credential(credential: Option<&str>) -> Result<()> {
    non_empty(credential)
        .map(|_| ())
        .ok_or(DeployChangesError::MissingChatCredential)
}

/// The new tag must be named and match exactly one tag in the checkout.
///
/// A failing lookup counts as "not found".
pub fn validate_new_tag<R: Repository + ?Sized>(repo: &R, tag_name: &str) -> Result<()> {
    if tag_name.is_empty() {
        return Err(DeployChangesError::invalid_tag(tag_name));
    }

    match repo.tag_exists(tag_name) {
        Ok(true) => Ok(()),
        Ok(false) => Err(DeployChangesError::invalid_tag(tag_name)),
        Err(e) => {
            tracing::warn!(tag = tag_name, error = %e, "tag lookup failed");
            Err(DeployChangesError::invalid_tag(tag_name))
        }
    }
}
