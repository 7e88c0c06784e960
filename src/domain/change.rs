use std::fmt;

/// One deployed commit: subject line and author name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub subject: String,
    pub author: String,
}

impl ChangeEntry {
    pub fn new(subject: impl Into<String>, author: impl Into<String>) -> Self {
        ChangeEntry {
            subject: subject.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.subject, self.author)
    }
}

/// Commits between the previous tag (exclusive) and the new tag (inclusive),
/// newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentDelta {
    entries: Vec<ChangeEntry>,
}

impl DeploymentDelta {
    pub fn empty() -> Self {
        DeploymentDelta::default()
    }

    pub fn new(entries: Vec<ChangeEntry>) -> Self {
        DeploymentDelta { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }
}

impl From<Vec<ChangeEntry>> for DeploymentDelta {
    fn from(entries: Vec<ChangeEntry>) -> Self {
        DeploymentDelta::new(entries)
    }
}
