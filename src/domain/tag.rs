use std::fmt;

/// A deployment tag, e.g. `app-stg-42`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Build the tag name for a deployment: prefix followed by the build number
    pub fn for_build(prefix: &str, build_number: &str) -> Self {
        Tag::new(format!("{}{}", prefix, build_number))
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Tags of one prefix namespace, most recently deployed first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSequence {
    tags: Vec<Tag>,
}

impl TagSequence {
    /// Build a sequence from tags in deployment order (oldest first), as the
    /// repository reports them.
    pub fn from_deployment_order<I, S>(oldest_first: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: Vec<Tag> = oldest_first.into_iter().map(Tag::new).collect();
        tags.reverse();
        TagSequence { tags }
    }

    /// Build a sequence from tags already in recency order (newest first)
    pub fn from_recency_order<I, S>(newest_first: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagSequence {
            tags: newest_first.into_iter().map(Tag::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn latest(&self) -> Option<&Tag> {
        self.tags.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Find the tag deployed just before `name`.
    ///
    /// Scans from the most recent tag and takes the element after the first
    /// exact match. Returns `None` when `name` is absent or is the oldest tag.
    pub fn previous_of(&self, name: &str) -> Option<&Tag> {
        let index = self.tags.iter().position(|tag| tag.name == name)?;
        self.tags.get(index + 1)
    }
}
