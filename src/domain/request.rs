use std::fmt;

use crate::domain::Tag;
use crate::error::Result;
use crate::validator;

/// Raw, unvalidated inputs for one deployment event.
///
/// Filled from CLI flags, environment variables or the config file; any of them
/// may be missing until validation runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestInputs {
    pub repository_url: Option<String>,
    pub tag_prefix: Option<String>,
    pub job_name: Option<String>,
    pub build_number: Option<String>,
    pub chat_channel: Option<String>,
    pub chat_credential: Option<String>,
}

/// A validated deployment event. Constructed once, never mutated.
#[derive(Clone, PartialEq)]
pub struct DeploymentRequest {
    repository_url: String,
    tag_prefix: String,
    job_name: String,
    build_number: String,
    chat_channel: String,
    chat_credential: String,
}

impl DeploymentRequest {
    /// Validate every static field, in declaration order, and build the request.
    pub fn from_inputs(inputs: RequestInputs) -> Result<Self> {
        validator::validate_repository_url(inputs.repository_url.as_deref())?;
        validator::validate_tag_prefix(inputs.tag_prefix.as_deref())?;
        validator::validate_build_number(inputs.build_number.as_deref())?;
        validator::validate_job_name(inputs.job_name.as_deref())?;
        validator::validate_chat_channel(inputs.chat_channel.as_deref())?;
        validator::validate_chat_credential(inputs.chat_credential.as_deref())?;

        Ok(DeploymentRequest {
            repository_url: inputs.repository_url.unwrap_or_default(),
            tag_prefix: inputs.tag_prefix.unwrap_or_default(),
            job_name: inputs.job_name.unwrap_or_default(),
            build_number: inputs.build_number.unwrap_or_default(),
            chat_channel: inputs.chat_channel.unwrap_or_default(),
            chat_credential: inputs.chat_credential.unwrap_or_default(),
        })
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn build_number(&self) -> &str {
        &self.build_number
    }

    pub fn chat_channel(&self) -> &str {
        &self.chat_channel
    }

    pub fn chat_credential(&self) -> &str {
        &self.chat_credential
    }

    /// The tag this deployment should have produced: `tag_prefix + build_number`
    pub fn new_tag(&self) -> Tag {
        Tag::for_build(&self.tag_prefix, &self.build_number)
    }

    /// Directory name for the checkout: the `<repo>` URL segment without `.git`
    pub fn repository_name(&self) -> String {
        validator::repository_name(&self.repository_url)
            .unwrap_or_default()
            .to_string()
    }
}

impl fmt::Debug for DeploymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeploymentRequest")
            .field("repository_url", &self.repository_url)
            .field("tag_prefix", &self.tag_prefix)
            .field("job_name", &self.job_name)
            .field("build_number", &self.build_number)
            .field("chat_channel", &self.chat_channel)
            .field("chat_credential", &"<redacted>")
            .finish()
    }
}
