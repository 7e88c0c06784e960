use thiserror::Error;

/// Unified error type for deploy-changes operations
#[derive(Error, Debug)]
pub enum DeployChangesError {
    #[error("'{url}' is not a valid GitHub repository URL")]
    InvalidRepositoryUrl { url: String },

    #[error("Tag prefix missing (TAG_PREFIX)")]
    MissingTagPrefix,

    #[error("Deploy job build number missing or not a positive integer (DEPLOY_JOB_BUILD_NUMBER)")]
    MissingBuildNumber,

    #[error("Deploy job name missing (DEPLOY_JOB_NAME)")]
    MissingJobName,

    #[error("Slack channel missing (SLACK_CHANNEL). Ex: '#test_channel'")]
    MissingChatChannel,

    #[error("Slack bot API token missing (SLACK_BOT_API_TOKEN)")]
    MissingChatCredential,

    #[error("{}", describe_invalid_tag(.tag))]
    InvalidTagName { tag: String },

    #[error("Git clone from '{url}' failed: {reason}")]
    RepositoryCloneFailed { url: String, reason: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Command `{command}` exited with status {status}: {stderr}")]
    Command {
        command: String,
        status: i32,
        stderr: String,
    },

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in deploy-changes
pub type Result<T> = std::result::Result<T, DeployChangesError>;

fn describe_invalid_tag(tag: &str) -> String {
    if tag.is_empty() {
        "Git tag name missing".to_string()
    } else {
        format!("Git tag '{}' not found", tag)
    }
}

impl DeployChangesError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DeployChangesError::Config(msg.into())
    }

    /// Create a publish error with context
    pub fn publish(msg: impl Into<String>) -> Self {
        DeployChangesError::Publish(msg.into())
    }

    /// Create an invalid tag name error
    pub fn invalid_tag(tag: impl Into<String>) -> Self {
        DeployChangesError::InvalidTagName { tag: tag.into() }
    }

    /// True for failures raised while validating inputs, before any git or network call
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DeployChangesError::InvalidRepositoryUrl { .. }
                | DeployChangesError::MissingTagPrefix
                | DeployChangesError::MissingBuildNumber
                | DeployChangesError::MissingJobName
                | DeployChangesError::MissingChatChannel
                | DeployChangesError::MissingChatCredential
                | DeployChangesError::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeployChangesError::config("bad toml");
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[test]
    fn test_invalid_tag_messages() {
        assert_eq!(
            DeployChangesError::invalid_tag("").to_string(),
            "Git tag name missing"
        );
        assert_eq!(
            DeployChangesError::invalid_tag("app-stg-3").to_string(),
            "Git tag 'app-stg-3' not found"
        );
    }

    #[test]
    fn test_clone_failure_carries_url() {
        let err = DeployChangesError::RepositoryCloneFailed {
            url: "https://github.com/org/repo".to_string(),
            reason: "exit status 128".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://github.com/org/repo"));
        assert!(msg.contains("exit status 128"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DeployChangesError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_configuration_classification() {
        let config_errors = vec![
            DeployChangesError::MissingTagPrefix,
            DeployChangesError::MissingBuildNumber,
            DeployChangesError::MissingJobName,
            DeployChangesError::MissingChatChannel,
            DeployChangesError::MissingChatCredential,
            DeployChangesError::InvalidRepositoryUrl {
                url: "x".to_string(),
            },
        ];
        for err in config_errors {
            assert!(err.is_configuration_error(), "{} should be config", err);
        }

        assert!(!DeployChangesError::invalid_tag("t").is_configuration_error());
        assert!(!DeployChangesError::publish("down").is_configuration_error());
    }

    #[test]
    fn test_command_error_includes_stderr() {
        let err = DeployChangesError::Command {
            command: "git tag -l".to_string(),
            status: 128,
            stderr: "fatal: not a git repository".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("128"));
        assert!(msg.contains("not a git repository"));
    }
}
