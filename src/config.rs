use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployChangesError, Result};

/// File name searched in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "deploy-changes.toml";

/// Represents the complete configuration for deploy-changes.
///
/// Deployment values given here are fallbacks: CLI flags and environment
/// variables take precedence. The Slack token is never read from the file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub slack: SlackConfig,
}

/// Default values for one deployment event.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct DeployConfig {
    pub repository_url: Option<String>,
    pub tag_prefix: Option<String>,
    pub job_name: Option<String>,
    pub build_number: Option<String>,
    pub chat_channel: Option<String>,
}

/// Which git implementation performs clone and queries.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GitBackendKind {
    /// In-process libgit2
    #[default]
    Libgit2,
    /// The `git` binary on PATH
    System,
}

/// Checkout settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default)]
    pub backend: GitBackendKind,

    /// Directory the repository is cloned under
    #[serde(default = "default_workspace_root")]
    pub workspace_root: PathBuf,
}

fn default_workspace_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            backend: GitBackendKind::default(),
            workspace_root: default_workspace_root(),
        }
    }
}

/// Slack Web API settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SlackConfig {
    #[serde(default = "default_slack_api_url")]
    pub api_url: String,

    #[serde(default = "default_as_user")]
    pub as_user: bool,
}

fn default_slack_api_url() -> String {
    "https://slack.com/api".to_string()
}

fn default_as_user() -> bool {
    true
}

impl Default for SlackConfig {
    fn default() -> Self {
        SlackConfig {
            api_url: default_slack_api_url(),
            as_user: default_as_user(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `deploy-changes.toml` in current directory
/// 3. `deploy-changes.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => load_config_file(&path),
        None => Ok(Config::default()),
    }
}

fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

fn load_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        DeployChangesError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        DeployChangesError::config(format!("cannot parse {}: {}", path.display(), e))
    })
}
