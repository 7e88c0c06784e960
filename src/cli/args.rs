use std::path::PathBuf;

use crate::config::{Config, GitBackendKind};
use crate::domain::RequestInputs;

#[derive(Debug, clap::Parser)]
#[command(
    name = "deploy-changes",
    version,
    about = "Post the commits introduced by a deployment tag to a Slack channel"
)]
pub struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, env = "GIT_REPO_URL", help = "GitHub URL of the deployed repository")]
    pub repo_url: Option<String>,

    #[arg(long, env = "TAG_PREFIX", help = "Prefix before the build number, e.g. app-stg-")]
    pub tag_prefix: Option<String>,

    #[arg(long, env = "DEPLOY_JOB_NAME", help = "Name of the deploy job that ran")]
    pub job_name: Option<String>,

    #[arg(long, env = "DEPLOY_JOB_BUILD_NUMBER", help = "Build number of the deploy job")]
    pub build_number: Option<String>,

    #[arg(long, env = "SLACK_CHANNEL", help = "Slack channel to post to")]
    pub slack_channel: Option<String>,

    #[arg(
        long,
        env = "SLACK_BOT_API_TOKEN",
        hide_env_values = true,
        help = "Slack bot API token"
    )]
    pub slack_token: Option<String>,

    #[arg(long, help = "Directory the repository is cloned under")]
    pub workspace_root: Option<PathBuf>,

    #[arg(long, value_enum, help = "Git implementation used for clone and queries")]
    pub git_backend: Option<GitBackendKind>,

    #[arg(long, help = "Print the message without posting it")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

impl Args {
    /// Merge flag and environment values over the config file's `[deploy]` section
    pub fn to_inputs(&self, config: &Config) -> RequestInputs {
        let deploy = &config.deploy;

        RequestInputs {
            repository_url: self.repo_url.clone().or_else(|| deploy.repository_url.clone()),
            tag_prefix: self.tag_prefix.clone().or_else(|| deploy.tag_prefix.clone()),
            job_name: self.job_name.clone().or_else(|| deploy.job_name.clone()),
            build_number: self.build_number.clone().or_else(|| deploy.build_number.clone()),
            chat_channel: self.slack_channel.clone().or_else(|| deploy.chat_channel.clone()),
            chat_credential: self.slack_token.clone(),
        }
    }

    /// Apply checkout flags on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(root) = &self.workspace_root {
            config.git.workspace_root = root.clone();
        }
        if let Some(backend) = self.git_backend {
            config.git.backend = backend;
        }
    }
}
