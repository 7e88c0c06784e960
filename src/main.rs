use anyhow::Result;
use clap::Parser;

use deploy_changes::cli::{Args, DeploymentOrchestrator, DeploymentReport, RunOptions};
use deploy_changes::config::{self, GitBackendKind};
use deploy_changes::domain::DeploymentRequest;
use deploy_changes::git::{Git2Backend, SystemGitBackend};
use deploy_changes::notify::SlackPublisher;
use deploy_changes::ui;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initialize logging with LOGGING env var support
/// LOGGING=debug,info,warn,error or just LOGGING=debug
fn init_logging(verbose: bool) {
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    // stdout carries the message body, keep logs on stderr
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    let request = DeploymentRequest::from_inputs(args.to_inputs(&config))?;
    let publisher = SlackPublisher::new(request.chat_credential(), &config.slack);
    let options = RunOptions {
        workspace_root: config.git.workspace_root.clone(),
        dry_run: args.dry_run,
    };

    let report = match config.git.backend {
        GitBackendKind::Libgit2 => {
            DeploymentOrchestrator::new(Git2Backend, publisher, options).run(&request)?
        }
        GitBackendKind::System => {
            DeploymentOrchestrator::new(SystemGitBackend, publisher, options).run(&request)?
        }
    };

    display_outcome(&report);
    Ok(())
}

fn display_outcome(report: &DeploymentReport) {
    if report.published {
        ui::display_success(&format!(
            "Posted {} change(s) for {}",
            report.delta.len(),
            report.new_tag
        ));
    } else {
        ui::display_status("Dry run: message not posted");
    }
}
