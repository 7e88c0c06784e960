//! Main workflow orchestration logic
//!
//! One run takes a deployment event from raw inputs to a posted message:
//! validate, prepare the workspace, clone, resolve tags, check the new tag,
//! compute the delta, compose, publish. The workspace is removed on every exit
//! path.

use std::path::PathBuf;

use crate::changes::extract_changes;
use crate::domain::{DeploymentDelta, DeploymentRequest, RequestInputs, Tag};
use crate::error::Result;
use crate::git::GitBackend;
use crate::message::compose;
use crate::notify::Publisher;
use crate::resolver::find_previous_tag;
use crate::ui;
use crate::validator::validate_new_tag;
use crate::workspace::Workspace;

/// Steps of a single run, in order.
///
/// `CleanedUp` is reached whether the run succeeds or fails; `Published` is
/// skipped on failure and in dry-run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunStage {
    Created,
    Validated,
    WorkspacePrepared,
    TagsResolved,
    DeltaComputed,
    MessageComposed,
    Published,
    CleanedUp,
}

/// Settings that are not part of the deployment event itself
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Directory the repository is cloned under
    pub workspace_root: PathBuf,

    /// Compose and print the message without publishing it
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            workspace_root: PathBuf::from("."),
            dry_run: false,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentReport {
    /// The tag of the build just deployed
    pub new_tag: Tag,

    /// The tag deployed before it, if any
    pub previous_tag: Option<Tag>,

    /// Commits between the two tags
    pub delta: DeploymentDelta,

    /// The message body handed to the publisher
    pub message: String,

    /// Whether the message was posted
    pub published: bool,

    /// Last stage reached before cleanup: `Published`, or `MessageComposed`
    /// for a dry run
    pub stage: RunStage,
}

struct StageTracker {
    stage: RunStage,
}

impl StageTracker {
    fn new() -> Self {
        StageTracker {
            stage: RunStage::Created,
        }
    }

    fn advance(&mut self, next: RunStage) {
        tracing::debug!(from = ?self.stage, to = ?next, "run stage");
        self.stage = next;
    }
}

/// Drives one deployment event through a git backend and a publisher
pub struct DeploymentOrchestrator<B, P> {
    backend: B,
    publisher: P,
    options: RunOptions,
}

impl<B: GitBackend, P: Publisher> DeploymentOrchestrator<B, P> {
    pub fn new(backend: B, publisher: P, options: RunOptions) -> Self {
        DeploymentOrchestrator {
            backend,
            publisher,
            options,
        }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Validate raw inputs, then run the workflow.
    ///
    /// Configuration errors are returned before anything touches the disk or
    /// the network.
    pub fn execute(&self, inputs: RequestInputs) -> Result<DeploymentReport> {
        let request = DeploymentRequest::from_inputs(inputs)?;
        self.run(&request)
    }

    /// Run the workflow for an already validated request.
    pub fn run(&self, request: &DeploymentRequest) -> Result<DeploymentReport> {
        let mut tracker = StageTracker::new();
        tracker.advance(RunStage::Validated);

        let workspace =
            Workspace::prepare(&self.options.workspace_root, &request.repository_name())?;
        tracker.advance(RunStage::WorkspacePrepared);

        let result = self.run_in_workspace(&workspace, request, &mut tracker);

        drop(workspace);
        if let Err(e) = &result {
            tracing::error!(stage = ?tracker.stage, error = %e, "deployment run failed");
        }
        tracker.advance(RunStage::CleanedUp);

        result
    }

    fn run_in_workspace(
        &self,
        workspace: &Workspace,
        request: &DeploymentRequest,
        tracker: &mut StageTracker,
    ) -> Result<DeploymentReport> {
        ui::display_status(&format!("Cloning from '{}'", request.repository_url()));
        let repo = self
            .backend
            .clone_repository(request.repository_url(), workspace.path())?;

        let new_tag = request.new_tag();
        let previous_tag = find_previous_tag(&repo, request.tag_prefix(), &new_tag);
        ui::display_previous_tag(previous_tag.as_ref());
        tracker.advance(RunStage::TagsResolved);

        validate_new_tag(&repo, new_tag.as_str())?;
        ui::display_new_tag(&new_tag);

        let delta = extract_changes(&repo, previous_tag.as_ref(), &new_tag);
        tracing::info!(tag = %new_tag, changes = delta.len(), "computed deployment delta");
        tracker.advance(RunStage::DeltaComputed);

        let message = compose(request.job_name(), request.build_number(), &delta);
        ui::display_message(&message);
        tracker.advance(RunStage::MessageComposed);

        let published = if self.options.dry_run {
            tracing::info!("dry run, skipping publish");
            false
        } else {
            self.publisher.authenticate()?;
            self.publisher.send(request.chat_channel(), &message)?;
            tracker.advance(RunStage::Published);
            true
        };

        Ok(DeploymentReport {
            new_tag,
            previous_tag,
            delta,
            message,
            published,
            stage: tracker.stage,
        })
    }
}
