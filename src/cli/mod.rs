//! Command-line surface and the end-to-end deployment workflow

pub mod args;
pub mod orchestration;

pub use args::Args;
pub use orchestration::{DeploymentOrchestrator, DeploymentReport, RunOptions, RunStage};
