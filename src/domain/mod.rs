//! Domain logic - pure deployment rules independent of git and chat plumbing

pub mod change;
pub mod request;
pub mod tag;

pub use change::{ChangeEntry, DeploymentDelta};
pub use request::{DeploymentRequest, RequestInputs};
pub use tag::{Tag, TagSequence};
