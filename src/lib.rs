pub mod changes;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod message;
pub mod notify;
pub mod resolver;
pub mod ui;
pub mod validator;
pub mod workspace;

pub use error::{DeployChangesError, Result};
