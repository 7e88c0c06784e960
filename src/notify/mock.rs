use std::cell::{Cell, RefCell};

use crate::error::{DeployChangesError, Result};
use crate::notify::Publisher;

/// Publisher that keeps messages in memory instead of sending them
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    sent: RefCell<Vec<(String, String)>>,
    auth_checks: Cell<usize>,
    reject_auth: bool,
    reject_send: bool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose credential check fails
    pub fn rejecting_auth() -> Self {
        RecordingPublisher {
            reject_auth: true,
            ..Self::default()
        }
    }

    /// A publisher whose message send fails
    pub fn rejecting_send() -> Self {
        RecordingPublisher {
            reject_send: true,
            ..Self::default()
        }
    }

    /// Messages sent so far as (channel, text)
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.borrow().clone()
    }

    pub fn auth_checks(&self) -> usize {
        self.auth_checks.get()
    }
}

impl Publisher for RecordingPublisher {
    fn authenticate(&self) -> Result<()> {
        self.auth_checks.set(self.auth_checks.get() + 1);
        if self.reject_auth {
            return Err(DeployChangesError::publish("auth.test failed: invalid_auth"));
        }
        Ok(())
    }

    fn send(&self, channel: &str, text: &str) -> Result<()> {
        if self.reject_send {
            return Err(DeployChangesError::publish(
                "chat.postMessage failed: channel_not_found",
            ));
        }
        self.sent
            .borrow_mut()
            .push((channel.to_string(), text.to_string()));
        Ok(())
    }
}
