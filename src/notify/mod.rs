//! Chat publishing
//!
//! The orchestrator only needs two calls from a chat service: check the
//! credentials, then post one message. [Publisher] captures that; the Slack Web
//! API client lives in [slack] and a recording double in [mock].

pub mod mock;
pub mod slack;

pub use mock::RecordingPublisher;
pub use slack::SlackPublisher;

use crate::error::Result;

/// Delivers a composed message to a chat channel. Calls are not retried.
pub trait Publisher {
    /// Verify the configured credentials
    fn authenticate(&self) -> Result<()>;

    /// Post `text` to `channel`
    fn send(&self, channel: &str, text: &str) -> Result<()>;
}
