//! Slack Web API notifications

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::SlackConfig;
use crate::error::{DeployChangesError, Result};
use crate::notify::Publisher;

/// Envelope shared by every Slack Web API response
#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackResponse {
    fn into_result(self, method: &str) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(DeployChangesError::publish(format!(
                "{} failed: {}",
                method,
                self.error.as_deref().unwrap_or("unknown_error")
            )))
        }
    }
}

/// Posts messages as a Slack bot user
pub struct SlackPublisher {
    client: Client,
    api_url: String,
    token: String,
    as_user: bool,
}

impl SlackPublisher {
    pub fn new(token: impl Into<String>, config: &SlackConfig) -> Self {
        SlackPublisher {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            as_user: config.as_user,
        }
    }

    fn call(&self, method: &str, payload: &Value) -> Result<()> {
        let url = format!("{}/{}", self.api_url, method);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .map_err(|e| DeployChangesError::publish(format!("{} request failed: {}", method, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(DeployChangesError::publish(format!(
                "{} returned {} - {}",
                method, status, text
            )));
        }

        let body: SlackResponse = response.json().map_err(|e| {
            DeployChangesError::publish(format!("{} response unreadable: {}", method, e))
        })?;

        body.into_result(method)
    }
}

impl Publisher for SlackPublisher {
    fn authenticate(&self) -> Result<()> {
        tracing::debug!("checking Slack credentials");
        self.call("auth.test", &json!({}))
    }

    fn send(&self, channel: &str, text: &str) -> Result<()> {
        tracing::debug!(channel, "posting deploy changes");
        self.call("chat.postMessage", &post_message_payload(channel, text, self.as_user))
    }
}

fn post_message_payload(channel: &str, text: &str, as_user: bool) -> Value {
    json!({
        "channel": channel,
        "text": text,
        "as_user": as_user,
    })
}
