use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};
use uuid::Uuid;

use supply_core::DelayScenario;

use crate::envelope::{MessageSendRequest, DEFAULT_AGENT_NAME};
use crate::error::{A2aError, Result};
use crate::prompt::build_prompt;

const SEND_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for the gateway's `message:send` endpoint.
pub struct A2aClient {
    base_url: String,
    agent_name: String,
    client: Client,
}

/// Acknowledgement returned when the gateway accepts an event.
///
/// Acceptance means the request was taken, not that the downstream pipeline
/// completed; the gateway runs the rest asynchronously.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub request_id: Uuid,
    pub status: u16,
}

impl A2aClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            client,
        }
    }

    pub fn with_agent(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = agent_name.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Publish a delay scenario as a non-blocking A2A message.
    pub async fn publish_delay_event(&self, scenario: &DelayScenario) -> Result<Dispatch> {
        let prompt = build_prompt(scenario)?;
        self.send_prompt(&prompt).await
    }

    /// Send an already-built prompt.
    ///
    /// Split out so callers can keep the prompt around for the manual
    /// fallback path when dispatch fails.
    pub async fn send_prompt(&self, prompt: &str) -> Result<Dispatch> {
        let request = MessageSendRequest::user_text(prompt, &self.agent_name);
        let request_id = request.id;

        debug!("Publishing A2A message {} to {}", request_id, self.base_url);

        let response = self
            .client
            .post(format!("{}/api/v1/message:send", self.base_url))
            .header("Content-Type", "application/json")
            .timeout(SEND_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        match status {
            200 | 201 | 202 => {
                info!("Gateway accepted message {} with status {}", request_id, status);
                Ok(Dispatch { request_id, status })
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                warn!("Gateway rejected message {}: status {}", request_id, status);
                Err(A2aError::Rejected {
                    status,
                    body: truncate(&body, MAX_ERROR_BODY_CHARS),
                })
            }
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
