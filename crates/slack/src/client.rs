use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use supply_core::AlertNotification;

use crate::blocks::build_payload;
use crate::error::{Result, SlackError};

/// Environment variable consulted when no webhook URL is configured.
pub const WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";

const POST_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CHANNEL: &str = "#supply-chain-alerts";

/// Webhook configuration for the notifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Explicit webhook URL; falls back to [`WEBHOOK_URL_ENV`] when unset.
    pub webhook_url: Option<String>,
    /// Channel name echoed in success results.
    pub channel_name: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            channel_name: DEFAULT_CHANNEL.to_string(),
        }
    }
}

impl NotifierConfig {
    fn resolve_webhook(&self) -> Result<String> {
        match &self.webhook_url {
            Some(url) => Ok(url.clone()),
            None => std::env::var(WEBHOOK_URL_ENV).map_err(|_| SlackError::MissingWebhook),
        }
    }
}

/// Outcome of a notification attempt.
///
/// Keeps the webhook tool's wire shape: a `status` tag plus either the
/// delivery receipt or a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NotificationResult {
    Success {
        channel: String,
        shipment_id: String,
        severity: String,
        timestamp: DateTime<Utc>,
    },
    Error {
        message: String,
    },
}

impl NotificationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Posts stakeholder alerts to a Slack incoming webhook.
pub struct SlackNotifier {
    config: NotifierConfig,
    client: Client,
}

impl SlackNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn with_client(config: NotifierConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// Format and deliver an alert.
    ///
    /// Every failure, including missing configuration, is folded into
    /// [`NotificationResult::Error`]; this never surfaces a fault to the
    /// caller.
    pub async fn notify_stakeholders(&self, alert: &AlertNotification) -> NotificationResult {
        match self.dispatch(alert).await {
            Ok(result) => result,
            Err(e) => {
                error!("Notification for {} failed: {}", alert.shipment_id, e);
                NotificationResult::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    async fn dispatch(&self, alert: &AlertNotification) -> Result<NotificationResult> {
        let webhook_url = self.config.resolve_webhook()?;

        info!("Sending notification for shipment {}", alert.shipment_id);

        let payload = build_payload(alert, Utc::now());

        let response = self
            .client
            .post(&webhook_url)
            .timeout(POST_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status == 200 {
            info!(
                "Notification for {} delivered to {}",
                alert.shipment_id, self.config.channel_name
            );
            Ok(NotificationResult::Success {
                channel: self.config.channel_name.clone(),
                shipment_id: alert.shipment_id.clone(),
                severity: alert.severity.clone(),
                timestamp: Utc::now(),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(SlackError::Rejected { status, body })
        }
    }
}

/// Synchronous adapter over [`SlackNotifier`].
///
/// Owns a current-thread runtime so both variants share one dispatch path
/// instead of maintaining a second blocking implementation.
pub struct BlockingSlackNotifier {
    inner: SlackNotifier,
    runtime: tokio::runtime::Runtime,
}

impl BlockingSlackNotifier {
    pub fn new(config: NotifierConfig) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            inner: SlackNotifier::new(config),
            runtime,
        })
    }

    pub fn notify_stakeholders(&self, alert: &AlertNotification) -> NotificationResult {
        self.runtime.block_on(self.inner.notify_stakeholders(alert))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Serializes tests that touch SLACK_WEBHOOK_URL.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn alert() -> AlertNotification {
        AlertNotification::new("SH-2026-001", "HIGH", "Shipment Delayed", "14 hours late")
            .with_stakeholders(vec!["Logistics".to_string()])
            .with_action_items(vec!["Reroute via Dallas".to_string()])
    }

    fn config_with(url: &str) -> NotifierConfig {
        NotifierConfig {
            webhook_url: Some(url.to_string()),
            ..NotifierConfig::default()
        }
    }

    #[tokio::test]
    async fn test_success_echoes_shipment_and_channel() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(serde_json::json!({
                "blocks": [{"type": "header"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = SlackNotifier::new(config_with(&server.uri()));
        let result = notifier.notify_stakeholders(&alert()).await;
        match result {
            NotificationResult::Success {
                channel,
                shipment_id,
                severity,
                ..
            } => {
                assert_eq!(shipment_id, "SH-2026-001");
                assert_eq!(severity, "HIGH");
                assert_eq!(channel, "#supply-chain-alerts");
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejection_message_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let notifier = SlackNotifier::new(config_with(&server.uri()));
        let result = notifier.notify_stakeholders(&alert()).await;
        match result {
            NotificationResult::Error { message } => {
                assert!(message.contains("500"), "message: {}", message);
                assert!(message.contains("oops"), "message: {}", message);
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_webhook_makes_no_request() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(WEBHOOK_URL_ENV);

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let notifier = SlackNotifier::new(NotifierConfig::default());
        let result = notifier.notify_stakeholders(&alert()).await;
        match result {
            NotificationResult::Error { message } => {
                assert!(message.contains("webhook"), "message: {}", message);
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_env_var_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let result = {
            let _lock = ENV_MUTEX.lock().unwrap();
            std::env::set_var(WEBHOOK_URL_ENV, server.uri());
            let notifier = SlackNotifier::new(NotifierConfig::default());
            let result = notifier.notify_stakeholders(&alert()).await;
            std::env::remove_var(WEBHOOK_URL_ENV);
            result
        };
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_transport_error_becomes_error_result() {
        // Nothing listens on port 1.
        let notifier = SlackNotifier::new(config_with("http://127.0.0.1:1"));
        let result = notifier.notify_stakeholders(&alert()).await;
        assert!(!result.is_success());
    }

    #[test]
    fn test_blocking_adapter_delivers() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&server)
                .await;
            server
        });

        let notifier = BlockingSlackNotifier::new(config_with(&server.uri())).unwrap();
        let result = notifier.notify_stakeholders(&alert());
        assert!(result.is_success());
    }

    #[test]
    fn test_result_serializes_with_status_tag() {
        let success = NotificationResult::Success {
            channel: "#supply-chain-alerts".to_string(),
            shipment_id: "SH-2026-001".to_string(),
            severity: "HIGH".to_string(),
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&success).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["shipment_id"], "SH-2026-001");

        let error = NotificationResult::Error {
            message: "No Slack webhook URL configured".to_string(),
        };
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["status"], "error");
    }
}
