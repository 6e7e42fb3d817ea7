use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "supply-sim.toml";
const GATEWAY_URL_ENV: &str = "A2A_GATEWAY_URL";

const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_CHANNEL: &str = "#supply-chain-alerts";
const DEFAULT_SCENARIO: &str = "high";

/// Harness configuration; every environment-specific value lives here
/// rather than in the library crates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Base URL of the agent-orchestration gateway.
    pub gateway_url: String,
    /// Slack incoming-webhook URL for the stakeholder notifier.
    pub webhook_url: Option<String>,
    /// Channel the downstream notification lands in.
    pub channel_name: String,
    /// Scenario fired when none is given on the command line.
    pub default_scenario: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            webhook_url: None,
            channel_name: DEFAULT_CHANNEL.to_string(),
            default_scenario: DEFAULT_SCENARIO.to_string(),
        }
    }
}

impl SimConfig {
    /// Load `supply-sim.toml` from the working directory if present, then
    /// apply environment overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", CONFIG_FILE, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        if let Ok(url) = std::env::var(GATEWAY_URL_ENV) {
            config.gateway_url = url;
        }
        if let Ok(url) = std::env::var(slack::WEBHOOK_URL_ENV) {
            config.webhook_url = Some(url);
        }

        debug!(
            "Gateway: {}, Slack webhook configured: {}",
            config.gateway_url,
            config.webhook_url.is_some()
        );
        config
    }
}
