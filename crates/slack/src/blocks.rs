use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use supply_core::{AlertNotification, Severity};

/// Footer attribution shown under every alert.
const FOOTER_TEXT: &str =
    "🤖 Automated alert from *Solace Agent Mesh* — Supply Chain Orchestration System";

/// One text object in a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// A Block Kit layout block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: TextObject,
    },
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<TextObject>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<TextObject>>,
    },
    Divider,
    Context {
        elements: Vec<TextObject>,
    },
}

impl Block {
    fn header(text: impl Into<String>) -> Self {
        Self::Header {
            text: TextObject::plain(text),
        }
    }

    fn section(text: TextObject) -> Self {
        Self::Section {
            text: Some(text),
            fields: None,
        }
    }

    fn fields(fields: Vec<TextObject>) -> Self {
        Self::Section {
            text: None,
            fields: Some(fields),
        }
    }

    fn context(text: impl Into<String>) -> Self {
        Self::Context {
            elements: vec![TextObject::mrkdwn(text)],
        }
    }
}

/// Complete incoming-webhook payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackPayload {
    pub blocks: Vec<Block>,
}

/// Render action items as a bulleted list.
pub fn action_items_text(action_items: &[String]) -> String {
    if action_items.is_empty() {
        "• No actions required".to_string()
    } else {
        action_items
            .iter()
            .map(|item| format!("• {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render the notified-stakeholders line.
pub fn stakeholders_text(stakeholders: &[String]) -> String {
    if stakeholders.is_empty() {
        "Operations".to_string()
    } else {
        stakeholders.join(", ")
    }
}

/// Build the six-block alert message for a notification.
///
/// Deterministic given the alert and timestamp: header, field grid, details,
/// action items, divider, footer context.
pub fn build_payload(alert: &AlertNotification, timestamp: DateTime<Utc>) -> SlackPayload {
    let glyph = Severity::glyph_for(&alert.severity);

    SlackPayload {
        blocks: vec![
            Block::header(format!("{} Supply Chain Alert: {}", glyph, alert.subject)),
            Block::fields(vec![
                TextObject::mrkdwn(format!("*Shipment ID:*\n{}", alert.shipment_id)),
                TextObject::mrkdwn(format!("*Severity:*\n{} {}", glyph, alert.severity)),
                TextObject::mrkdwn(format!(
                    "*Notified:*\n{}",
                    stakeholders_text(&alert.stakeholders_notified)
                )),
                TextObject::mrkdwn(format!(
                    "*Time:*\n{}",
                    timestamp.format("%Y-%m-%d %H:%M UTC")
                )),
            ]),
            Block::section(TextObject::mrkdwn(format!("*Details:*\n{}", alert.message))),
            Block::section(TextObject::mrkdwn(format!(
                "*Action Items:*\n{}",
                action_items_text(&alert.action_items)
            ))),
            Block::Divider,
            Block::context(FOOTER_TEXT),
        ],
    }
}
