use serde::{Deserialize, Serialize};

/// Glyph shown for severity labels outside the known four.
pub const DEFAULT_GLYPH: &str = "⚠️";

/// Coarse urgency classification for a stakeholder alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Med,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Med => "MED",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Case-insensitive parse of a severity label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LOW" => Some(Self::Low),
            "MED" => Some(Self::Med),
            "HIGH" => Some(Self::High),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Low => "🟡",
            Self::Med => "🟠",
            Self::High => "🔴",
            Self::Critical => "🚨",
        }
    }

    /// Glyph for a free-form severity label.
    ///
    /// Labels that do not match a known severity get [`DEFAULT_GLYPH`].
    pub fn glyph_for(label: &str) -> &'static str {
        Self::parse(label).map(|s| s.glyph()).unwrap_or(DEFAULT_GLYPH)
    }
}

/// A stakeholder alert about a delayed shipment.
///
/// The severity is kept as the caller-supplied label so unrecognized values
/// still render, with the fallback glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertNotification {
    pub shipment_id: String,
    pub severity: String,
    pub subject: String,
    pub message: String,
    pub stakeholders_notified: Vec<String>,
    pub action_items: Vec<String>,
}

impl AlertNotification {
    pub fn new(
        shipment_id: impl Into<String>,
        severity: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            shipment_id: shipment_id.into(),
            severity: severity.into(),
            subject: subject.into(),
            message: message.into(),
            stakeholders_notified: Vec::new(),
            action_items: Vec::new(),
        }
    }

    pub fn with_stakeholders(mut self, stakeholders: Vec<String>) -> Self {
        self.stakeholders_notified = stakeholders;
        self
    }

    pub fn with_action_items(mut self, action_items: Vec<String>) -> Self {
        self.action_items = action_items;
        self
    }
}
