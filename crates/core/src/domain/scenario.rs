use serde::{Deserialize, Serialize};

/// Customer contract tier attached to a shipment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerTier {
    Premium,
    Standard,
}

impl CustomerTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Premium => "PREMIUM",
            Self::Standard => "STANDARD",
        }
    }
}

/// A simulated shipment delay event.
///
/// ETA fields are free-text timestamps; nothing downstream parses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayScenario {
    pub shipment_id: String,
    pub origin: String,
    pub destination: String,
    pub customer: String,
    pub customer_tier: CustomerTier,
    pub old_eta: String,
    pub new_eta: String,
    pub must_arrive_by: String,
    pub delay_hours: u32,
    pub delay_reason: String,
    pub delayed_skus: Vec<String>,
}

/// The fixed scenario set the simulator can fire, keyed by name.
pub fn builtin_scenarios() -> Vec<(&'static str, DelayScenario)> {
    vec![
        ("high", high_severity()),
        ("medium", medium_severity()),
    ]
}

/// Look up a built-in scenario by name.
pub fn scenario_by_name(name: &str) -> Option<DelayScenario> {
    builtin_scenarios()
        .into_iter()
        .find(|(n, _)| *n == name)
        .map(|(_, scenario)| scenario)
}

/// Names of the built-in scenarios, in registry order.
pub fn scenario_names() -> Vec<&'static str> {
    builtin_scenarios().into_iter().map(|(n, _)| n).collect()
}

fn high_severity() -> DelayScenario {
    DelayScenario {
        shipment_id: "SH-2026-001".to_string(),
        origin: "Houston, TX".to_string(),
        destination: "Chicago, IL".to_string(),
        customer: "Acme Corp".to_string(),
        customer_tier: CustomerTier::Premium,
        old_eta: "2026-02-19 08:00".to_string(),
        new_eta: "2026-02-19 22:00".to_string(),
        must_arrive_by: "2026-02-19 20:00".to_string(),
        delay_hours: 14,
        delay_reason: "Port congestion at Houston terminal".to_string(),
        delayed_skus: vec![
            "SKU-4421".to_string(),
            "SKU-8873".to_string(),
            "SKU-2291".to_string(),
        ],
    }
}

fn medium_severity() -> DelayScenario {
    DelayScenario {
        shipment_id: "SH-2026-002".to_string(),
        origin: "Los Angeles, CA".to_string(),
        destination: "Dallas, TX".to_string(),
        customer: "Beta Manufacturing".to_string(),
        customer_tier: CustomerTier::Standard,
        old_eta: "2026-02-20 10:00".to_string(),
        new_eta: "2026-02-20 16:00".to_string(),
        must_arrive_by: "2026-02-20 18:00".to_string(),
        delay_hours: 6,
        delay_reason: "Weather conditions on I-10".to_string(),
        delayed_skus: vec!["SKU-7732".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_names() {
        assert_eq!(scenario_names(), vec!["high", "medium"]);
    }

    #[test]
    fn test_scenario_by_name() {
        let scenario = scenario_by_name("high").unwrap();
        assert_eq!(scenario.shipment_id, "SH-2026-001");
        assert_eq!(scenario.customer_tier, CustomerTier::Premium);
        assert_eq!(scenario.delay_hours, 14);
        assert_eq!(scenario.delayed_skus.len(), 3);

        let scenario = scenario_by_name("medium").unwrap();
        assert_eq!(scenario.shipment_id, "SH-2026-002");
        assert_eq!(scenario.delayed_skus, vec!["SKU-7732"]);
    }

    #[test]
    fn test_scenario_by_name_unknown() {
        assert!(scenario_by_name("low").is_none());
    }

    #[test]
    fn test_tier_serializes_uppercase() {
        let json = serde_json::to_string(&CustomerTier::Premium).unwrap();
        assert_eq!(json, "\"PREMIUM\"");
    }

    #[test]
    fn test_scenario_serialization_field_names() {
        let scenario = scenario_by_name("high").unwrap();
        let value = serde_json::to_value(&scenario).unwrap();
        assert_eq!(value["shipment_id"], "SH-2026-001");
        assert_eq!(value["customer_tier"], "PREMIUM");
        assert_eq!(value["must_arrive_by"], "2026-02-19 20:00");
        assert_eq!(value["delayed_skus"][0], "SKU-4421");
    }
}
