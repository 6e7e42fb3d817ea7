use supply_core::DelayScenario;

use crate::error::Result;

/// Build the natural-language prompt the orchestrator receives.
///
/// Embeds the full scenario as pretty-printed JSON so downstream agents can
/// parse it back out of the message text.
pub fn build_prompt(scenario: &DelayScenario) -> Result<String> {
    let details = serde_json::to_string_pretty(scenario)?;
    Ok(format!(
        "A shipment delay has occurred with the following details:\n{}\n\nPlease analyze this delay, assess inventory impact, and send stakeholder notifications.",
        details
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use supply_core::scenario_by_name;

    #[test]
    fn test_prompt_contains_scenario_details() {
        let scenario = scenario_by_name("high").unwrap();
        let prompt = build_prompt(&scenario).unwrap();

        assert!(prompt.contains("SH-2026-001"));
        for sku in &scenario.delayed_skus {
            assert!(prompt.contains(sku.as_str()), "missing {}", sku);
        }
        assert!(prompt.starts_with("A shipment delay has occurred"));
        assert!(prompt.ends_with("send stakeholder notifications."));
    }

    #[test]
    fn test_prompt_embeds_tier_label() {
        let scenario = scenario_by_name("medium").unwrap();
        let prompt = build_prompt(&scenario).unwrap();
        assert!(prompt.contains("\"STANDARD\""));
    }
}
