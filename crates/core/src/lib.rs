//! Domain types for the supply-chain notification harness.
//!
//! This crate holds the shipment delay scenarios and stakeholder alert
//! model shared by the gateway publisher and the Slack notifier.

mod domain;

pub use domain::alert::{AlertNotification, Severity, DEFAULT_GLYPH};
pub use domain::scenario::{
    builtin_scenarios, scenario_by_name, scenario_names, CustomerTier, DelayScenario,
};
