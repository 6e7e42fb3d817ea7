//! Stakeholder notifier for the supply-chain alerts channel.
//!
//! Formats an [`supply_core::AlertNotification`] into a Block Kit message
//! and POSTs it to a Slack incoming webhook. All failures come back as a
//! structured [`NotificationResult`], never as a fault.

pub mod blocks;
pub mod client;
pub mod error;

pub use blocks::{
    action_items_text, build_payload, stakeholders_text, Block, SlackPayload, TextObject,
};
pub use client::{
    BlockingSlackNotifier, NotificationResult, NotifierConfig, SlackNotifier, WEBHOOK_URL_ENV,
};
pub use error::{Result, SlackError};
