//! A2A protocol client for the agent-orchestration gateway.
//!
//! Builds the shipment-delay prompt, wraps it in a JSON-RPC 2.0 envelope and
//! POSTs it to the gateway's `message:send` endpoint.

pub mod client;
pub mod envelope;
pub mod error;
pub mod prompt;

pub use client::{A2aClient, Dispatch};
pub use envelope::{
    A2aMessage, MessageMetadata, MessageSendConfiguration, MessageSendParams, MessageSendRequest,
    Part, Role, DEFAULT_AGENT_NAME,
};
pub use error::{A2aError, Result};
pub use prompt::build_prompt;
