use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RPC method for submitting a message to the gateway.
pub const METHOD_MESSAGE_SEND: &str = "message/send";

/// Agent the simulator targets unless overridden.
pub const DEFAULT_AGENT_NAME: &str = "supply_chain_orchestrator";

/// Role of a message author. The simulator only ever speaks as the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// JSON-RPC 2.0 request wrapping a message for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSendRequest {
    pub jsonrpc: String,
    pub id: Uuid,
    pub method: String,
    pub params: MessageSendParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSendParams {
    pub message: A2aMessage,
    pub configuration: MessageSendConfiguration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct A2aMessage {
    pub role: Role,
    pub parts: Vec<Part>,
    #[serde(rename = "messageId")]
    pub message_id: Uuid,
    pub metadata: MessageMetadata,
}

/// Routing metadata attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageMetadata {
    pub agent_name: String,
}

/// One content part of an A2A message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Part {
    Text { text: String },
}

/// Delivery options for a send request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSendConfiguration {
    pub accepted_output_modes: Vec<String>,
    pub blocking: bool,
}

impl MessageSendRequest {
    /// Wrap a user prompt in a fresh non-blocking send targeted at `agent_name`.
    ///
    /// Both the request id and the message id are new UUIDs; the request id
    /// doubles as the correlation id for the gateway's task log.
    pub fn user_text(prompt: impl Into<String>, agent_name: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id: Uuid::new_v4(),
            method: METHOD_MESSAGE_SEND.to_string(),
            params: MessageSendParams {
                message: A2aMessage {
                    role: Role::User,
                    parts: vec![Part::Text {
                        text: prompt.into(),
                    }],
                    message_id: Uuid::new_v4(),
                    metadata: MessageMetadata {
                        agent_name: agent_name.into(),
                    },
                },
                configuration: MessageSendConfiguration {
                    accepted_output_modes: vec!["text".to_string()],
                    blocking: false,
                },
            },
        }
    }
}
