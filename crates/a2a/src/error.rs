use thiserror::Error;

#[derive(Debug, Error)]
pub enum A2aError {
    #[error("Gateway returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Connection failed: {0}")]
    Unreachable(String),

    #[error("Failed to encode envelope: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for A2aError {
    fn from(err: reqwest::Error) -> Self {
        // Anything the transport reports (refused, DNS, timeout) is a
        // reachability problem from the simulator's point of view.
        A2aError::Unreachable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, A2aError>;
