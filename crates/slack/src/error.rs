use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("No Slack webhook URL configured")]
    MissingWebhook,

    #[error("Slack returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SlackError>;
