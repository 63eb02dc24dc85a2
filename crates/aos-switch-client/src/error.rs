// Error types for SwitchClient

/// Errors that can occur while talking to a switch
#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    #[error("{0}")]
    AuthFailed(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("CLI response carried no result_base64_encoded field")]
    MissingResult,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SwitchError>;
