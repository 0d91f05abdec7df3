use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("failed to build HTTP client: {0}")]
    HttpClientBuild(String),

    #[error("chat request failed: {0}")]
    Transport(String),

    #[error("chat endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed chat reply: {0}")]
    MalformedReply(String),
}

pub type Result<T> = std::result::Result<T, ChatError>;
