use crate::error::ChatError;

/// Settlement of one chat request, delivered to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ReplyReceived { request_id: u64, text: String },
    SendFailed { request_id: u64, error: ChatError },
}

impl AppEvent {
    pub fn request_id(&self) -> u64 {
        match self {
            Self::ReplyReceived { request_id, .. } | Self::SendFailed { request_id, .. } => {
                *request_id
            }
        }
    }
}
