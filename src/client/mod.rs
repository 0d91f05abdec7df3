use crate::error::Result;
use crate::event::AppEvent;
use async_trait::async_trait;
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::debug;

pub mod http;

pub use http::HttpChatBackend;

/// A single-attempt request/response exchange with the chat service.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct ChatClient {
    backend: Arc<dyn ChatBackend>,
    runtime_handle: Handle,
    tx: mpsc::Sender<AppEvent>,
}

impl ChatClient {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        runtime_handle: Handle,
        tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            backend,
            runtime_handle,
            tx,
        }
    }

    /// Spawns the request and reports its outcome as exactly one `AppEvent`,
    /// unless the returned handle is aborted first.
    pub fn send(&self, request_id: u64, text: String) -> AbortHandle {
        let backend = Arc::clone(&self.backend);
        let tx = self.tx.clone();

        let task = self.runtime_handle.spawn(async move {
            let event = match backend.send_message(&text).await {
                Ok(reply) => AppEvent::ReplyReceived {
                    request_id,
                    text: reply,
                },
                Err(error) => AppEvent::SendFailed { request_id, error },
            };

            if tx.send(event).is_err() {
                debug!(request_id, "chat view is gone; dropping settlement");
            }
        });

        task.abort_handle()
    }
}
