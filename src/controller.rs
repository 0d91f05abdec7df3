use crate::client::{ChatBackend, ChatClient};
use crate::conversation::store::ConversationStore;
use crate::conversation::{display_time, Message, Sender};
use crate::error::ChatError;
use crate::event::AppEvent;
use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

const DIAGNOSTICS_CAPACITY: usize = 200;

struct InFlight {
    request_id: u64,
    abort: AbortHandle,
}

/// Session state for one chat view: transcript, draft and the single
/// outstanding request. Dropping it aborts that request.
pub struct ChatController {
    client: ChatClient,
    rx: Receiver<AppEvent>,
    conversation: ConversationStore,
    draft: String,
    in_flight: Option<InFlight>,
    next_request_id: u64,
    last_error: Option<ChatError>,
    diagnostics_log: VecDeque<String>,
}

impl ChatController {
    pub fn new(backend: Arc<dyn ChatBackend>, runtime_handle: Handle) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client: ChatClient::new(backend, runtime_handle, tx),
            rx,
            conversation: ConversationStore::new(),
            draft: String::new(),
            in_flight: None,
            next_request_id: 1,
            last_error: None,
            diagnostics_log: VecDeque::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_error(&self) -> Option<&ChatError> {
        self.last_error.as_ref()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        self.diagnostics_log.iter().map(String::as_str)
    }

    /// Returns whether a request was issued.
    pub fn submit(&mut self) -> bool {
        if self.is_pending() {
            debug!("submit ignored while a reply is pending");
            return false;
        }

        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return false;
        }

        let id = self.conversation.next_id();
        self.conversation.append(Message::new(id, text.clone(), Sender::User));
        self.draft.clear();

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        let abort = self.client.send(request_id, text);
        self.in_flight = Some(InFlight { request_id, abort });

        info!(request_id, message_id = id, "chat request sent");
        self.log_diagnostic(format!("request {request_id} sent"));
        true
    }

    /// Applies every settlement already waiting on the channel. Returns the
    /// number of events applied.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    self.apply_event(event);
                    applied += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    fn apply_event(&mut self, event: AppEvent) {
        let request_id = event.request_id();
        let current = self.in_flight.as_ref().map(|in_flight| in_flight.request_id);
        if current != Some(request_id) {
            debug!(request_id, ?current, "discarding stale chat settlement");
            return;
        }
        self.in_flight = None;

        match event {
            AppEvent::ReplyReceived { text, .. } => {
                let id = self.conversation.next_id();
                self.conversation.append(Message::new(id, text, Sender::Bot));
                self.last_error = None;
                info!(request_id, message_id = id, "chat reply received");
                self.log_diagnostic(format!("request {request_id} answered"));
            }
            AppEvent::SendFailed { error, .. } => {
                warn!(request_id, %error, "error sending message");
                self.log_diagnostic(format!("request {request_id} failed: {error}"));
                self.last_error = Some(error);
            }
        }
    }

    fn log_diagnostic(&mut self, message: impl Into<String>) {
        if self.diagnostics_log.len() == DIAGNOSTICS_CAPACITY {
            self.diagnostics_log.pop_front();
        }
        self.diagnostics_log
            .push_back(format!("[{}] {}", display_time(), message.into()));
    }

    #[cfg(test)]
    pub fn wait_for_settlement(&mut self, timeout: std::time::Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply_event(event);
                true
            }
            Err(_) => false,
        }
    }
}

impl Drop for ChatController {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort.abort();
        }
    }
}
