use crate::conversation::{now_millis, Message};

/// Append-only, insertion-ordered transcript for one session.
#[derive(Debug, Default)]
pub struct ConversationStore {
    messages: Vec<Message>,
    last_id: Option<u64>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids follow wall-clock milliseconds but never repeat or go backwards.
    pub fn next_id(&mut self) -> u64 {
        let candidate = now_millis();
        let id = match self.last_id {
            Some(last) if candidate <= last => last + 1,
            _ => candidate,
        };
        self.last_id = Some(id);
        id
    }

    pub fn append(&mut self, message: Message) {
        self.last_id = Some(self.last_id.map_or(message.id(), |last| last.max(message.id())));
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}
