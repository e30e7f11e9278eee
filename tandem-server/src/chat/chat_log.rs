use tandem_core::{ChatMessage, ConnectionId};

/// Append-only, in-memory chat history. Lives as long as the process.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_sequence_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the message and returns the sequence id it was given.
    pub fn append(&mut self, content: impl Into<String>, author_id: ConnectionId) -> u64 {
        let sequence_id = self.next_sequence_id;
        self.next_sequence_id += 1;

        self.messages.push(ChatMessage {
            sequence_id,
            content: content.into(),
            author_id,
        });
        sequence_id
    }

    pub fn get(&self, sequence_id: u64) -> Option<&ChatMessage> {
        self.messages
            .binary_search_by_key(&sequence_id, |m| m.sequence_id)
            .ok()
            .map(|idx| &self.messages[idx])
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
