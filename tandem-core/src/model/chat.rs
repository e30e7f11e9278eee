use crate::model::peer::ConnectionId;
use serde::{Deserialize, Serialize};

/// An entry of the chat log. Immutable once appended.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub sequence_id: u64,
    pub content: String,
    pub author_id: ConnectionId,
}

/// The shape a chat message takes on the wire when it is delivered.
#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatDelivery {
    pub content: String,
    pub sequence_id: u64,
    pub from: ConnectionId,
}

impl From<&ChatMessage> for ChatDelivery {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            content: msg.content.clone(),
            sequence_id: msg.sequence_id,
            from: msg.author_id,
        }
    }
}
