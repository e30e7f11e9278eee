use crate::model::chat::ChatDelivery;
use crate::model::peer::{ConnectionId, Peer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Frames a browser sends after its handshake was accepted.
///
/// Session descriptions are carried as raw JSON and never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientSignal {
    Offer {
        offer: Value,
        to: ConnectionId,
    },
    Answer {
        answer: Value,
        to: ConnectionId,
    },
    SendText {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<ConnectionId>,
    },
}

/// Frames the server pushes to a browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerSignal {
    /// Everyone who was online before the receiver joined.
    RosterSnapshot { users: Vec<Peer> },
    /// The identity the receiver was admitted with.
    SelfIdentity { id: ConnectionId, name: String },
    RosterAdd { users: Vec<Peer> },
    RosterRemove { id: ConnectionId },
    OfferMade { offer: Value, from: ConnectionId },
    AnswerMade { answer: Value, from: ConnectionId },
    TextDelivered { message: ChatDelivery },
}

impl ServerSignal {
    /// Event name as it appears on the wire.
    pub fn event_name(&self) -> &'static str {
        match self {
            ServerSignal::RosterSnapshot { .. } => "roster-snapshot",
            ServerSignal::SelfIdentity { .. } => "self-identity",
            ServerSignal::RosterAdd { .. } => "roster-add",
            ServerSignal::RosterRemove { .. } => "roster-remove",
            ServerSignal::OfferMade { .. } => "offer-made",
            ServerSignal::AnswerMade { .. } => "answer-made",
            ServerSignal::TextDelivered { .. } => "text-delivered",
        }
    }
}
