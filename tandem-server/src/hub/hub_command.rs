use serde_json::Value;
use tandem_core::{ClientSignal, ConnectionId, Peer};

/// Events fed into the hub by the WebSocket layer.
#[derive(Debug)]
pub enum HubCommand {
    /// The connection passed the identity gate.
    Admit { peer: Peer },

    Offer {
        from: ConnectionId,
        to: ConnectionId,
        offer: Value,
    },

    Answer {
        from: ConnectionId,
        to: ConnectionId,
        answer: Value,
    },

    Chat {
        from: ConnectionId,
        message: String,
        to: Option<ConnectionId>,
    },

    /// The socket closed; always the last command for a connection.
    Disconnect { id: ConnectionId },
}

impl HubCommand {
    pub fn from_signal(from: ConnectionId, signal: ClientSignal) -> Self {
        match signal {
            ClientSignal::Offer { offer, to } => HubCommand::Offer { from, to, offer },
            ClientSignal::Answer { answer, to } => HubCommand::Answer { from, to, answer },
            ClientSignal::SendText { message, to } => HubCommand::Chat { from, message, to },
        }
    }
}
