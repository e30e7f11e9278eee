use tandem_core::{ConnectionId, ServerSignal};

/// One message the hub wants delivered to one connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub to: ConnectionId,
    pub signal: ServerSignal,
}
