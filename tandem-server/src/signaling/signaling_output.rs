use async_trait::async_trait;
use tandem_core::{ConnectionId, ServerSignal};

/// Whatever carries hub output to the clients. Delivery is fire-and-forget:
/// a message to a connection that has gone away is simply lost.
#[async_trait]
pub trait SignalingOutput: Send + Sync {
    async fn deliver(&self, to: ConnectionId, signal: ServerSignal);
}
