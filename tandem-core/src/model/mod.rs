mod chat;
mod peer;
mod signaling;

pub use chat::{ChatDelivery, ChatMessage};
pub use peer::{ConnectionId, Peer};
pub use signaling::{ClientSignal, ServerSignal};
