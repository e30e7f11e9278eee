mod app;
mod chat;
mod config;
mod error;
mod gate;
mod hub;
mod registry;
mod relay;
mod roster;
mod signaling;

pub use app::*;
pub use chat::*;
pub use config::*;
pub use error::*;
pub use gate::*;
pub use hub::*;
pub use registry::*;
pub use relay::*;
pub use roster::*;
pub use signaling::*;
