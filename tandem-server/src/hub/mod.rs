mod hub;
mod hub_command;
mod hub_state;
mod outbound;

pub use hub::*;
pub use hub_command::*;
pub use hub_state::*;
pub use outbound::*;
