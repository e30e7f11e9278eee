mod directed_relay;

pub use directed_relay::*;
