mod identity_gate;

pub use identity_gate::*;
