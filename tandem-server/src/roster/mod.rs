mod roster_broadcaster;

pub use roster_broadcaster::*;
