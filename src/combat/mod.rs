//! Battle-state value types: allies, party, monsters, status effects.

pub mod types;

pub use types::*;
