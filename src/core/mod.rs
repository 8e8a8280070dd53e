//! Engine core: element model, token field, combat math, turn resolution.

pub mod battle;
pub mod combat_math;
pub mod constants;
pub mod element;
pub mod field;

pub use constants::*;
