//! Engine tuning constants.

// Token field
pub const FIELD_SIZE: usize = 14;
pub const MIN_RUN_LENGTH: usize = 3;

// Damage and healing
pub const JITTER_RATIO: f64 = 0.10;
pub const COMBO_BASE: f64 = 1.5;
pub const HEAL_BASE: f64 = 20.0;

// Elemental advantage cycle: Fire -> Wind -> Earth -> Water -> Fire
pub const ADVANTAGE_COEFF: f64 = 2.0;
pub const DISADVANTAGE_COEFF: f64 = 0.5;
pub const NEUTRAL_COEFF: f64 = 1.0;
