//! Pazmon - Turn-Based Puzzle-Battle Engine
//!
//! The player rearranges a 14-slot row of elemental gems to form runs of
//! three or more identical adjacent gems. Runs resolve into elemental
//! attacks or heals against the active monster, which counter-attacks with
//! status effects (stun, attack-down).
//!
//! This crate is the match-resolution and battle-state engine only. It is
//! consumed by an external presentation layer that submits swap/skill
//! requests and renders read-only snapshots; no rendering, input handling,
//! or persistence lives here.

pub mod combat;
pub mod core;
pub mod roster;
pub mod simulator;
pub mod skills;

pub use crate::combat::types::{Ally, Monster, Party, Status};
pub use crate::core::battle::{
    BattleEngine, BattleOutcome, BattleSnapshot, CounterEvent, RejectReason, RunEvent, TurnResult,
};
pub use crate::core::combat_math::RunEffect;
pub use crate::core::element::Element;
pub use crate::core::field::{Field, Run};
pub use crate::core::FIELD_SIZE;
pub use crate::skills::{Debuff, Skill, SkillDamage, SkillOutcome};
