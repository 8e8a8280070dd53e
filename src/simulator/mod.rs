//! Battle balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of full encounters headlessly to analyze:
//! - Win/defeat rates for the default party against the default roster
//! - Turns and combos needed to clear the dungeon
//! - Skill cast frequency and damage/heal throughput
//!
//! The simulator drives the real [`BattleEngine`](crate::BattleEngine), so
//! its numbers always match actual gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunStats};
