//! Shared combat math for run resolution and monster attacks.
//!
//! These functions compute jittered damage/heal amounts from base stats,
//! the elemental coefficient, and combo scaling. Both the battle engine and
//! the simulator use them, so results always match real gameplay.

use rand::Rng;

use super::constants::{COMBO_BASE, HEAL_BASE, JITTER_RATIO, MIN_RUN_LENGTH};
use super::element::{advantage_multiplier, Element};
use crate::combat::types::{Monster, Party};

/// Outcome of resolving one gem run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RunEffect {
    /// Damage dealt to the monster.
    Damage(u32),
    /// Hp restored to the party pool (Life runs deal no damage).
    Heal(u32),
    /// No ally carries the matched affinity; nothing happened.
    NoAffinity,
}

impl RunEffect {
    pub fn damage(self) -> u32 {
        match self {
            RunEffect::Damage(dmg) => dmg,
            _ => 0,
        }
    }
}

/// Randomize `value` by a uniform factor in `[1 - ratio, 1 + ratio]`,
/// rounding to the nearest integer. Always at least 1, even for tiny inputs.
pub fn jitter(value: f64, ratio: f64, rng: &mut impl Rng) -> u32 {
    let factor = rng.gen_range(1.0 - ratio..=1.0 + ratio);
    ((value * factor).round() as u32).max(1)
}

/// Combo scaling: `1.5 ^ ((run_length - 3) + combo)`.
///
/// `combo` starts at 1 for the first run resolved in a turn, so longer runs
/// and later combos in the same turn multiply geometrically.
pub fn combo_multiplier(run_length: usize, combo: u32) -> f64 {
    COMBO_BASE.powi((run_length as i32 - MIN_RUN_LENGTH as i32) + combo as i32)
}

/// Resolve one gem run against the battle state.
///
/// Life runs heal the party pool by `jitter(20 * multiplier)`. Any other
/// element attacks through the ally of matching affinity:
/// `base = max(1, ally.attack - monster.defense)` scaled by the elemental
/// coefficient and the combo multiplier. Without a matching ally the run
/// fizzles.
pub fn resolve_gem_run(
    element: Element,
    run_length: usize,
    combo: u32,
    party: &mut Party,
    monster: &mut Monster,
    rng: &mut impl Rng,
) -> RunEffect {
    let multiplier = combo_multiplier(run_length, combo);

    if element == Element::Life {
        let heal = jitter(HEAL_BASE * multiplier, JITTER_RATIO, rng);
        party.heal(heal);
        return RunEffect::Heal(heal);
    }

    let Some(ally) = party.ally_of(element) else {
        return RunEffect::NoAffinity;
    };

    let base = ally.attack.saturating_sub(monster.defense).max(1);
    let scaled = base as f64 * advantage_multiplier(element, monster.element) * multiplier;
    let dmg = jitter(scaled, JITTER_RATIO, rng);
    monster.take_damage(dmg);
    RunEffect::Damage(dmg)
}

/// Roll the monster's attack damage without applying it. The attack-down
/// counter path scales this externally before it lands.
pub fn enemy_attack_damage(party: &Party, monster: &Monster, rng: &mut impl Rng) -> u32 {
    let base = monster.attack.saturating_sub(party.average_defense).max(1);
    jitter(base as f64, JITTER_RATIO, rng)
}

/// Roll and apply a full monster attack against the party pool.
pub fn resolve_enemy_attack(party: &mut Party, monster: &Monster, rng: &mut impl Rng) -> u32 {
    let dmg = enemy_attack_damage(party, monster, rng);
    party.take_damage(dmg);
    dmg
}
