//! Skill definitions and execution.
//!
//! A skill is an immutable definition; executing it mutates the party and
//! monster and returns a structured [`SkillOutcome`] for the presentation
//! layer. Effects apply in a fixed order: damage, heal, attack-down, stun.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::types::{Monster, Party, Status};

/// How a skill computes its damage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SkillDamage {
    /// `base + floor(monster_hp * fraction)` - flat plus percent-of-current-hp.
    Fixed { base: u32, fraction: f64 },
    /// Uniform random integer in `[min, max]`.
    Range { min: u32, max: u32 },
}

/// Attack-down debuff carried by a skill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Debuff {
    /// Fraction of the monster's attack that still lands (0.5 = half damage).
    pub ratio: f64,
    pub turns: u32,
}

/// Immutable skill definition. Any combination of effects may be absent;
/// a skill with none of them executes as a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub need_sp: u32,
    pub damage: Option<SkillDamage>,
    pub heal: Option<u32>,
    pub debuff: Option<Debuff>,
    pub stun_turns: Option<u32>,
}

/// Which effects fired and their magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillOutcome {
    pub name: String,
    pub damage: Option<u32>,
    pub heal: Option<u32>,
    pub attack_down: Option<Debuff>,
    pub stun_turns: Option<u32>,
}

impl SkillOutcome {
    /// Human-readable one-line summary for logs and message areas.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("[{}]", self.name)];
        if let Some(dmg) = self.damage {
            parts.push(format!("{} damage!", dmg));
        }
        if let Some(heal) = self.heal {
            parts.push(format!("{} hp restored!", heal));
        }
        if let Some(debuff) = self.attack_down {
            parts.push(format!(
                "attack down x{} for {} turns!",
                debuff.ratio, debuff.turns
            ));
        }
        if let Some(turns) = self.stun_turns {
            parts.push(format!("stunned for {} turns!", turns));
        }
        if parts.len() == 1 {
            parts.push("no effect".to_string());
        }
        parts.join(" ")
    }
}

/// Execute a skill against the party/monster pair.
///
/// Effects apply in order: damage (monster hp floored at 0), heal (party hp
/// clamped to max), attack-down (overwrites any prior status), stun
/// (overwrites). Status effects only apply for a positive turn count.
/// Malformed skills with no effects defined degrade to a no-effect outcome.
pub fn execute(
    skill: &Skill,
    party: &mut Party,
    monster: &mut Monster,
    rng: &mut impl Rng,
) -> SkillOutcome {
    let damage = skill.damage.map(|kind| {
        let dmg = match kind {
            SkillDamage::Fixed { base, fraction } => {
                base + (monster.hp as f64 * fraction).floor() as u32
            }
            SkillDamage::Range { min, max } => rng.gen_range(min..=max),
        };
        monster.take_damage(dmg);
        dmg
    });

    let heal = skill.heal.map(|amount| {
        party.heal(amount);
        amount
    });

    let attack_down = skill.debuff.filter(|d| d.turns > 0).map(|debuff| {
        monster.status = Status::AttackDown {
            turns: debuff.turns,
            ratio: debuff.ratio,
        };
        debuff
    });

    let stun_turns = skill.stun_turns.filter(|&turns| turns > 0).map(|turns| {
        monster.status = Status::Stun { turns };
        turns
    });

    SkillOutcome {
        name: skill.name.clone(),
        damage,
        heal,
        attack_down,
        stun_turns,
    }
}
