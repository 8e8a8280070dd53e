//! Owned value structures for the battle state.
//!
//! The engine is instantiable multiple times: nothing here is global, and
//! every mutation goes through clamped helpers so hp always stays inside
//! `[0, max_hp]`.

use serde::{Deserialize, Serialize};

use crate::core::element::Element;
use crate::skills::Skill;

/// Monster status effect. At most one is active; a new application
/// overwrites the old one (no stacking).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Status {
    None,
    /// Outgoing attacks are scaled by `ratio` for `turns` counter-turns.
    AttackDown { turns: u32, ratio: f64 },
    /// The monster skips its counter-attack for `turns` counter-turns.
    Stun { turns: u32 },
}

impl Status {
    pub fn is_none(&self) -> bool {
        matches!(self, Status::None)
    }

    /// Consume one turn of the effect, clearing it when it runs out.
    /// Called once at the end of each counter-turn that consulted it.
    pub fn tick_down(&mut self) {
        *self = match *self {
            Status::None => Status::None,
            Status::AttackDown { turns, ratio } if turns > 1 => Status::AttackDown {
                turns: turns - 1,
                ratio,
            },
            Status::Stun { turns } if turns > 1 => Status::Stun { turns: turns - 1 },
            _ => Status::None,
        };
    }
}

/// A party member. Hp is carried per ally but battle damage and healing go
/// through the shared [`Party`] pool; the per-ally stats feed gem attacks
/// and skill charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ally {
    pub name: String,
    pub element: Element,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub skill: Option<Skill>,
    /// Accrued skill charge, clamped to the skill's `need_sp`.
    pub sp: u32,
}

impl Ally {
    pub fn new(
        name: impl Into<String>,
        element: Element,
        max_hp: u32,
        attack: u32,
        defense: u32,
        skill: Option<Skill>,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            hp: max_hp,
            max_hp,
            attack,
            defense,
            skill,
            sp: 0,
        }
    }

    /// Accrue skill charge, clamped to the skill cost. Allies without a
    /// skill accrue nothing.
    pub fn gain_sp(&mut self, amount: u32) {
        if let Some(skill) = &self.skill {
            self.sp = (self.sp + amount).min(skill.need_sp);
        }
    }

    /// Whether the ally has a skill and enough charge to cast it.
    pub fn skill_ready(&self) -> bool {
        self.skill.as_ref().is_some_and(|s| self.sp >= s.need_sp)
    }
}

/// The player party: a shared hp pool plus the ordered allies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub hp: u32,
    pub max_hp: u32,
    /// Average of the allies' defense, used against monster attacks.
    pub average_defense: u32,
    pub allies: Vec<Ally>,
}

impl Party {
    pub fn new(max_hp: u32, allies: Vec<Ally>) -> Self {
        let average_defense = if allies.is_empty() {
            0
        } else {
            allies.iter().map(|a| a.defense).sum::<u32>() / allies.len() as u32
        };
        Self {
            hp: max_hp,
            max_hp,
            average_defense,
            allies,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal(&mut self, amount: u32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// First ally whose affinity matches the element.
    pub fn ally_of(&self, element: Element) -> Option<&Ally> {
        self.allies.iter().find(|a| a.element == element)
    }
}

/// An enemy monster. One is active at a time; the roster is consumed in
/// fixed order and never revisited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub element: Element,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub status: Status,
}

impl Monster {
    pub fn new(
        name: impl Into<String>,
        element: Element,
        max_hp: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            name: name.into(),
            element,
            hp: max_hp,
            max_hp,
            attack,
            defense,
            status: Status::None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}
