//! The battle engine: one full player turn from swap (or skill cast) through
//! combo resolution, monster counter-turn, and roster advance.
//!
//! `BattleEngine` owns the field, the party, and the monster roster. The
//! presentation layer drives it with `request_swap` / `request_skill` and
//! reads back a [`TurnResult`] plus [`snapshot`](BattleEngine::snapshot)
//! views. All randomness flows through the caller-supplied rng so seeded
//! runs replay exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::combat_math::{
    enemy_attack_damage, resolve_enemy_attack, resolve_gem_run, RunEffect,
};
use super::constants::FIELD_SIZE;
use super::element::Element;
use super::field::Field;
use crate::combat::types::{Monster, Party, Status};
use crate::skills::{self, SkillOutcome};

/// Where the encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    InProgress,
    /// Every monster in the roster is down.
    Victory,
    /// The party pool hit zero.
    Defeat,
}

/// Why a request was ignored. Rejections are no-ops: no state changed and
/// no turn was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The encounter already ended in victory or defeat.
    BattleOver,
    /// A slot index was outside `0..14`.
    SlotOutOfRange,
    /// The ally index was outside the party.
    AllyOutOfRange,
    /// The ally has no skill to cast.
    NoSkill,
    /// Accrued charge is below the skill cost.
    NotEnoughSp,
}

/// One resolved run within a turn's combo chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunEvent {
    pub element: Element,
    pub length: usize,
    /// 1-based position in this turn's combo chain.
    pub combo: u32,
    pub effect: RunEffect,
}

/// What the monster did on its counter-turn. `turns_left` reports the
/// status duration still remaining after this turn's decrement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CounterEvent {
    /// Full attack, no status consulted.
    Attack { damage: u32 },
    /// Attack-down was active: only `damage = raw * ratio` landed.
    WeakenedAttack { raw: u32, damage: u32, turns_left: u32 },
    /// Stun was active: the attack was skipped entirely.
    Stunned { turns_left: u32 },
}

/// Everything that happened during one player action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Set when the request was ignored; all other fields stay empty.
    pub rejected: Option<RejectReason>,
    /// Field snapshot after each adjacent exchange of a multi-step drag.
    pub field_frames: Vec<Field>,
    /// Resolved runs in combo order.
    pub runs: Vec<RunEvent>,
    /// Skill cast summary, for skill-activation turns.
    pub skill: Option<SkillOutcome>,
    /// Monster counter-turn, when the monster survived the combo phase.
    pub counter: Option<CounterEvent>,
    /// The active monster went down this turn.
    pub monster_defeated: bool,
    /// The roster is exhausted; the encounter is won.
    pub all_monsters_cleared: bool,
    /// The party pool hit zero; the encounter is lost.
    pub party_defeated: bool,
}

impl TurnResult {
    fn rejection(reason: RejectReason) -> Self {
        Self {
            rejected: Some(reason),
            ..Self::default()
        }
    }

    pub fn accepted(&self) -> bool {
        self.rejected.is_none()
    }

    /// Total damage the party dealt this turn (runs plus skill).
    pub fn damage_dealt(&self) -> u32 {
        let run_dmg: u32 = self.runs.iter().map(|r| r.effect.damage()).sum();
        run_dmg + self.skill.as_ref().and_then(|s| s.damage).unwrap_or(0)
    }
}

/// Read-only state view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub field: Field,
    pub party: Party,
    /// Active monster; `None` once the roster is cleared.
    pub monster: Option<Monster>,
    pub outcome: BattleOutcome,
}

/// Turn-based battle state machine over a fixed monster roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleEngine {
    field: Field,
    party: Party,
    roster: Vec<Monster>,
    monster_idx: usize,
    outcome: BattleOutcome,
}

impl BattleEngine {
    /// Start an encounter: the first roster monster becomes active and the
    /// field is rolled fresh.
    pub fn new(party: Party, roster: Vec<Monster>, rng: &mut impl Rng) -> Self {
        Self::from_parts(Field::random(rng), party, roster)
    }

    /// Rebuild an engine from explicit state (snapshot restore, tests).
    pub fn from_parts(field: Field, party: Party, roster: Vec<Monster>) -> Self {
        let outcome = if roster.is_empty() {
            BattleOutcome::Victory
        } else if party.is_alive() {
            BattleOutcome::InProgress
        } else {
            BattleOutcome::Defeat
        };
        Self {
            field,
            party,
            roster,
            monster_idx: 0,
            outcome,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    /// The active monster, if the roster is not yet cleared.
    pub fn monster(&self) -> Option<&Monster> {
        self.roster.get(self.monster_idx)
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            field: self.field.clone(),
            party: self.party.clone(),
            monster: self.monster().cloned(),
            outcome: self.outcome,
        }
    }

    /// Play one full turn from a swap request.
    ///
    /// The source gem walks to the destination through adjacent exchanges
    /// (each recorded as a field frame), then the combo loop resolves runs
    /// until none remain, and the monster takes its counter-turn or the
    /// roster advances.
    pub fn request_swap(&mut self, src: usize, dst: usize, rng: &mut impl Rng) -> TurnResult {
        if self.outcome != BattleOutcome::InProgress {
            return TurnResult::rejection(RejectReason::BattleOver);
        }
        if src >= FIELD_SIZE || dst >= FIELD_SIZE {
            return TurnResult::rejection(RejectReason::SlotOutOfRange);
        }

        let mut result = TurnResult::default();

        let mut k = src;
        while k != dst {
            let next = if dst > k { k + 1 } else { k - 1 };
            self.field.swap(k, next);
            result.field_frames.push(self.field.clone());
            k = next;
        }

        self.resolve_combos(&mut result, rng);
        self.post_combo(&mut result, rng);
        result
    }

    /// Cast an ally's skill instead of swapping. Requires full charge;
    /// deducts the full cost and then runs the same post-combo branch,
    /// including the monster counter-turn.
    pub fn request_skill(&mut self, ally_idx: usize, rng: &mut impl Rng) -> TurnResult {
        if self.outcome != BattleOutcome::InProgress {
            return TurnResult::rejection(RejectReason::BattleOver);
        }
        let Some(ally) = self.party.allies.get(ally_idx) else {
            return TurnResult::rejection(RejectReason::AllyOutOfRange);
        };
        let Some(skill) = ally.skill.clone() else {
            return TurnResult::rejection(RejectReason::NoSkill);
        };
        if ally.sp < skill.need_sp {
            return TurnResult::rejection(RejectReason::NotEnoughSp);
        }

        let mut result = TurnResult::default();

        self.party.allies[ally_idx].sp -= skill.need_sp;
        let monster = &mut self.roster[self.monster_idx];
        result.skill = Some(skills::execute(&skill, &mut self.party, monster, rng));

        self.post_combo(&mut result, rng);
        result
    }

    /// Resolve runs until none qualify, refilling after each collapse.
    /// Stops immediately when the monster goes down mid-chain.
    fn resolve_combos(&mut self, result: &mut TurnResult, rng: &mut impl Rng) {
        let mut combo = 0;
        while let Some(run) = self.field.leftmost_run() {
            combo += 1;
            let element = self.field.slots()[run.start];

            let monster = &mut self.roster[self.monster_idx];
            let effect =
                resolve_gem_run(element, run.length, combo, &mut self.party, monster, rng);

            // Matched gems charge the allies of that affinity
            if element != Element::Life {
                for ally in self
                    .party
                    .allies
                    .iter_mut()
                    .filter(|a| a.element == element)
                {
                    ally.gain_sp(run.length as u32);
                }
            }

            result.runs.push(RunEvent {
                element,
                length: run.length,
                combo,
                effect,
            });

            self.field.collapse_left(run.start, run.length);
            self.field.fill_random(rng);

            if !self.roster[self.monster_idx].is_alive() {
                break;
            }
        }
    }

    /// Shared tail of every accepted turn: monster counter-turn when it
    /// survived, roster advance (with a fresh field) when it did not.
    fn post_combo(&mut self, result: &mut TurnResult, rng: &mut impl Rng) {
        let monster_alive = self
            .roster
            .get(self.monster_idx)
            .is_some_and(Monster::is_alive);

        if monster_alive {
            result.counter = Some(self.monster_counter(rng));
            if !self.party.is_alive() {
                self.outcome = BattleOutcome::Defeat;
                result.party_defeated = true;
            }
        } else {
            result.monster_defeated = true;
            self.monster_idx += 1;
            if self.monster_idx >= self.roster.len() {
                self.outcome = BattleOutcome::Victory;
                result.all_monsters_cleared = true;
            } else {
                self.field = Field::random(rng);
            }
        }
    }

    /// Exactly one counter action, gated on the monster's status. The
    /// status is decremented after it was consulted and clears at zero.
    fn monster_counter(&mut self, rng: &mut impl Rng) -> CounterEvent {
        let monster = &mut self.roster[self.monster_idx];

        let event = match monster.status {
            Status::Stun { turns } => CounterEvent::Stunned {
                turns_left: turns.saturating_sub(1),
            },
            Status::AttackDown { turns, ratio } => {
                let raw = enemy_attack_damage(&self.party, monster, rng);
                let damage = (raw as f64 * ratio) as u32;
                self.party.take_damage(damage);
                CounterEvent::WeakenedAttack {
                    raw,
                    damage,
                    turns_left: turns.saturating_sub(1),
                }
            }
            Status::None => CounterEvent::Attack {
                damage: resolve_enemy_attack(&mut self.party, monster, rng),
            },
        };

        monster.status.tick_down();
        event
    }
}
