//! Main simulation runner driving the real battle engine.
//!
//! The play policy is deliberately simple: cast the heal skill when the
//! pool drops below half, cast any other charged skill immediately, and
//! otherwise take the first swap that lines up a run (or a random swap when
//! none exists). Statistics are tracked externally from `TurnResult` events.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::battle::{BattleEngine, BattleOutcome, CounterEvent};
use crate::core::combat_math::RunEffect;
use crate::core::constants::FIELD_SIZE;
use crate::core::field::Field;
use crate::roster::{default_party, default_roster};

/// Statistics from one simulated encounter.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub won: bool,
    pub defeated: bool,
    pub timed_out: bool,
    pub turns: u64,
    pub total_combos: u64,
    pub max_combo: u32,
    pub skill_casts: u64,
    pub monsters_slain: u32,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub healing_done: u64,
}

/// Run the full simulation batch and aggregate a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} in {} turns, {} monsters slain, max combo {}",
                run_idx + 1,
                config.num_runs,
                if run_stats.won {
                    "victory"
                } else if run_stats.defeated {
                    "defeat"
                } else {
                    "timeout"
                },
                run_stats.turns,
                run_stats.monsters_slain,
                run_stats.max_combo,
            );
        }

        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one encounter to its terminal state (or the turn cap).
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut engine = BattleEngine::new(default_party(), default_roster(), rng);
    let mut stats = RunStats::default();

    while engine.outcome() == BattleOutcome::InProgress && stats.turns < config.max_turns_per_run
    {
        stats.turns += 1;

        let result = match choose_skill(&engine) {
            Some(ally_idx) => engine.request_skill(ally_idx, rng),
            None => {
                let (src, dst) =
                    find_run_swap(engine.field()).unwrap_or_else(|| random_swap(rng));
                engine.request_swap(src, dst, rng)
            }
        };

        if result.skill.is_some() {
            stats.skill_casts += 1;
        }
        stats.total_combos += result.runs.len() as u64;
        for run in &result.runs {
            stats.max_combo = stats.max_combo.max(run.combo);
            if let RunEffect::Heal(heal) = run.effect {
                stats.healing_done += heal as u64;
            }
        }
        stats.damage_dealt += result.damage_dealt() as u64;
        if let Some(skill) = &result.skill {
            stats.healing_done += skill.heal.unwrap_or(0) as u64;
        }
        match result.counter {
            Some(CounterEvent::Attack { damage })
            | Some(CounterEvent::WeakenedAttack { damage, .. }) => {
                stats.damage_taken += damage as u64;
            }
            _ => {}
        }
        if result.monster_defeated {
            stats.monsters_slain += 1;
        }
    }

    match engine.outcome() {
        BattleOutcome::Victory => stats.won = true,
        BattleOutcome::Defeat => stats.defeated = true,
        BattleOutcome::InProgress => stats.timed_out = true,
    }
    stats
}

/// Pick a charged skill worth casting: heals only below half hp, anything
/// else as soon as it is ready.
fn choose_skill(engine: &BattleEngine) -> Option<usize> {
    let party = engine.party();
    for (idx, ally) in party.allies.iter().enumerate() {
        if !ally.skill_ready() {
            continue;
        }
        let Some(skill) = ally.skill.as_ref() else {
            continue;
        };
        let pure_heal = skill.damage.is_none() && skill.heal.is_some();
        if pure_heal && party.hp * 2 >= party.max_hp {
            continue;
        }
        return Some(idx);
    }
    None
}

/// First (src, dst) drag whose exchanges line up a qualifying run.
fn find_run_swap(field: &Field) -> Option<(usize, usize)> {
    for src in 0..FIELD_SIZE {
        for dst in 0..FIELD_SIZE {
            if src == dst {
                continue;
            }
            let mut trial = field.clone();
            let mut k = src;
            while k != dst {
                let next = if dst > k { k + 1 } else { k - 1 };
                trial.swap(k, next);
                k = next;
            }
            if trial.leftmost_run().is_some() {
                return Some((src, dst));
            }
        }
    }
    None
}

fn random_swap(rng: &mut impl Rng) -> (usize, usize) {
    (rng.gen_range(0..FIELD_SIZE), rng.gen_range(0..FIELD_SIZE))
}
