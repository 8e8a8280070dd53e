//! Integration test: full battle flow
//!
//! Drives `BattleEngine` through whole encounters with the default content
//! and checks the state invariants a presentation layer relies on.

use pazmon::Element::{Earth, Fire, Life, Water, Wind};
use pazmon::{
    roster::{default_party, default_roster},
    BattleEngine, BattleOutcome, CounterEvent, Field, Monster, Party, RejectReason, RunEffect,
    Status, FIELD_SIZE,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

/// Alternating field with no qualifying runs.
fn quiet_field() -> Field {
    Field::from_slots([
        Fire, Water, Fire, Water, Fire, Water, Fire, Water, Fire, Water, Fire, Water, Fire, Water,
    ])
}

#[test]
fn test_fresh_encounter_starts_against_the_first_monster() {
    let mut rng = create_test_rng();
    let engine = BattleEngine::new(default_party(), default_roster(), &mut rng);

    assert_eq!(engine.outcome(), BattleOutcome::InProgress);
    assert_eq!(engine.monster().map(|m| m.name.as_str()), Some("Slime"));
    assert_eq!(engine.party().hp, 600);
    assert!(engine.field().is_full());
}

#[test]
fn test_rejected_requests_never_touch_state() {
    let mut rng = create_test_rng();
    let mut engine = BattleEngine::from_parts(quiet_field(), default_party(), default_roster());
    let before = engine.snapshot();

    for (src, dst) in [(14, 0), (0, 14), (99, 99)] {
        let result = engine.request_swap(src, dst, &mut rng);
        assert_eq!(result.rejected, Some(RejectReason::SlotOutOfRange));
        assert!(result.runs.is_empty());
        assert!(result.counter.is_none());
    }
    assert_eq!(engine.request_skill(7, &mut rng).rejected, Some(RejectReason::AllyOutOfRange));
    assert_eq!(engine.request_skill(0, &mut rng).rejected, Some(RejectReason::NotEnoughSp));

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_accepted_turn_leaves_field_full_and_settled() {
    let mut rng = create_test_rng();
    let field = Field::from_slots([
        Earth, Earth, Water, Earth, Fire, Water, Fire, Water, Fire, Water, Fire, Water, Fire,
        Water,
    ]);
    // Dragging the Water gem out lines up an Earth triple
    let mut engine = BattleEngine::from_parts(
        field,
        default_party(),
        vec![Monster::new("Dragon", Fire, 600, 50, 20)],
    );

    let result = engine.request_swap(2, 5, &mut rng);
    assert!(result.accepted());
    assert!(!result.runs.is_empty());
    assert_eq!(result.runs[0].element, Earth);

    // The monster survived, so the field must be refilled with no run left
    assert!(!result.monster_defeated);
    assert!(engine.field().is_full());
    assert_eq!(engine.field().leftmost_run(), None);
}

#[test]
fn test_stun_then_debuff_sequence_against_one_monster() {
    let mut rng = create_test_rng();
    let mut roster = vec![Monster::new("Werewolf", Wind, 400, 40, 15)];
    roster[0].status = Status::Stun { turns: 1 };
    let mut engine = BattleEngine::from_parts(quiet_field(), default_party(), roster);
    let full_hp = engine.party().hp;

    // Stunned turn: no damage, status clears after being consulted
    let first = engine.request_swap(0, 0, &mut rng);
    assert_eq!(first.counter, Some(CounterEvent::Stunned { turns_left: 0 }));
    assert_eq!(engine.party().hp, full_hp);
    assert!(engine.monster().unwrap().status.is_none());

    // Fresh debuff: reduced damage lands on the following turn
    engine_status_set(&mut engine, Status::AttackDown { turns: 2, ratio: 0.5 });
    let second = engine.request_swap(0, 0, &mut rng);
    let Some(CounterEvent::WeakenedAttack { raw, damage, turns_left }) = second.counter else {
        panic!("expected weakened attack");
    };
    assert_eq!(damage, (raw as f64 * 0.5) as u32);
    assert_eq!(turns_left, 1);
    assert_eq!(engine.party().hp, full_hp - damage);
}

// Status is only reachable through skills in normal play; tests poke it in
// via a snapshot rebuild.
fn engine_status_set(engine: &mut BattleEngine, status: Status) {
    let snap = engine.snapshot();
    let mut monster = snap.monster.expect("active monster");
    monster.status = status;
    *engine = BattleEngine::from_parts(snap.field, snap.party, vec![monster]);
}

#[test]
fn test_debuff_skill_then_weakened_counter() {
    let mut rng = create_test_rng();
    let mut party = default_party();
    party.allies[3].sp = 10; // Genbu: damage + attack-down 0.5 for 3 turns
    let mut engine = BattleEngine::from_parts(
        quiet_field(),
        party,
        vec![Monster::new("Giant Bat", Wind, 300, 30, 10)],
    );

    let cast = engine.request_skill(3, &mut rng);
    assert!(cast.accepted());
    let outcome = cast.skill.as_ref().unwrap();
    assert!(outcome.attack_down.is_some());
    assert_eq!(engine.party().allies[3].sp, 0);

    // The debuff was applied before the counter-turn, so the very first
    // counter is already weakened
    assert!(matches!(
        cast.counter,
        Some(CounterEvent::WeakenedAttack { turns_left: 2, .. })
    ));
}

#[test]
fn test_overkill_skill_floors_monster_at_zero() {
    let mut rng = create_test_rng();
    let mut party = default_party();
    party.allies[0].sp = 10; // Seiryu: 20-50 range damage
    let mut engine = BattleEngine::from_parts(
        quiet_field(),
        party,
        vec![Monster::new("Slime", Water, 15, 10, 1)],
    );

    let result = engine.request_skill(0, &mut rng);
    assert!(result.monster_defeated);
    assert!(result.all_monsters_cleared);
    assert!(result.counter.is_none());
    assert_eq!(engine.outcome(), BattleOutcome::Victory);
    assert!(engine.monster().is_none());
}

#[test]
fn test_terminal_victory_rejects_every_request() {
    let mut rng = create_test_rng();
    let mut engine = BattleEngine::from_parts(quiet_field(), default_party(), Vec::new());
    assert_eq!(engine.outcome(), BattleOutcome::Victory);

    let swap = engine.request_swap(0, 1, &mut rng);
    assert_eq!(swap.rejected, Some(RejectReason::BattleOver));
    let skill = engine.request_skill(0, &mut rng);
    assert_eq!(skill.rejected, Some(RejectReason::BattleOver));
    assert_eq!(engine.outcome(), BattleOutcome::Victory);
}

#[test]
fn test_roster_advances_in_fixed_order() {
    let mut rng = create_test_rng();
    let field = Field::from_slots([
        Fire, Fire, Fire, Water, Wind, Water, Wind, Water, Wind, Water, Wind, Water, Wind, Water,
    ]);
    let roster = vec![
        Monster::new("Slime", Water, 1, 10, 1),
        Monster::new("Goblin", Earth, 1, 20, 5),
        Monster::new("Giant Bat", Wind, 300, 30, 10),
    ];
    let mut engine = BattleEngine::from_parts(field, default_party(), roster);

    let first = engine.request_swap(0, 0, &mut rng);
    assert!(first.monster_defeated);
    assert_eq!(engine.monster().map(|m| m.name.as_str()), Some("Goblin"));

    // Keep swinging until the Goblin drops too
    let mut guard = 0;
    while engine.monster().map(|m| m.name.as_str()) == Some("Goblin") {
        let (src, dst) = find_run_swap(engine.field()).unwrap_or((0, 1));
        engine.request_swap(src, dst, &mut rng);
        guard += 1;
        assert!(guard < 200, "Goblin never fell");
    }
    assert_eq!(engine.monster().map(|m| m.name.as_str()), Some("Giant Bat"));
}

#[test]
fn test_life_runs_heal_the_shared_pool() {
    let mut rng = create_test_rng();
    let mut party = default_party();
    party.hp = 200;
    let field = Field::from_slots([
        Life, Life, Life, Life, Water, Fire, Water, Fire, Water, Fire, Water, Fire, Water, Fire,
    ]);
    let mut engine = BattleEngine::from_parts(
        field,
        party,
        vec![Monster::new("Dragon", Fire, 600, 50, 20)],
    );

    let result = engine.request_swap(0, 0, &mut rng);
    let healed: u32 = result
        .runs
        .iter()
        .filter_map(|r| match r.effect {
            RunEffect::Heal(h) => Some(h),
            _ => None,
        })
        .sum();
    assert!(healed > 0);

    let taken = match result.counter {
        Some(CounterEvent::Attack { damage })
        | Some(CounterEvent::WeakenedAttack { damage, .. }) => damage,
        _ => 0,
    };
    assert_eq!(engine.party().hp, (200 + healed).min(600) - taken);
}

#[test]
fn test_random_play_preserves_invariants() {
    // Fuzz whole encounters: after every accepted action the field is full,
    // hp values are clamped, and terminal outcomes stick
    for seed in 0..5 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut engine = BattleEngine::new(default_party(), default_roster(), &mut rng);

        for _ in 0..300 {
            if engine.outcome() != BattleOutcome::InProgress {
                break;
            }
            let src = rng.gen_range(0..FIELD_SIZE);
            let dst = rng.gen_range(0..FIELD_SIZE);
            let result = engine.request_swap(src, dst, &mut rng);
            assert!(result.accepted());

            let snap = engine.snapshot();
            assert!(snap.field.is_full());
            assert!(snap.party.hp <= snap.party.max_hp);
            if let Some(monster) = &snap.monster {
                assert!(monster.hp <= monster.max_hp);
                // A surviving monster leaves a settled field behind
                if !result.monster_defeated {
                    assert_eq!(snap.field.leftmost_run(), None);
                }
            }
        }

        if engine.outcome() == BattleOutcome::Defeat {
            assert_eq!(engine.party().hp, 0);
        }
    }
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut rng = create_test_rng();
    let mut engine = BattleEngine::new(default_party(), default_roster(), &mut rng);
    engine.request_swap(0, 5, &mut rng);

    let snap = engine.snapshot();
    let json = serde_json::to_string(&snap).expect("snapshot serializes");
    let restored: pazmon::BattleSnapshot = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored, snap);

    // A restored engine replays identically under the same rng stream
    let roster: Vec<Monster> = restored.monster.clone().into_iter().collect();
    let mut a = BattleEngine::from_parts(restored.field.clone(), restored.party.clone(), roster.clone());
    let mut b = BattleEngine::from_parts(restored.field, restored.party, roster);
    let mut rng_a = ChaCha8Rng::seed_from_u64(777);
    let mut rng_b = ChaCha8Rng::seed_from_u64(777);
    assert_eq!(a.request_swap(3, 9, &mut rng_a), b.request_swap(3, 9, &mut rng_b));
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_searching_policy_progresses_through_the_roster() {
    // Play the default content with the run-seeking policy; every encounter
    // must reach a terminal state or the cap, and the best run must get
    // well into the roster
    let mut best_slain = 0;

    for seed in 0..8 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut engine = BattleEngine::new(default_party(), default_roster(), &mut rng);
        let mut slain = 0;

        for _ in 0..1500 {
            if engine.outcome() != BattleOutcome::InProgress {
                break;
            }
            let result = match ready_skill(engine.party()) {
                Some(idx) => engine.request_skill(idx, &mut rng),
                None => {
                    let (src, dst) = find_run_swap(engine.field())
                        .unwrap_or_else(|| (rng.gen_range(0..FIELD_SIZE), rng.gen_range(0..FIELD_SIZE)));
                    engine.request_swap(src, dst, &mut rng)
                }
            };
            if result.monster_defeated {
                slain += 1;
            }
        }

        if engine.outcome() == BattleOutcome::Victory {
            assert_eq!(slain, 5);
        }
        best_slain = best_slain.max(slain);
    }

    assert!(best_slain >= 2, "policy never got past the early roster");
}

fn ready_skill(party: &Party) -> Option<usize> {
    party.allies.iter().position(|a| {
        if !a.skill_ready() {
            return false;
        }
        let Some(skill) = a.skill.as_ref() else {
            return false;
        };
        let pure_heal = skill.damage.is_none() && skill.heal.is_some();
        !(pure_heal && party.hp * 2 >= party.max_hp)
    })
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
