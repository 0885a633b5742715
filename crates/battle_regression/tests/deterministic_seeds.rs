use battle_core::{BattleEngine, SeededRandom};
use battle_regression::{seeded_match_trace, DEFAULT_SEED};

#[test]
fn match_trace_is_deterministic() {
    let baseline = seeded_match_trace(DEFAULT_SEED);
    let repeat = seeded_match_trace(DEFAULT_SEED);
    assert_eq!(baseline, repeat, "same seed should match");

    let different = seeded_match_trace(7);
    assert_ne!(baseline["log"], different["log"], "different seeds should diverge");
}

#[test]
fn engine_draws_are_deterministic() {
    let baseline = sample_healths(42);
    let repeat = sample_healths(42);
    assert_eq!(baseline, repeat, "same seed should match");
}

fn sample_healths(seed: u64) -> Vec<(u32, u32)> {
    let mut engine = BattleEngine::new(SeededRandom::new(seed));
    let mut healths = Vec::new();
    while !engine.is_finished() {
        engine.attack(5, 12).expect("attack is legal while the match runs");
        healths.push((engine.player_health(), engine.monster_health()));
    }
    healths
}
