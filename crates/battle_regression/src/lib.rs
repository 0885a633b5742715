//! Helpers for deterministic regression tests.

use battle_core::{Action, BattleEngine, LogEntry, MatchState, ScriptedRandom};
use battle_session::{play_script, MatchReport, MatchSummary};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::json;

pub use battle_core::DEFAULT_SEED;

/// Plays a whole match from one seed: the engine draws from it and a
/// second generator picks among the enabled actions each turn.
pub fn seeded_match_trace(seed: u64) -> serde_json::Value {
    let mut engine = BattleEngine::seeded(seed);
    let mut picker = StdRng::seed_from_u64(seed);
    let mut actions = Vec::new();

    while let Some(action) = engine.available_actions().choose(&mut picker).copied() {
        engine
            .perform(action)
            .expect("available action must be accepted");
        actions.push(action);
    }

    json!({
        "seed": seed,
        "actions": actions,
        "outcome": engine.current_outcome(),
        "player_health": engine.player_health(),
        "monster_health": engine.monster_health(),
        "log": engine.log(),
    })
}

#[derive(Debug, Serialize)]
pub struct ScriptedTrace {
    pub summary: MatchSummary,
    pub log: Vec<LogEntry>,
}

/// Runs `script` from a fresh match with every random draw forced.
pub fn scripted_trace(draws: &[u32], script: &[Action]) -> ScriptedTrace {
    let mut engine =
        BattleEngine::from_state(MatchState::new(), ScriptedRandom::new(draws.to_vec()));
    let turns = play_script(&mut engine, script);
    let report = MatchReport::new("scripted", 0, engine.state(), turns);
    ScriptedTrace {
        summary: report.summary,
        log: report.log,
    }
}
