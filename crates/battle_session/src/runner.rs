use anyhow::Result;
use battle_core::{Action, BattleEngine, RandomSource, SeededRandom};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::report::{MatchReport, TurnRecord, TurnStatus};

pub struct RunOptions {
    pub run_id: String,
    pub seed: Option<u64>,
}

impl RunOptions {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Plays the configured script against a freshly seeded engine.
pub fn run_script(config: &SessionConfig, options: &RunOptions) -> Result<MatchReport> {
    let actions = config.script_actions()?;
    let seed = options.seed.unwrap_or_else(|| config.seed());
    let mut engine = BattleEngine::from_state(config.initial_state(), SeededRandom::new(seed))
        .with_ranges(config.ranges());

    info!(
        target: "battle_session.runner",
        run_id = %options.run_id,
        seed,
        steps = actions.len(),
        "running script"
    );
    let turns = play_script(&mut engine, &actions);
    Ok(MatchReport::new(options.run_id.clone(), seed, engine.state(), turns))
}

/// Applies each action in order. Refused actions are recorded and play
/// continues; everything after the match ends is skipped.
pub fn play_script<R: RandomSource>(
    engine: &mut BattleEngine<R>,
    actions: &[Action],
) -> Vec<TurnRecord> {
    let mut turns = Vec::with_capacity(actions.len());
    for (index, &action) in actions.iter().enumerate() {
        let (status, detail) = if engine.is_finished() {
            (TurnStatus::Skipped, None)
        } else {
            match engine.perform(action) {
                Ok(()) => (TurnStatus::Applied, None),
                Err(err) => (TurnStatus::Rejected, Some(err.to_string())),
            }
        };
        debug!(target: "battle_session.runner", index, %action, ?status, "turn recorded");
        turns.push(TurnRecord {
            index,
            action,
            status,
            detail,
        });
    }
    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{MatchState, Outcome, ScriptedRandom};

    #[test]
    fn refused_and_trailing_steps_are_recorded() {
        let mut engine = BattleEngine::from_state(
            MatchState::with_health(100, 15),
            ScriptedRandom::new(vec![11, 6]),
        );
        let script = [Action::Heal, Action::Attack, Action::Attack, Action::SelfDestruct];
        let turns = play_script(&mut engine, &script);

        let statuses: Vec<TurnStatus> = turns.iter().map(|t| t.status).collect();
        assert_eq!(
            vec![
                TurnStatus::Rejected,
                TurnStatus::Applied,
                TurnStatus::Applied,
                TurnStatus::Skipped,
            ],
            statuses
        );
        assert_eq!(Some("the player is already at full health"), turns[0].detail.as_deref());
        assert_eq!(Outcome::Win, engine.current_outcome());
    }

    #[test]
    fn seed_override_wins_over_config() {
        let config =
            SessionConfig::parse("[match]\nseed = 1\n[script]\nactions = [\"attack\"]").unwrap();
        let report = run_script(&config, &RunOptions::new("run-seed").with_seed(5)).unwrap();
        assert_eq!(5, report.seed);
        assert_eq!(1, report.summary.applied_turns);
        assert_eq!(2, report.log.len());
    }
}
