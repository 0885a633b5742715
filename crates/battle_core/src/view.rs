use serde::Serialize;

use crate::action::Action;
use crate::engine::BattleEngine;
use crate::log::LogEntry;
use crate::outcome::Outcome;

/// Read-only snapshot handed to whatever draws the battle screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleView {
    pub player_health: u32,
    pub monster_health: u32,
    pub player_percent: u32,
    pub monster_percent: u32,
    /// Newest entry first.
    pub recent_log: Vec<LogEntry>,
    pub outcome: Outcome,
    pub headline: Option<&'static str>,
    pub actions: Vec<Action>,
}

impl BattleView {
    pub fn capture<R>(engine: &BattleEngine<R>) -> Self {
        let state = engine.state();
        let outcome = state.outcome();
        Self {
            player_health: state.player_health(),
            monster_health: state.monster_health(),
            player_percent: state.player().percent(),
            monster_percent: state.monster().percent(),
            recent_log: state.log().iter().rev().cloned().collect(),
            outcome,
            headline: outcome.headline(),
            actions: engine.available_actions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchState;
    use crate::log::Actor;
    use crate::rng::ScriptedRandom;

    #[test]
    fn log_is_reverse_chronological() {
        let mut engine = BattleEngine::from_state(
            MatchState::with_health(80, 100),
            ScriptedRandom::new(vec![10, 8, 12]),
        );
        engine.attack(5, 12).unwrap();
        engine.heal().unwrap();

        let view = BattleView::capture(&engine);
        let actors: Vec<Actor> = view.recent_log.iter().map(LogEntry::actor).collect();
        assert_eq!(vec![Actor::Player, Actor::Player, Actor::Monster], actors);
        assert_eq!(12, view.recent_log[0].amount());
        assert!(view.headline.is_none());
    }

    #[test]
    fn finished_match_shows_headline_and_no_actions() {
        let mut engine = BattleEngine::from_state(MatchState::new(), ScriptedRandom::default());
        engine.self_destruct().unwrap();

        let view = BattleView::capture(&engine);
        assert_eq!(Some("You Lose"), view.headline);
        assert_eq!(0, view.player_percent);
        assert!(view.actions.is_empty());
    }
}
