use battle_core::{Action, LogEntry, MatchState, Outcome};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub id: String,
    pub timestamp: String,
    pub seed: u64,
    pub summary: MatchSummary,
    pub turns: Vec<TurnRecord>,
    pub log: Vec<LogEntry>,
}

impl MatchReport {
    pub fn new(
        id: impl Into<String>,
        seed: u64,
        state: &MatchState,
        turns: Vec<TurnRecord>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            seed,
            summary: MatchSummary::from_turns(state, &turns),
            turns,
            log: state.log().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub outcome: Outcome,
    pub player_health: u32,
    pub monster_health: u32,
    pub applied_turns: usize,
    pub rejected_turns: usize,
}

impl MatchSummary {
    fn from_turns(state: &MatchState, turns: &[TurnRecord]) -> Self {
        let count = |status: TurnStatus| turns.iter().filter(|t| t.status == status).count();
        Self {
            outcome: state.outcome(),
            player_health: state.player_health(),
            monster_health: state.monster_health(),
            applied_turns: count(TurnStatus::Applied),
            rejected_turns: count(TurnStatus::Rejected),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub index: usize,
    pub action: Action,
    pub status: TurnStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TurnStatus {
    Applied,
    Rejected,
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_turn_statuses() {
        let turns = vec![
            TurnRecord {
                index: 0,
                action: Action::Attack,
                status: TurnStatus::Applied,
                detail: None,
            },
            TurnRecord {
                index: 1,
                action: Action::Heal,
                status: TurnStatus::Rejected,
                detail: Some("the player is already at full health".into()),
            },
            TurnRecord {
                index: 2,
                action: Action::Attack,
                status: TurnStatus::Skipped,
                detail: None,
            },
        ];
        let report = MatchReport::new("run-test", 42, &MatchState::with_health(0, 50), turns);

        assert_eq!(Outcome::Lose, report.summary.outcome);
        assert_eq!(1, report.summary.applied_turns);
        assert_eq!(1, report.summary.rejected_turns);
        assert!(report.log.is_empty());
    }

    #[test]
    fn report_survives_json() {
        let report = MatchReport::new("run-json", 9, &MatchState::new(), Vec::new());
        let json = serde_json::to_string(&report).unwrap();
        let back: MatchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.summary, back.summary);
        assert_eq!("run-json", back.id);
    }
}
