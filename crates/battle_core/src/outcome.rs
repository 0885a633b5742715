use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    InProgress,
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Classifies a pair of health totals from the player's point of view.
    pub fn classify(player_health: u32, monster_health: u32) -> Self {
        match (player_health == 0, monster_health == 0) {
            (true, true) => Outcome::Draw,
            (true, false) => Outcome::Lose,
            (false, true) => Outcome::Win,
            (false, false) => Outcome::InProgress,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// End-of-match banner, `None` while the match is running.
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::Win => Some("You Win"),
            Outcome::Lose => Some("You Lose"),
            Outcome::Draw => Some("You and Monster are Draw"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::InProgress => "in progress",
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        };
        f.write_str(label)
    }
}
