use thiserror::Error;

use crate::outcome::Outcome;

/// Caller contract violations. A rejected call never touches match state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("the match is already over ({0})")]
    MatchOver(Outcome),
    #[error("the player has no health left")]
    PlayerDefeated,
    #[error("the player is already at full health")]
    HealthFull,
    #[error("invalid damage range: max {max} is below min {min}")]
    InvalidRange { min: u32, max: u32 },
}
