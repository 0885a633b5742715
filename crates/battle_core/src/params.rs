use tracing::warn;

use crate::action::{ActionRanges, DamageRange};
use crate::engine::BattleEngine;
use crate::rng::{SeededRandom, DEFAULT_SEED};

/// Engine parameters, overridable through the environment:
/// `BATTLE_SEED`, `BATTLE_ATTACK_RANGE` and `BATTLE_SPECIAL_RANGE`
/// (ranges written as `MIN..MAX`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleParams {
    pub seed: u64,
    pub ranges: ActionRanges,
}

impl BattleParams {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`BattleParams::from_env`] with variables read through `lookup`.
    /// Missing or malformed values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seed = lookup("BATTLE_SEED")
            .and_then(|val| val.trim().parse().ok())
            .unwrap_or(defaults.seed);
        let attack = lookup_range(&lookup, "BATTLE_ATTACK_RANGE").unwrap_or(defaults.ranges.attack);
        let special =
            lookup_range(&lookup, "BATTLE_SPECIAL_RANGE").unwrap_or(defaults.ranges.special);
        Self {
            seed,
            ranges: ActionRanges { attack, special },
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    pub fn engine(&self) -> BattleEngine<SeededRandom> {
        BattleEngine::seeded(self.seed).with_ranges(self.ranges)
    }
}

impl Default for BattleParams {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            ranges: ActionRanges::default(),
        }
    }
}

fn lookup_range(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<DamageRange> {
    let raw = lookup(key)?;
    match raw.parse() {
        Ok(range) => Some(range),
        Err(err) => {
            warn!(target: "battle_core.params", key, error = %err, "ignoring malformed range");
            None
        }
    }
}
