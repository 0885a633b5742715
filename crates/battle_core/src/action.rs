use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four controls offered to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack,
    SpecialAttack,
    Heal,
    SelfDestruct,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Attack,
        Action::SpecialAttack,
        Action::Heal,
        Action::SelfDestruct,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Attack => "attack",
            Action::SpecialAttack => "special",
            Action::Heal => "heal",
            Action::SelfDestruct => "suicide",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action `{0}` (expected attack, special, heal or suicide)")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" | "a" => Ok(Action::Attack),
            "special" | "special_attack" | "s" => Ok(Action::SpecialAttack),
            "heal" | "h" => Ok(Action::Heal),
            "suicide" | "self_destruct" | "self-destruct" | "k" => Ok(Action::SelfDestruct),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

/// Half-open damage range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.max >= self.min
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..self.max).contains(&value)
    }
}

impl fmt::Display for DamageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid damage range `{0}` (expected MIN..MAX with MIN <= MAX)")]
pub struct ParseRangeError(pub String);

impl FromStr for DamageRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRangeError(s.to_string());
        let (min, max) = s.trim().split_once("..").ok_or_else(err)?;
        let range = DamageRange::new(
            min.trim().parse().map_err(|_| err())?,
            max.trim().parse().map_err(|_| err())?,
        );
        if !range.is_valid() {
            return Err(err());
        }
        Ok(range)
    }
}

pub const ATTACK_RANGE: DamageRange = DamageRange::new(5, 12);
pub const SPECIAL_ATTACK_RANGE: DamageRange = DamageRange::new(8, 25);

/// Damage ranges used by [`Action::Attack`] and [`Action::SpecialAttack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRanges {
    pub attack: DamageRange,
    pub special: DamageRange,
}

impl ActionRanges {
    pub fn for_action(&self, action: Action) -> Option<DamageRange> {
        match action {
            Action::Attack => Some(self.attack),
            Action::SpecialAttack => Some(self.special),
            Action::Heal | Action::SelfDestruct => None,
        }
    }
}

impl Default for ActionRanges {
    fn default() -> Self {
        Self {
            attack: ATTACK_RANGE,
            special: SPECIAL_ATTACK_RANGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!(Ok(Action::Attack), "ATTACK".parse());
        assert_eq!(Ok(Action::SpecialAttack), "special".parse());
        assert_eq!(Ok(Action::SelfDestruct), "self-destruct".parse());
        assert_eq!(Ok(Action::Heal), " h ".parse());
        assert!("flee".parse::<Action>().is_err());
    }

    #[test]
    fn parses_damage_ranges() {
        assert_eq!(Ok(DamageRange::new(5, 12)), "5..12".parse());
        assert_eq!(Ok(DamageRange::new(3, 3)), " 3 .. 3 ".parse());
        assert!("12..5".parse::<DamageRange>().is_err());
        assert!("12".parse::<DamageRange>().is_err());
    }

    #[test]
    fn default_ranges_match_controls() {
        let ranges = ActionRanges::default();
        assert_eq!(Some(ATTACK_RANGE), ranges.for_action(Action::Attack));
        assert_eq!(Some(SPECIAL_ATTACK_RANGE), ranges.for_action(Action::SpecialAttack));
        assert_eq!(None, ranges.for_action(Action::Heal));
    }
}
