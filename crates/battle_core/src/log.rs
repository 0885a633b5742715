use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Player,
    Monster,
}

impl Actor {
    pub fn label(&self) -> &'static str {
        match self {
            Actor::Player => "Player",
            Actor::Monster => "Monster",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Damage,
    Heal,
}

/// One line of the battle log. Built only by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    actor: Actor,
    kind: EntryKind,
    amount: u32,
    text: String,
}

impl LogEntry {
    pub(crate) fn damage(actor: Actor, amount: u32) -> Self {
        Self {
            actor,
            kind: EntryKind::Damage,
            amount,
            text: format!("takes {amount} damages"),
        }
    }

    pub(crate) fn heal(actor: Actor, amount: u32) -> Self {
        Self {
            actor,
            kind: EntryKind::Heal,
            amount,
            text: format!("heal {amount} life points"),
        }
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Description without the actor, e.g. `takes 7 damages`.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.actor.label(), self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_entry_renders_original_wording() {
        let entry = LogEntry::damage(Actor::Monster, 7);
        assert_eq!("takes 7 damages", entry.text());
        assert_eq!("Monster takes 7 damages", entry.to_string());
    }

    #[test]
    fn heal_entry_is_tagged_as_heal() {
        let entry = LogEntry::heal(Actor::Player, 12);
        assert_eq!(EntryKind::Heal, entry.kind());
        assert_eq!(12, entry.amount());
        assert_eq!("Player heal 12 life points", entry.to_string());
    }
}
