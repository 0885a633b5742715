//! Turn-based player-versus-monster battle engine.
//!
//! The presentation layer drives a [`BattleEngine`] with player actions and
//! reads back a [`BattleView`]; nothing else mutates match state.

pub mod action;
pub mod engine;
pub mod error;
pub mod health;
pub mod log;
pub mod outcome;
pub mod params;
pub mod rng;
pub mod view;

pub use action::{Action, ActionRanges, DamageRange, ParseActionError, ParseRangeError};
pub use engine::{BattleEngine, BattleEvent, MatchState, HEAL_RANGE, RETALIATION_RANGE};
pub use error::BattleError;
pub use health::{Health, MAX_HEALTH};
pub use log::{Actor, EntryKind, LogEntry};
pub use outcome::Outcome;
pub use params::BattleParams;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, DEFAULT_SEED};
pub use view::BattleView;
