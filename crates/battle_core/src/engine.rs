//! Turn resolution for a single player-versus-monster match.
//!
//! [`BattleEngine`] owns the [`MatchState`] and is the only way to change it.
//! Randomness comes from an injected [`RandomSource`], so a match replays
//! exactly under the same seed or script.

use serde::Serialize;
use tracing::{info, warn};

use crate::action::{Action, ActionRanges, DamageRange};
use crate::error::BattleError;
use crate::health::{Health, MAX_HEALTH};
use crate::log::{Actor, LogEntry};
use crate::outcome::Outcome;
use crate::rng::{RandomSource, SeededRandom};

/// Counter-damage the monster deals during an attack, `[5, 15)`.
pub const RETALIATION_RANGE: DamageRange = DamageRange::new(5, 15);
/// Healing restored by [`BattleEngine::heal`], `[8, 15)`.
pub const HEAL_RANGE: DamageRange = DamageRange::new(8, 15);
/// Logged for a self-destruct regardless of the health actually lost.
pub const SELF_DESTRUCT_DAMAGE: u32 = 100;

/// Authoritative state of one match.
///
/// Serialize-only. Instances come from [`MatchState::with_health`], which
/// clamps both healths and derives the outcome from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchState {
    player: Health,
    monster: Health,
    log: Vec<LogEntry>,
    outcome: Outcome,
}

impl MatchState {
    /// Both sides at full health, empty log.
    pub fn new() -> Self {
        Self::with_health(MAX_HEALTH, MAX_HEALTH)
    }

    /// Arbitrary starting totals, clamped to `[0, 100]`, outcome derived.
    pub fn with_health(player: u32, monster: u32) -> Self {
        let player = Health::with_current(player, MAX_HEALTH);
        let monster = Health::with_current(monster, MAX_HEALTH);
        Self {
            outcome: Outcome::classify(player.current(), monster.current()),
            player,
            monster,
            log: Vec::new(),
        }
    }

    pub fn player_health(&self) -> u32 {
        self.player.current()
    }

    pub fn monster_health(&self) -> u32 {
        self.monster.current()
    }

    pub fn player(&self) -> &Health {
        &self.player
    }

    pub fn monster(&self) -> &Health {
        &self.monster
    }

    /// Chronological order, oldest first.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifications queued for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    MatchStarted,
    Logged(LogEntry),
    Finished(Outcome),
}

pub struct BattleEngine<R = SeededRandom> {
    state: MatchState,
    rng: R,
    ranges: ActionRanges,
    events: Vec<BattleEvent>,
}

impl BattleEngine<SeededRandom> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRandom::new(seed))
    }
}

impl<R> BattleEngine<R> {
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn player_health(&self) -> u32 {
        self.state.player_health()
    }

    pub fn monster_health(&self) -> u32 {
        self.state.monster_health()
    }

    pub fn log(&self) -> &[LogEntry] {
        self.state.log()
    }

    pub fn current_outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn ranges(&self) -> ActionRanges {
        self.ranges
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn is_finished(&self) -> bool {
        self.state.outcome.is_terminal()
    }

    /// Whether the matching control would be enabled right now.
    pub fn can_perform(&self, action: Action) -> bool {
        let player = &self.state.player;
        if self.is_finished() || player.is_depleted() {
            return false;
        }
        match action {
            Action::Attack | Action::SpecialAttack => !self.state.monster.is_depleted(),
            Action::Heal => !player.is_full(),
            Action::SelfDestruct => true,
        }
    }

    pub fn available_actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.can_perform(*action))
            .collect()
    }

    /// Drains notifications raised since the last call.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<R: RandomSource> BattleEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::from_state(MatchState::new(), rng)
    }

    pub fn from_state(state: MatchState, rng: R) -> Self {
        Self {
            state,
            rng,
            ranges: ActionRanges::default(),
            events: Vec::new(),
        }
    }

    pub fn with_ranges(mut self, ranges: ActionRanges) -> Self {
        self.ranges = ranges;
        self
    }

    /// Resets to a fresh match and announces it.
    pub fn initialize(&mut self) {
        self.state = MatchState::new();
        self.events.push(BattleEvent::MatchStarted);
        info!(target: "battle_core.engine", "match started");
    }

    pub fn perform(&mut self, action: Action) -> Result<(), BattleError> {
        match action {
            Action::Attack => self.attack(self.ranges.attack.min, self.ranges.attack.max),
            Action::SpecialAttack => self.attack(self.ranges.special.min, self.ranges.special.max),
            Action::Heal => self.heal(),
            Action::SelfDestruct => self.self_destruct(),
        }
    }

    /// Strikes the monster for `[min, max)` and takes retaliation.
    ///
    /// Retaliation is gated on the monster's health before this call, so the
    /// killing blow is still answered. Both log lines are always appended,
    /// monster first.
    pub fn attack(&mut self, min: u32, max: u32) -> Result<(), BattleError> {
        self.ensure_player_alive("attack")?;
        self.ensure_in_progress("attack")?;
        if max < min {
            return Err(reject("attack", BattleError::InvalidRange { min, max }));
        }

        let monster_before = self.state.monster.current();
        let dealt = self.rng.draw(min, max);
        self.state.monster.damage(dealt);

        let retaliation = self.rng.draw(RETALIATION_RANGE.min, RETALIATION_RANGE.max);
        if monster_before > 0 {
            self.state.player.damage(retaliation);
        }

        self.record(LogEntry::damage(Actor::Monster, dealt));
        self.record(LogEntry::damage(Actor::Player, retaliation));
        info!(
            target: "battle_core.engine",
            dealt,
            retaliation,
            player = self.state.player.current(),
            monster = self.state.monster.current(),
            "attack resolved"
        );
        self.settle();
        Ok(())
    }

    pub fn heal(&mut self) -> Result<(), BattleError> {
        self.ensure_player_alive("heal")?;
        self.ensure_in_progress("heal")?;
        if self.state.player.is_full() {
            return Err(reject("heal", BattleError::HealthFull));
        }

        let amount = self.rng.draw(HEAL_RANGE.min, HEAL_RANGE.max);
        self.state.player.heal(amount);
        self.record(LogEntry::heal(Actor::Player, amount));
        info!(
            target: "battle_core.engine",
            amount,
            player = self.state.player.current(),
            "player healed"
        );
        self.settle();
        Ok(())
    }

    pub fn self_destruct(&mut self) -> Result<(), BattleError> {
        self.ensure_player_alive("self_destruct")?;
        self.ensure_in_progress("self_destruct")?;

        self.state.player.deplete();
        self.record(LogEntry::damage(Actor::Player, SELF_DESTRUCT_DAMAGE));
        info!(target: "battle_core.engine", "player self-destructed");
        self.settle();
        Ok(())
    }

    fn ensure_player_alive(&self, op: &'static str) -> Result<(), BattleError> {
        if self.state.player.is_depleted() {
            return Err(reject(op, BattleError::PlayerDefeated));
        }
        Ok(())
    }

    fn ensure_in_progress(&self, op: &'static str) -> Result<(), BattleError> {
        if self.state.outcome.is_terminal() {
            return Err(reject(op, BattleError::MatchOver(self.state.outcome)));
        }
        Ok(())
    }

    fn record(&mut self, entry: LogEntry) {
        self.events.push(BattleEvent::Logged(entry.clone()));
        self.state.log.push(entry);
    }

    // Latches the first terminal outcome.
    fn settle(&mut self) {
        if self.state.outcome.is_terminal() {
            return;
        }
        let outcome = Outcome::classify(
            self.state.player.current(),
            self.state.monster.current(),
        );
        if outcome.is_terminal() {
            self.state.outcome = outcome;
            self.events.push(BattleEvent::Finished(outcome));
            info!(
                target: "battle_core.engine",
                %outcome,
                turns = self.state.log.len(),
                "match finished"
            );
        }
    }
}

fn reject(op: &'static str, err: BattleError) -> BattleError {
    warn!(target: "battle_core.engine", op, error = %err, "action rejected");
    err
}
