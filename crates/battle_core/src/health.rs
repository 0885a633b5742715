use serde::Serialize;
use tracing::debug;

pub const MAX_HEALTH: u32 = 100;

/// Health total clamped to `[0, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Starts below max; values above `max` are clamped down.
    pub fn with_current(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
        debug!(
            target: "battle_core.health",
            current = self.current,
            max = self.max,
            "health damaged"
        );
    }

    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
        debug!(
            target: "battle_core.health",
            current = self.current,
            max = self.max,
            "health restored"
        );
    }

    pub fn deplete(&mut self) {
        self.current = 0;
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Fill ratio in whole percent, used for health bars.
    pub fn percent(&self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        (u64::from(self.current) * 100 / u64::from(self.max)) as u32
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(MAX_HEALTH)
    }
}
