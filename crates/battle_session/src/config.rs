use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use battle_core::{
    Action, ActionRanges, BattleParams, DamageRange, MatchState, ParseActionError, MAX_HEALTH,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("script step {index}: {source}")]
    UnknownAction {
        index: usize,
        #[source]
        source: ParseActionError,
    },
    #[error("{action} range {range} has max below min")]
    InvalidRange { action: &'static str, range: DamageRange },
    #[error("{side} health {value} is above the maximum")]
    HealthOutOfBounds { side: &'static str, value: u32 },
}

/// A scripted session, usually loaded from a TOML scenario file.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SessionConfig {
    #[serde(default, rename = "match")]
    pub battle: MatchConfig,
    #[serde(default)]
    pub actions: ActionsConfig,
    #[serde(default)]
    pub script: ScriptConfig,
    #[serde(default)]
    pub report: Option<ReportConfig>,
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

impl SessionConfig {
    /// Loads and validates a session file. A relative `[report] path` is
    /// resolved against the directory holding the file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read session config {}", path.display()))?;
        let mut cfg = Self::parse(&data)
            .with_context(|| format!("invalid session config {}", path.display()))?;
        if let (Some(report), Some(base)) = (cfg.report.as_mut(), path.parent()) {
            report.path = base.join(&report.path);
        }
        Ok(cfg)
    }

    pub fn parse(data: &str) -> Result<Self> {
        let cfg: SessionConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = self.ranges();
        for (action, range) in [("attack", ranges.attack), ("special", ranges.special)] {
            if !range.is_valid() {
                return Err(ConfigError::InvalidRange { action, range });
            }
        }
        for (side, value) in [
            ("player", self.battle.player_health),
            ("monster", self.battle.monster_health),
        ] {
            if let Some(value) = value.filter(|v| *v > MAX_HEALTH) {
                return Err(ConfigError::HealthOutOfBounds { side, value });
            }
        }
        self.script_actions().map(|_| ())
    }

    pub fn seed(&self) -> u64 {
        self.battle.seed.unwrap_or_else(|| BattleParams::from_env().seed)
    }

    pub fn ranges(&self) -> ActionRanges {
        let defaults = ActionRanges::default();
        ActionRanges {
            attack: self.actions.attack.unwrap_or(defaults.attack),
            special: self.actions.special.unwrap_or(defaults.special),
        }
    }

    pub fn initial_state(&self) -> MatchState {
        MatchState::with_health(
            self.battle.player_health.unwrap_or(MAX_HEALTH),
            self.battle.monster_health.unwrap_or(MAX_HEALTH),
        )
    }

    pub fn script_actions(&self) -> Result<Vec<Action>, ConfigError> {
        self.script
            .actions
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.parse()
                    .map_err(|source| ConfigError::UnknownAction { index, source })
            })
            .collect()
    }

    pub fn trace_filter(&self) -> Option<&str> {
        self.telemetry.as_ref()?.trace_filter.as_deref()
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MatchConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub player_health: Option<u32>,
    #[serde(default)]
    pub monster_health: Option<u32>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ActionsConfig {
    #[serde(default)]
    pub attack: Option<DamageRange>,
    #[serde(default)]
    pub special: Option<DamageRange>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScriptConfig {
    #[serde(default)]
    pub actions: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Relative to the session file when loaded through [`SessionConfig::from_path`].
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub trace_filter: Option<String>,
}
