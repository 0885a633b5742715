pub mod config;
pub mod report;
pub mod runner;

pub use config::{ConfigError, SessionConfig};
pub use report::{MatchReport, MatchSummary, TurnRecord, TurnStatus};
pub use runner::{play_script, run_script, RunOptions};
