mod play;
mod scenarios;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_core::BattleParams;
use battle_session::{run_script, MatchReport, RunOptions, SessionConfig};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use scenarios::ScenarioRegistry;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

#[derive(Parser)]
#[command(version, about = "Fight a monster, one turn at a time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively: attack, special, heal, suicide, restart, quit.
    Play(PlayArgs),
    /// Run a scripted session file and emit a JSON report.
    Simulate(SimulateArgs),
    /// Summarize an existing report.
    Report(ReportArgs),
    /// List scenario files available for `simulate`.
    Scenarios(ScenariosArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// Overrides BATTLE_SEED.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct SimulateArgs {
    /// Session file; defaults to the scenario selected by BATTLE_SCENARIO.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

#[derive(Args)]
struct ScenariosArgs {
    #[arg(long)]
    dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => handle_play(args),
        Commands::Simulate(args) => handle_simulate(args),
        Commands::Report(args) => handle_report(args),
        Commands::Scenarios(args) => handle_scenarios(args),
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or(DEFAULT_FILTER)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn handle_play(args: PlayArgs) -> Result<()> {
    init_tracing(None);
    let mut params = BattleParams::from_env();
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    let mut engine = params.engine();
    let stdin = io::stdin();
    play::run(&mut engine, stdin.lock(), &mut io::stdout().lock())
}

fn handle_simulate(args: SimulateArgs) -> Result<()> {
    let config_path = match args.config {
        Some(path) => path,
        None => ScenarioRegistry::discover(scenarios::default_root())
            .active_path()
            .context("no --config given and BATTLE_SCENARIO names no scenario")?,
    };
    let config = SessionConfig::from_path(&config_path)?;
    init_tracing(config.trace_filter());

    let run_id = args
        .id
        .unwrap_or_else(|| format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S")));
    let mut options = RunOptions::new(run_id);
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }

    let report = run_script(&config, &options)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(report_cfg) = config.report.as_ref() {
        if let Some(parent) = report_cfg.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&report_cfg.path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", report_cfg.path.display()))?;
        println!("Report written to {}", report_cfg.path.display());
    }

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    init_tracing(None);
    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let report: MatchReport = serde_json::from_str(&data)?;
    let summary = &report.summary;
    println!(
        "Report {} (seed {}) -> {} | player {} monster {} | {} applied, {} rejected",
        report.id,
        report.seed,
        summary.outcome,
        summary.player_health,
        summary.monster_health,
        summary.applied_turns,
        summary.rejected_turns,
    );
    Ok(())
}

fn handle_scenarios(args: ScenariosArgs) -> Result<()> {
    init_tracing(Some("info"));
    let root = args
        .dir
        .unwrap_or_else(|| scenarios::default_root().to_path_buf());
    let registry = ScenarioRegistry::discover(root);
    registry.log_summary();
    for name in &registry.available {
        let marker = if registry.active.as_deref() == Some(name.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{marker} {name}");
    }
    Ok(())
}
