use std::fs;
use std::path::PathBuf;

use battle_session::{run_script, RunOptions, SessionConfig, TurnStatus};

fn scenario(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../scenarios")
        .join(name)
}

#[test]
fn bundled_scenarios_parse() {
    for name in ["opening_exchange.toml", "last_stand.toml", "self_destruct.toml"] {
        let config = SessionConfig::from_path(&scenario(name))
            .unwrap_or_else(|err| panic!("{name}: {err:#}"));
        assert!(!config.script.actions.is_empty(), "{name} has no script");
    }
}

#[test]
fn self_destruct_scenario_ends_in_a_loss() {
    let config = SessionConfig::from_path(&scenario("self_destruct.toml")).unwrap();
    let report = run_script(&config, &RunOptions::new("run-self-destruct")).unwrap();

    assert_eq!(battle_core::Outcome::Lose, report.summary.outcome);
    assert_eq!(0, report.summary.player_health);
    let last = report.log.last().unwrap();
    assert_eq!(100, last.amount());
    assert_eq!(TurnStatus::Skipped, report.turns.last().unwrap().status);
}

#[test]
fn report_path_is_relative_to_the_scenario_file() {
    let path = scenario("last_stand.toml");
    let config = SessionConfig::from_path(&path).unwrap();
    let report = config.report.expect("last_stand writes a report");
    assert_eq!(path.parent().unwrap().join("reports/last_stand.json"), report.path);

    let unreported = SessionConfig::from_path(&scenario("opening_exchange.toml")).unwrap();
    assert!(unreported.report.is_none());
}

#[test]
fn absolute_report_path_is_kept() {
    let dir = std::env::temp_dir().join("battle_session_absolute_report");
    fs::create_dir_all(&dir).unwrap();
    let target = dir.join("out").join("report.json");
    let file = dir.join("absolute.toml");
    fs::write(
        &file,
        format!("[report]\npath = {:?}\n", target.display().to_string()),
    )
    .unwrap();

    let config = SessionConfig::from_path(&file).unwrap();
    assert_eq!(target, config.report.unwrap().path);
}

#[test]
fn missing_file_reports_path() {
    let dir = std::env::temp_dir().join("battle_session_missing");
    let _ = fs::remove_dir_all(&dir);
    let err = SessionConfig::from_path(&dir.join("nope.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}
