use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

/// Scenario files (`*.toml`) found directly under a directory.
#[derive(Debug)]
pub struct ScenarioRegistry {
    pub root: PathBuf,
    pub available: Vec<String>,
    pub active: Option<String>,
}

impl ScenarioRegistry {
    pub fn discover(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let active = std::env::var("BATTLE_SCENARIO").ok();
        Self::discover_with_active(root, active.as_deref())
    }

    fn discover_with_active(root: PathBuf, requested: Option<&str>) -> Self {
        let mut available: Vec<String> = WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|entry| {
                entry
                    .path()
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_owned)
            })
            .collect();
        available.sort();

        let active = requested
            .and_then(|name| available.iter().find(|candidate| *candidate == name))
            .cloned();

        Self {
            root,
            available,
            active,
        }
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.toml"))
    }

    pub fn active_path(&self) -> Option<PathBuf> {
        self.active.as_deref().map(|name| self.path_of(name))
    }

    pub fn log_summary(&self) {
        if self.available.is_empty() {
            info!(
                target: "battle_cli.scenarios",
                "No scenarios under {}. Add a <name>.toml session file there",
                self.root.display()
            );
            return;
        }
        info!(
            target: "battle_cli.scenarios",
            "Scenarios: {:?} (active: {})",
            self.available,
            self.active.as_deref().unwrap_or("none (set BATTLE_SCENARIO)"),
        );
    }
}

pub fn default_root() -> &'static Path {
    Path::new("scenarios")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenarios")
    }

    #[test]
    fn discovers_bundled_scenarios_sorted() {
        let registry = ScenarioRegistry::discover_with_active(bundled(), Some("last_stand"));
        assert_eq!(
            vec!["last_stand", "opening_exchange", "self_destruct"],
            registry.available
        );
        assert_eq!(Some("last_stand"), registry.active.as_deref());
        assert!(registry.active_path().unwrap().ends_with("last_stand.toml"));
    }

    #[test]
    fn unknown_request_is_not_active() {
        let registry = ScenarioRegistry::discover_with_active(bundled(), Some("boss_rush"));
        assert!(registry.active.is_none());
    }

    #[test]
    fn missing_root_is_empty() {
        let registry = ScenarioRegistry::discover_with_active(PathBuf::from("no/such/dir"), None);
        assert!(registry.available.is_empty());
    }
}
