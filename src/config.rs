use crate::services::KeyboardPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network file opened at startup (overridden by the first CLI argument)
    pub network_path: Option<String>,
    /// Keyboard dispatch policy: "forward" or "delete_intercept"
    pub keyboard_policy: KeyboardPolicy,
    /// Fail when a selection arrives before the properties panel is bound.
    /// Unset means: strict in debug builds, lenient in release builds.
    pub strict_panel_binding: Option<bool>,
    /// Log level written to the log file (error, warn, info, debug, trace)
    pub log_level: String,
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
    /// Show the node-list panel at startup
    pub show_node_list: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network_path: None,
            keyboard_policy: KeyboardPolicy::Forward,
            strict_panel_binding: None,
            log_level: "info".to_string(),
            tick_rate_ms: 100,
            show_node_list: true,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".netedit-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("netedit.log"))
    }

    pub fn load() -> Option<Config> {
        Self::load_from(Self::config_path()?)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Option<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    pub fn strict_panel_binding(&self) -> bool {
        self.strict_panel_binding.unwrap_or(cfg!(debug_assertions))
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            network_path: Some("/tmp/office.json".to_string()),
            keyboard_policy: KeyboardPolicy::DeleteIntercept,
            strict_panel_binding: Some(false),
            ..Config::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(Config::load_from(&path), Some(config));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"keyboard_policy": "delete_intercept"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.keyboard_policy, KeyboardPolicy::DeleteIntercept);
        assert_eq!(config.tick_rate_ms, 100);
        assert!(config.show_node_list);
    }

    #[test]
    fn test_missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_from(dir.path().join("absent.json")), None);
    }

    #[test]
    fn test_log_level_filter_falls_back_to_info() {
        let mut config = Config::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_explicit_strict_binding_wins() {
        let config = Config {
            strict_panel_binding: Some(true),
            ..Config::default()
        };
        assert!(config.strict_panel_binding());
    }
}
