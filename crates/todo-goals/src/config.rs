//! Application configuration
//!
//! Loaded from `.todo-goals.toml`, looked up in the current directory first and
//! then in the home directory. Missing or broken files fall back to defaults.

use serde::Deserialize;
use std::{env, path::PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = ".todo-goals.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Log level used when `RUST_LOG` is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Pretty-print the state after every change
    #[serde(default)]
    pub pretty: bool,

    /// Action script to run instead of the built-in demo
    #[serde(default)]
    pub script: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            pretty: false,
            script: None,
        }
    }
}

/// Errors that make a config file unusable
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result of the config lookup: the config to run with, plus where it came
/// from and what went wrong on the way
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: Option<PathBuf>,
    pub error: Option<ConfigError>,
}

impl LoadedConfig {
    /// Report how the config was resolved. Call once logging is up.
    pub fn log_outcome(&self) {
        if let Some(e) = &self.error {
            log::warn!("{}, using defaults", e);
        } else if let Some(path) = &self.path {
            log::info!("Loaded app config from {}", path.display());
        } else {
            log::debug!("Using default app config");
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    ///
    /// Nothing is logged here: this runs before the logger exists.
    pub fn load() -> LoadedConfig {
        Self::load_from(&candidate_paths())
    }

    /// Use the first readable file in `candidates`; a file that fails to
    /// parse yields the defaults together with the parse error.
    pub fn load_from(candidates: &[PathBuf]) -> LoadedConfig {
        let found = candidates
            .iter()
            .find_map(|path| std::fs::read_to_string(path).ok().map(|content| (path, content)));

        let Some((path, content)) = found else {
            return LoadedConfig {
                config: Self::default(),
                path: None,
                error: None,
            };
        };

        match toml::from_str(&content) {
            Ok(config) => LoadedConfig {
                config,
                path: Some(path.clone()),
                error: None,
            },
            Err(source) => LoadedConfig {
                config: Self::default(),
                path: Some(path.clone()),
                error: Some(ConfigError::Parse {
                    path: path.clone(),
                    source,
                }),
            },
        }
    }
}

/// Config file locations in lookup order: CWD, then home directory
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    paths.extend(home_config_path());
    paths
}

fn home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.pretty);
        assert!(config.script.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            log_level = "debug"
            pretty = true
            script = "actions.json"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.pretty);
        assert_eq!(config.script, Some(PathBuf::from("actions.json")));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: AppConfig = toml::from_str("pretty = true").unwrap();
        assert!(config.pretty);
        // Other fields should use defaults
        assert_eq!(config.log_level, "info");
        assert!(config.script.is_none());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "pretty = \"notabool\"");

        let loaded = AppConfig::load_from(&[path.clone()]);

        assert_eq!(loaded.config, AppConfig::default());
        assert_eq!(loaded.path, Some(path.clone()));
        match loaded.error {
            Some(ConfigError::Parse { path: failed, .. }) => assert_eq!(failed, path),
            None => panic!("expected a parse error"),
        }
    }

    #[test]
    fn test_first_readable_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let path = write_config(&dir, "log_level = \"trace\"");

        let loaded = AppConfig::load_from(&[missing, path.clone()]);

        assert_eq!(loaded.config.log_level, "trace");
        assert_eq!(loaded.path, Some(path));
        assert!(loaded.error.is_none());
    }

    #[test]
    fn test_no_config_file_is_default_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&[dir.path().join(CONFIG_FILE)]);

        assert_eq!(loaded.config, AppConfig::default());
        assert!(loaded.path.is_none());
        assert!(loaded.error.is_none());
    }
}
