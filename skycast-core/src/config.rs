use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::search::SearchOptions;

fn default_min_query_len() -> usize {
    SearchOptions::default().min_query_len
}

fn default_max_results() -> usize {
    SearchOptions::default().max_results
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// min_query_len = 1
/// max_results = 8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// WeatherAPI.com key for live data; absent means offline mode.
    pub api_key: Option<String>,

    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
        }
    }
}

impl Config {
    /// Search tuning as the ranker consumes it.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions { min_query_len: self.min_query_len, max_results: self.max_results }
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.api_key, None);
        assert_eq!(cfg.search_options(), SearchOptions { min_query_len: 1, max_results: 8 });
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: Config = toml::from_str(r#"api_key = "KEY""#).expect("valid TOML");

        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
        assert_eq!(cfg.min_query_len, 1);
        assert_eq!(cfg.max_results, 8);
    }

    #[test]
    fn tuning_overrides_survive_a_roundtrip() {
        let cfg: Config = toml::from_str("min_query_len = 2\nmax_results = 4\n")
            .expect("valid TOML");
        assert_eq!(cfg.search_options(), SearchOptions { min_query_len: 2, max_results: 4 });

        let serialized = toml::to_string_pretty(&cfg).expect("serializes");
        let reparsed: Config = toml::from_str(&serialized).expect("reparses");
        assert_eq!(reparsed.search_options(), cfg.search_options());
    }
}
