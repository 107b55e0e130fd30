use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};

/// Runtime configuration for git-changelog.
///
/// Everything here has a sensible default; a configuration file is never
/// required. Loaded once at startup and threaded through as a value, never
/// read from global state.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Cache directory for cloned repositories
    #[serde(default = "default_workdir")]
    pub workdir: String,

    #[serde(default)]
    pub filters: FiltersConfig,
}

/// Default filter patterns applied when none are given on the command line.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct FiltersConfig {
    #[serde(default, rename = "match")]
    pub match_patterns: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_workdir() -> String {
    "._repos".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workdir: default_workdir(),
            filters: FiltersConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `.changelog.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is a fatal configuration
/// error, not a silent fallback to defaults.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)
            .map_err(|e| ChangelogError::config(format!("cannot read '{}': {}", path, e)))?
    } else if Path::new("./changelog.toml").exists() {
        fs::read_to_string("./changelog.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".changelog.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| ChangelogError::config(format!("invalid configuration: {}", e)))
}
