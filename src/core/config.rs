//! Configuration management with layered hierarchy

use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::state::Theme;

/// Login delay used when nothing overrides it
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1800;

/// Tracking tick period used when nothing overrides it
pub const DEFAULT_TICK_MS: u64 = 2000;

/// Tracking RNG seed used when nothing overrides it
pub const DEFAULT_TRACKING_SEED: u64 = 42;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config file {path}")]
    #[diagnostic(code(fleet::config::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is malformed: {message}")]
    #[diagnostic(
        code(fleet::config::parse),
        help("keys: theme, login_delay_ms, tick_interval_ms, tracking_seed, default_format")
    )]
    Parse { path: PathBuf, message: String },
}

/// FleetTrack configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color scheme at start
    pub theme: Option<Theme>,

    /// Simulated authentication delay for `login`
    pub login_delay_ms: Option<u64>,

    /// Period between tracking ticks
    pub tick_interval_ms: Option<u64>,

    /// Seed for the tracking simulation
    pub tracking_seed: Option<u64>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order.
    ///
    /// The global file is optional and skipped with a warning when broken;
    /// an explicitly requested file must load.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/fleettrack/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                match Self::load_from(&global_path) {
                    Ok(global) => config.merge(global),
                    Err(e) => tracing::warn!("ignoring global config: {}", e),
                }
            }
        }

        // 3. Explicit --config file
        if let Some(path) = explicit {
            config.merge(Self::load_from(path)?);
        }

        // 4. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Read one YAML config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build the environment layer; unparsable values are skipped
    fn from_env(var: impl Fn(&str) -> Option<String>) -> Self {
        fn number(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<u64> {
            let raw = var(key)?;
            match raw.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    tracing::warn!("ignoring {}={}: not a number", key, raw);
                    None
                }
            }
        }

        Config {
            theme: var("FLEET_THEME").and_then(|t| match t.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("ignoring FLEET_THEME: {}", e);
                    None
                }
            }),
            login_delay_ms: number(&var, "FLEET_LOGIN_DELAY_MS"),
            tick_interval_ms: number(&var, "FLEET_TICK_MS"),
            tracking_seed: number(&var, "FLEET_SEED"),
            default_format: None,
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "fleettrack")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.theme.is_some() {
            self.theme = other.theme;
        }
        if other.login_delay_ms.is_some() {
            self.login_delay_ms = other.login_delay_ms;
        }
        if other.tick_interval_ms.is_some() {
            self.tick_interval_ms = other.tick_interval_ms;
        }
        if other.tracking_seed.is_some() {
            self.tracking_seed = other.tracking_seed;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn login_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.login_delay_ms.unwrap_or(DEFAULT_LOGIN_DELAY_MS))
    }

    /// Tick period, never shorter than 1 ms
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms.unwrap_or(DEFAULT_TICK_MS).max(1))
    }

    pub fn tracking_seed(&self) -> u64 {
        self.tracking_seed.unwrap_or(DEFAULT_TRACKING_SEED)
    }
}
