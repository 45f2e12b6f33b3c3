//! Configuration file loading with precedence handling.

use crate::model::{GeometryError, GeometryTable, ZIndexTable};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "HUDVIEW_CONFIG";

/// Environment variable overriding the initial collapse state.
pub const SIDEBAR_COLLAPSED_ENV_VAR: &str = "HUDVIEW_SIDEBAR_COLLAPSED";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Geometry section describes a layout that cannot be rendered.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/hudview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Start with the sidebar collapsed.
    #[serde(default)]
    pub sidebar_collapsed: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Region dimensions and stacking.
    #[serde(default)]
    pub geometry: Option<GeometrySection>,
}

/// Geometry section from TOML.
///
/// ```toml
/// [geometry]
/// header_height = 2
/// statusbar_height = 1
/// sidebar_width = 28
/// sidebar_width_collapsed = 3
/// transition_duration_ms = 300
///
/// [geometry.z_index]
/// header = 1000
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeometrySection {
    /// Header band height in rows.
    #[serde(default)]
    pub header_height: Option<u16>,

    /// Status bar height in rows.
    #[serde(default)]
    pub statusbar_height: Option<u16>,

    /// Expanded sidebar width in columns.
    #[serde(default)]
    pub sidebar_width: Option<u16>,

    /// Collapsed sidebar width in columns.
    #[serde(default)]
    pub sidebar_width_collapsed: Option<u16>,

    /// Collapse/expand animation length in milliseconds.
    #[serde(default)]
    pub transition_duration_ms: Option<u64>,

    /// Stacking order overrides.
    #[serde(default)]
    pub z_index: Option<ZIndexSection>,
}

/// Z-index overrides from TOML.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ZIndexSection {
    /// Scrollable body.
    #[serde(default)]
    pub main: Option<u16>,
    /// Header band.
    #[serde(default)]
    pub header: Option<u16>,
    /// Sidebar band.
    #[serde(default)]
    pub sidebar: Option<u16>,
    /// Status bar band.
    #[serde(default)]
    pub statusbar: Option<u16>,
}

impl GeometrySection {
    /// Overlay this section on `base`. Does not validate.
    pub fn apply(&self, base: GeometryTable) -> GeometryTable {
        let z_index = match &self.z_index {
            Some(section) => section.apply(base.z_index),
            None => base.z_index,
        };

        GeometryTable {
            header_height: self.header_height.unwrap_or(base.header_height),
            statusbar_height: self.statusbar_height.unwrap_or(base.statusbar_height),
            sidebar_width: self.sidebar_width.unwrap_or(base.sidebar_width),
            sidebar_width_collapsed: self
                .sidebar_width_collapsed
                .unwrap_or(base.sidebar_width_collapsed),
            transition_duration: self
                .transition_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(base.transition_duration),
            z_index,
        }
    }
}

impl ZIndexSection {
    fn apply(&self, base: ZIndexTable) -> ZIndexTable {
        ZIndexTable {
            main: self.main.unwrap_or(base.main),
            header: self.header.unwrap_or(base.header),
            sidebar: self.sidebar.unwrap_or(base.sidebar),
            statusbar: self.statusbar.unwrap_or(base.statusbar),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Start with the sidebar collapsed.
    pub sidebar_collapsed: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Validated geometry table.
    pub geometry: GeometryTable,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            log_file_path: default_log_path(),
            geometry: GeometryTable::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/hudview/hudview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("hudview").join("hudview.log")
    } else {
        PathBuf::from("hudview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/hudview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hudview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `HUDVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/hudview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidGeometry`] if the merged geometry fails
/// validation.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let geometry = match &config.geometry {
        Some(section) => section.apply(defaults.geometry).validate()?,
        None => defaults.geometry,
    };

    Ok(ResolvedConfig {
        sidebar_collapsed: config
            .sidebar_collapsed
            .unwrap_or(defaults.sidebar_collapsed),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        geometry,
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `HUDVIEW_SIDEBAR_COLLAPSED`: `1`/`true`/`yes` or `0`/`false`/`no`
///
/// Unrecognized values are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var(SIDEBAR_COLLAPSED_ENV_VAR) {
        match parse_flag(&value) {
            Some(collapsed) => config.sidebar_collapsed = collapsed,
            None => warn!(
                value = value.as_str(),
                "Ignoring unrecognized {SIDEBAR_COLLAPSED_ENV_VAR}"
            ),
        }
    }

    config
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    collapsed_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(collapsed) = collapsed_override {
        config.sidebar_collapsed = collapsed;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
