use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::PipelineType;

/// Top-level configuration loaded from `~/.velocity/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub health: HealthConfig,
}

impl Config {
    /// Load config from `~/.velocity/config.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.health.validate()
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".velocity")
            .join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_project_name() -> String {
    "velocity".into()
}
fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Pipeline shown when the board opens.
    #[serde(default = "default_pipeline")]
    pub default_pipeline: PipelineType,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_pipeline: default_pipeline(),
        }
    }
}

fn default_pipeline() -> PipelineType {
    PipelineType::Pitch
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: u32,
    #[serde(default = "default_rotting_after_days")]
    pub rotting_after_days: u32,
    /// How long a freshly moved card counts as "just dropped".
    #[serde(default = "default_highlight_window_ms")]
    pub highlight_window_ms: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            stale_after_days: default_stale_after_days(),
            rotting_after_days: default_rotting_after_days(),
            highlight_window_ms: default_highlight_window_ms(),
        }
    }
}

impl HealthConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stale_after_days == 0 {
            return Err(ConfigError::Validation(
                "health.stale_after_days must be at least 1".to_string(),
            ));
        }
        if self.stale_after_days >= self.rotting_after_days {
            return Err(ConfigError::Validation(format!(
                "health.stale_after_days ({}) must be less than health.rotting_after_days ({})",
                self.stale_after_days, self.rotting_after_days
            )));
        }
        if self.highlight_window_ms == 0 {
            return Err(ConfigError::Validation(
                "health.highlight_window_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_stale_after_days() -> u32 {
    3
}
fn default_rotting_after_days() -> u32 {
    7
}
fn default_highlight_window_ms() -> u64 {
    800
}
