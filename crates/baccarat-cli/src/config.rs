use baccarat_core::model::shoe::{DEFAULT_DECKS, MAX_DECKS};
use baccarat_core::{AdvisorSettings, KellyConfig, PayoutTable};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_TELEMETRY_PATH: &str = "baccarat-telemetry.jsonl";

/// Root advisor configuration loaded from YAML. Every block is optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdvisorConfig {
    pub shoe: ShoeConfig,
    pub payouts: PayoutTable,
    pub commission_rate: f64,
    pub capital: u64,
    pub kelly: KellyConfig,
    pub logging: LoggingConfig,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        let settings = AdvisorSettings::default();
        Self {
            shoe: ShoeConfig::default(),
            payouts: settings.payouts,
            commission_rate: settings.commission_rate,
            capital: settings.capital,
            kelly: settings.kelly,
            logging: LoggingConfig::default(),
        }
    }
}

impl AdvisorConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: AdvisorConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        self.shoe.validate()?;
        validate_payouts(&self.payouts)?;
        if !self.commission_rate.is_finite() || self.commission_rate < 0.0 {
            return Err(ValidationError::InvalidField {
                field: "commission_rate".to_string(),
                message: format!("must be a non-negative percentage, got {}", self.commission_rate),
            });
        }
        self.kelly
            .validate()
            .map_err(|err| ValidationError::InvalidField {
                field: "kelly".to_string(),
                message: err.to_string(),
            })?;
        self.logging.normalize();
        Ok(())
    }

    pub fn settings(&self) -> AdvisorSettings {
        AdvisorSettings {
            payouts: self.payouts.clone(),
            commission_rate: self.commission_rate,
            capital: self.capital,
            kelly: self.kelly,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ShoeConfig {
    #[serde(default = "default_decks")]
    pub decks: u8,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            decks: default_decks(),
        }
    }
}

impl ShoeConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.decks == 0 || self.decks > MAX_DECKS {
            return Err(ValidationError::InvalidField {
                field: "shoe.decks".to_string(),
                message: format!("must be between 1 and {MAX_DECKS}"),
            });
        }
        Ok(())
    }
}

fn default_decks() -> u8 {
    DEFAULT_DECKS
}

fn validate_payouts(payouts: &PayoutTable) -> Result<(), ValidationError> {
    for (label, value) in [
        ("payouts.banker", payouts.banker),
        ("payouts.player", payouts.player),
        ("payouts.tie", payouts.tie),
        ("payouts.player_pair", payouts.player_pair),
        ("payouts.banker_pair", payouts.banker_pair),
        ("payouts.super6", payouts.super6),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(ValidationError::InvalidField {
                field: label.to_string(),
                message: format!("net odds must be positive, got {value}"),
            });
        }
    }

    for (&point, &value) in &payouts.tie_bonus {
        if point > 9 {
            return Err(ValidationError::InvalidField {
                field: format!("payouts.tie_bonus[{point}]"),
                message: "tied point must be between 0 and 9".to_string(),
            });
        }
        if !(value.is_finite() && value > 0.0) {
            return Err(ValidationError::InvalidField {
                field: format!("payouts.tie_bonus[{point}]"),
                message: format!("net odds must be positive, got {value}"),
            });
        }
    }
    Ok(())
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    #[serde(default = "default_telemetry_path")]
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
            path: default_telemetry_path(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn default_telemetry_path() -> PathBuf {
    PathBuf::from(DEFAULT_TELEMETRY_PATH)
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
