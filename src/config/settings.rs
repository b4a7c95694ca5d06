use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{validate_settings, ScoringConfig};
use crate::error::AppError;

pub const ENV_PREFIX: &str = "CLIMATE_RISK";
pub const DEFAULT_CONFIG_DIR: &str = "config";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub noise: NoiseSettings,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    /// One of `json`, `pretty`, `compact`.
    pub format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseMode {
    /// Fresh entropy per process; scores vary between runs.
    Random,
    /// Reproducible sequence from `seed`.
    Seeded,
    /// Always the middle of the noise span.
    Midpoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseSettings {
    pub mode: NoiseMode,
    pub seed: Option<u64>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl Default for NoiseSettings {
    fn default() -> Self {
        NoiseSettings {
            mode: NoiseMode::Random,
            seed: None,
        }
    }
}

impl Settings {
    /// Load from `./config` and the environment.
    pub fn new() -> Result<Self, AppError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_DIR))
    }

    /// Layered load: built-in defaults, then `<dir>/default.*`, then
    /// `<dir>/local.*`, then `CLIMATE_RISK__*` environment variables.
    pub fn load_from(dir: &Path) -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join("local")).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        validate_settings(&settings)?;
        Ok(settings)
    }
}
