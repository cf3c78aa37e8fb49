//! Dashboard configuration.
//!
//! Loaded from JSON; every key is optional and falls back to the built-in
//! default.
//!
//! ```json
//! {
//!   "data_path": "data/GlobalWeatherRepository.csv",
//!   "fallback_paths": ["../GlobalWeatherRepository.csv"],
//!   "cache_dataset": true,
//!   "heat_alert_celsius": 35.0,
//!   "wind_alert_kph": 30.0
//! }
//! ```

use crate::error::ConfigError;
use crate::rotation::{DEFAULT_IMAGES, IMAGE_COUNT};
use crate::session::{default_credentials, Credential};
use cs_data::{AlertThresholds, DatasetLoader};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "GlobalWeatherRepository.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Primary dataset location.
    pub data_path: PathBuf,
    /// Tried in order when `data_path` does not exist.
    pub fallback_paths: Vec<PathBuf>,
    /// Keep the parsed dataset between renders.
    pub cache_dataset: bool,
    /// Rotation images, in display order.
    pub images: Vec<String>,
    /// Accounts every new session starts with.
    pub seed_users: BTreeMap<String, Credential>,
    pub heat_alert_celsius: f64,
    pub wind_alert_kph: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            fallback_paths: vec![Path::new("..").join(DEFAULT_DATA_FILE)],
            cache_dataset: true,
            images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
            seed_users: default_credentials(),
            heat_alert_celsius: AlertThresholds::default().heat_celsius,
            wind_alert_kph: AlertThresholds::default().wind_kph,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("[ClimateScope] config: Loaded {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.len() != IMAGE_COUNT {
            return Err(ConfigError::ImageCount {
                expected: IMAGE_COUNT,
                found: self.images.len(),
            });
        }
        if self.seed_users.is_empty() {
            return Err(ConfigError::NoSeedUsers);
        }
        Ok(())
    }

    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds {
            heat_celsius: self.heat_alert_celsius,
            wind_kph: self.wind_alert_kph,
        }
    }

    /// Loader over `data_path` and the fallbacks.
    pub fn loader(&self) -> DatasetLoader {
        DatasetLoader::new(&self.data_path)
            .with_fallbacks(self.fallback_paths.iter().cloned())
            .with_cache(self.cache_dataset)
    }
}
