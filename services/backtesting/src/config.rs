//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{BacktestError, Result};

/// Index level every series starts from
pub const DEFAULT_BASE_VALUE: f64 = 10_000.0;

/// Length of the generated history
pub const DEFAULT_HISTORY_YEARS: u32 = 3;

/// Longest history the engine will generate
pub const MAX_HISTORY_YEARS: u32 = 100;

/// Annual risk-free rate used by the Sharpe ratio
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;

/// Configuration for [`crate::BacktestEngine`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub base_value: f64,
    pub history_years: u32,
    pub risk_free_rate: f64,   // 0.02 = 2%
    /// Seed for reproducible series. `None` draws fresh noise on every run.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_value: DEFAULT_BASE_VALUE,
            history_years: DEFAULT_HISTORY_YEARS,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading engine config from {}", path.display());

        let raw = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_value.is_finite() || self.base_value <= 0.0 {
            return Err(BacktestError::InvalidConfig(format!(
                "base_value must be positive, got {}",
                self.base_value
            )));
        }
        if self.history_years == 0 || self.history_years > MAX_HISTORY_YEARS {
            return Err(BacktestError::InvalidConfig(format!(
                "history_years must be between 1 and {}, got {}",
                MAX_HISTORY_YEARS, self.history_years
            )));
        }
        if !self.risk_free_rate.is_finite() || self.risk_free_rate < 0.0 {
            return Err(BacktestError::InvalidConfig(format!(
                "risk_free_rate must be a non-negative rate, got {}",
                self.risk_free_rate
            )));
        }
        Ok(())
    }
}
