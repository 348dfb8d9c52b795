//! Synthetic index backtesting for Snapfolio
//!
//! Turns the holdings of a generated index into a simulated daily history
//! for the index and two benchmarks, then summarizes it:
//!
//! - [`generator`] builds the daily portfolio / S&P 500 / NASDAQ walks
//! - [`performance`] computes return and risk statistics per trailing period
//! - [`detail`] rebases a lookback window into chart data
//!
//! Everything is synchronous and owns its buffers per call. The only
//! non-determinism is the noise source, which is unseeded unless a seed
//! is configured.

pub mod config;
pub mod detail;
pub mod error;
pub mod generator;
pub mod heuristics;
pub mod noise;
pub mod performance;
pub mod stats;
pub mod types;

use chrono::{NaiveDate, Utc};
use tracing::info;

pub use config::EngineConfig;
pub use detail::get_detailed_backtest;
pub use error::{BacktestError, Result};
pub use generator::{SeriesWindow, generate_series, generate_series_with};
pub use noise::{NoiseSource, SeededNoise, ThreadNoise};
pub use performance::{compute_performance, compute_performance_with};
pub use types::{
    BacktestingData, ChartPoint, DailyPoint, DetailedBacktestResult, Holding, LookbackWindow,
    PerformanceSummary, PeriodKey, PeriodResult,
};

/// Generate a history ending today and summarize it, with default settings
pub fn generate_backtesting_data(stocks: &[Holding], index_name: &str) -> BacktestingData {
    let historical = generate_series(stocks, index_name);
    let performance = compute_performance(&historical);
    BacktestingData {
        historical,
        performance,
    }
}

/// Configured entry point for both backtest operations
#[derive(Debug, Clone, Default)]
pub struct BacktestEngine {
    config: EngineConfig,
}

impl BacktestEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        info!("Initializing BacktestEngine with config: {:?}", config);
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Backtest ending today. Uses the configured seed if there is one.
    pub fn generate(&self, stocks: &[Holding], index_name: &str) -> BacktestingData {
        self.generate_as_of(stocks, index_name, Utc::now().date_naive())
    }

    pub fn generate_as_of(&self, stocks: &[Holding], index_name: &str, as_of: NaiveDate) -> BacktestingData {
        match self.config.seed {
            Some(seed) => self.generate_with(stocks, index_name, as_of, &mut SeededNoise::new(seed)),
            None => self.generate_with(stocks, index_name, as_of, &mut ThreadNoise::new()),
        }
    }

    pub fn generate_with<N: NoiseSource>(
        &self,
        stocks: &[Holding],
        index_name: &str,
        as_of: NaiveDate,
        noise: &mut N,
    ) -> BacktestingData {
        let window = SeriesWindow {
            as_of,
            years: self.config.history_years,
            base_value: self.config.base_value,
        };
        let historical = generate_series_with(stocks, index_name, window, noise);
        let performance = compute_performance_with(&historical, self.config.risk_free_rate);

        let year = performance.get(PeriodKey::Y1);
        info!(
            "Backtest complete for '{}' - 1Y Return: {:.2}%, Alpha: {:.2}, Sharpe: {:.4}",
            index_name, year.portfolio_return, year.alpha, year.sharpe_ratio
        );

        BacktestingData {
            historical,
            performance,
        }
    }

    pub fn detailed(&self, historical: &[DailyPoint], window: LookbackWindow) -> DetailedBacktestResult {
        get_detailed_backtest(historical, window)
    }
}
