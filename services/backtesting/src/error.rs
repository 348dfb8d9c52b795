//! Error types for the backtesting engine

use thiserror::Error;

/// Failures at the edges of the engine. The statistics themselves never fail.
#[derive(Debug, Error)]
pub enum BacktestError {
    /// Unknown performance period label
    #[error("Invalid period: {0} (expected one of 1M, 3M, 6M, 1Y, 3Y)")]
    InvalidPeriod(String),

    /// Unknown detail lookback label
    #[error("Invalid lookback window: {0} (expected one of 1Y, 5Y, 10Y)")]
    InvalidWindow(String),

    /// Configuration rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BacktestError>;
