//! Test utilities and factories for backtesting tests

use chrono::{Days, NaiveDate};
use snapfolio_backtesting::*;

/// Fixed end date so window lengths are known in advance
pub fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

/// Factory for creating test holdings
pub struct TestHoldingFactory;

impl TestHoldingFactory {
    pub fn apple() -> Holding {
        Holding::new("AAPL", "Apple Inc.", 225.50).with_sector("Technology")
    }

    pub fn tech_basket() -> Vec<Holding> {
        vec![
            Self::apple(),
            Holding::new("MSFT", "Microsoft", 415.10).with_sector("Technology"),
            Holding::new("NVDA", "NVIDIA", 121.40).with_sector("Semiconductors / Tech"),
        ]
    }

    pub fn mixed_basket() -> Vec<Holding> {
        vec![
            Holding::new("ISRG", "Intuitive Surgical", 480.0).with_sector("Healthcare"),
            Holding::new("ENPH", "Enphase Energy", 105.0).with_sector("Energy"),
            Holding::new("GOOGL", "Alphabet", 170.0).with_sector("Technology"),
            Holding::new("BRK.B", "Berkshire Hathaway", 440.0),
        ]
    }
}

/// Factory for building series with known values
pub struct TestSeriesFactory;

impl TestSeriesFactory {
    /// Same values for all three series, one point per day
    pub fn flat_benchmarks(portfolio: &[f64], benchmark: f64) -> Vec<DailyPoint> {
        Self::build(portfolio.iter().map(|&p| (p, benchmark, benchmark)))
    }

    /// Portfolio values with benchmarks tracking them exactly
    pub fn from_portfolio(portfolio: &[f64]) -> Vec<DailyPoint> {
        Self::build(portfolio.iter().map(|&p| (p, p, p)))
    }

    pub fn from_values(values: &[(f64, f64, f64)]) -> Vec<DailyPoint> {
        Self::build(values.iter().copied())
    }

    /// Steady compounding growth at `daily_rate` for `days` points
    pub fn compounding(days: usize, daily_rate: f64) -> Vec<DailyPoint> {
        Self::build((0..days).map(|d| {
            let v = 10_000.0 * (1.0 + daily_rate).powi(d as i32);
            (v, v, v)
        }))
    }

    fn build(values: impl Iterator<Item = (f64, f64, f64)>) -> Vec<DailyPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        values
            .enumerate()
            .map(|(i, (portfolio, sp500, nasdaq))| DailyPoint {
                date: start + Days::new(i as u64),
                portfolio_value: portfolio,
                sp500_value: sp500,
                nasdaq_value: nasdaq,
            })
            .collect()
    }
}

/// Deterministic LCG noise for reproducible tests
pub struct TestNoise {
    state: u64,
}

impl TestNoise {
    pub fn new() -> Self {
        Self { state: 12345 }
    }
}

impl Default for TestNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for TestNoise {
    fn next_shock(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345);
        ((self.state / 65536) % 1000) as f64 / 1000.0 - 0.5
    }
}

/// Noise source that never shocks, leaving only trend and cycle
pub struct SilentNoise;

impl NoiseSource for SilentNoise {
    fn next_shock(&mut self) -> f64 {
        0.0
    }
}

/// Test assertion helpers
pub struct TestAssertions;

impl TestAssertions {
    /// Assert that two f64 values are approximately equal
    pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= tolerance,
            "Values not approximately equal: actual={}, expected={}, diff={}, tolerance={}",
            actual, expected, diff, tolerance
        );
    }

    /// Assert that a performance metric is within reasonable bounds
    pub fn assert_metric_reasonable(metric: f64, name: &str, min: f64, max: f64) {
        assert!(
            metric >= min && metric <= max,
            "Metric {} = {} is outside reasonable bounds [{}, {}]",
            name, metric, min, max
        );
    }

    /// Assert one point per calendar day in ascending order
    pub fn assert_contiguous_days(series: &[DailyPoint]) {
        for pair in series.windows(2) {
            assert_eq!(
                (pair[1].date - pair[0].date).num_days(),
                1,
                "Gap between {} and {}",
                pair[0].date,
                pair[1].date
            );
        }
    }
}
