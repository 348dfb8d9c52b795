//! Data model shared by the generator, aggregator and detail transform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::BacktestError;

/// One constituent of a synthetic index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    /// Absolute day change
    #[serde(default)]
    pub change: Option<f64>,
    /// Day change in percent
    #[serde(default)]
    pub change_percent: Option<f64>,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            price,
            sector: None,
            market_cap: None,
            change: None,
            change_percent: None,
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }
}

/// One simulated calendar day for the three parallel series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub portfolio_value: f64,
    pub sp500_value: f64,
    pub nasdaq_value: f64,
}

/// Named trailing window used for the performance summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PeriodKey {
    #[serde(rename = "1M")]
    M1,
    #[serde(rename = "3M")]
    M3,
    #[serde(rename = "6M")]
    M6,
    #[serde(rename = "1Y")]
    Y1,
    #[serde(rename = "3Y")]
    Y3,
}

impl PeriodKey {
    pub const ALL: [PeriodKey; 5] = [
        PeriodKey::M1,
        PeriodKey::M3,
        PeriodKey::M6,
        PeriodKey::Y1,
        PeriodKey::Y3,
    ];

    /// Calendar days covered by the window
    pub const fn days(self) -> usize {
        match self {
            PeriodKey::M1 => 30,
            PeriodKey::M3 => 90,
            PeriodKey::M6 => 180,
            PeriodKey::Y1 => 365,
            PeriodKey::Y3 => 1095,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PeriodKey::M1 => "1M",
            PeriodKey::M3 => "3M",
            PeriodKey::M6 => "6M",
            PeriodKey::Y1 => "1Y",
            PeriodKey::Y3 => "3Y",
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PeriodKey {
    type Err = BacktestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PeriodKey::ALL
            .into_iter()
            .find(|key| key.label() == s)
            .ok_or_else(|| BacktestError::InvalidPeriod(s.to_string()))
    }
}

/// Lookback window for the chart-ready detail transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LookbackWindow {
    #[serde(rename = "1Y")]
    Y1,
    #[serde(rename = "5Y")]
    Y5,
    #[default]
    #[serde(rename = "10Y")]
    Y10,
}

impl LookbackWindow {
    pub const ALL: [LookbackWindow; 3] = [LookbackWindow::Y1, LookbackWindow::Y5, LookbackWindow::Y10];

    pub const fn days(self) -> usize {
        match self {
            LookbackWindow::Y1 => 365,
            LookbackWindow::Y5 => 1825,
            LookbackWindow::Y10 => 3650,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LookbackWindow::Y1 => "1Y",
            LookbackWindow::Y5 => "5Y",
            LookbackWindow::Y10 => "10Y",
        }
    }
}

impl fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LookbackWindow {
    type Err = BacktestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LookbackWindow::ALL
            .into_iter()
            .find(|window| window.label() == s)
            .ok_or_else(|| BacktestError::InvalidWindow(s.to_string()))
    }
}

/// Summary statistics for one trailing period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResult {
    pub period: PeriodKey,
    /// Percent
    pub portfolio_return: f64,
    pub sp500_return: f64,
    pub nasdaq_return: f64,
    /// Portfolio return minus S&P 500 return, in percentage points
    pub alpha: f64,
    pub beta: f64,
    /// Daily-scale ratio, not annualized
    pub sharpe_ratio: f64,
    /// Positive percent
    pub max_drawdown: f64,
    /// Annualized percent
    pub volatility: f64,
}

impl PeriodResult {
    /// Placeholder used when a period has fewer than two points
    pub fn empty(period: PeriodKey) -> Self {
        Self {
            period,
            portfolio_return: 0.0,
            sp500_return: 0.0,
            nasdaq_return: 0.0,
            alpha: 0.0,
            beta: 0.0,
            sharpe_ratio: 0.0,
            max_drawdown: 0.0,
            volatility: 0.0,
        }
    }
}

/// Per-period results keyed by label. Always holds every [`PeriodKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<PeriodKey, PeriodResult>",
    into = "BTreeMap<PeriodKey, PeriodResult>"
)]
pub struct PerformanceSummary(BTreeMap<PeriodKey, PeriodResult>);

impl PerformanceSummary {
    /// Fills any period missing from `computed` with its zero record
    pub fn assemble(mut computed: BTreeMap<PeriodKey, PeriodResult>) -> Self {
        for key in PeriodKey::ALL {
            computed.entry(key).or_insert_with(|| PeriodResult::empty(key));
        }
        Self(computed)
    }

    pub fn get(&self, key: PeriodKey) -> &PeriodResult {
        // assemble() guarantees every key
        &self.0[&key]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PeriodKey, &PeriodResult)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<PeriodKey, PeriodResult>> for PerformanceSummary {
    fn from(map: BTreeMap<PeriodKey, PeriodResult>) -> Self {
        Self::assemble(map)
    }
}

impl From<PerformanceSummary> for BTreeMap<PeriodKey, PeriodResult> {
    fn from(summary: PerformanceSummary) -> Self {
        summary.0
    }
}

impl std::ops::Index<PeriodKey> for PerformanceSummary {
    type Output = PeriodResult;

    fn index(&self, key: PeriodKey) -> &Self::Output {
        self.get(key)
    }
}

/// One chart record of the detail transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// YYYY-MM-DD
    pub date: String,
    /// Portfolio return since slice start, percent
    pub asset: f64,
    /// S&P 500 return since slice start, percent
    pub benchmark: f64,
    /// Portfolio drawdown from the slice's running peak, negative percent
    pub drawdown: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedBacktestResult {
    pub chart_data: Vec<ChartPoint>,
    pub total_return: f64,
    /// Negative percent
    pub max_drawdown: f64,
    pub sp500_total_return: f64,
    /// Negative percent
    pub sp500_max_drawdown: f64,
}

/// Output of a full backtest run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestingData {
    pub historical: Vec<DailyPoint>,
    pub performance: PerformanceSummary,
}

impl BacktestingData {
    /// Last `days` points of the history, for callers that persist a slice
    pub fn trailing_history(&self, days: usize) -> &[DailyPoint] {
        trailing(&self.historical, days)
    }
}

/// Suffix of at most `len` elements
pub(crate) fn trailing<T>(items: &[T], len: usize) -> &[T] {
    &items[items.len().saturating_sub(len)..]
}
