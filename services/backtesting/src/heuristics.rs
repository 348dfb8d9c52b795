//! Growth and volatility heuristics for the synthetic series
//!
//! The index label picks a theme bucket, then the sector mix of the
//! holdings nudges growth and volatility upward.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Holding;

/// Parameters of one synthetic walk. Growth and volatility are annual percents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesParams {
    pub growth: f64,
    pub volatility: f64,
    /// Coefficient of the instantaneous cycle effect
    pub cycle_effect: f64,
    /// Coefficient of the cycle term carried into the cumulative return
    pub cycle_carry: f64,
}

impl SeriesParams {
    pub const fn new(growth: f64, volatility: f64, cycle: f64) -> Self {
        Self {
            growth,
            volatility,
            cycle_effect: cycle,
            cycle_carry: cycle,
        }
    }
}

pub const SP500_PARAMS: SeriesParams = SeriesParams::new(10.0, 16.0, 0.08);

// Cycle effect is 0.12 but only 0.1 is carried into the value.
pub const NASDAQ_PARAMS: SeriesParams = SeriesParams {
    growth: 11.5,
    volatility: 22.0,
    cycle_effect: 0.12,
    cycle_carry: 0.1,
};

pub const PORTFOLIO_CYCLE: f64 = 0.1;

/// Theme bucket chosen from keywords in the index label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeBucket {
    Technology,
    CleanEnergy,
    Healthcare,
    Broad,
}

impl ThemeBucket {
    /// Case-insensitive substring match, first hit wins
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("ai") || label.contains("technology") {
            ThemeBucket::Technology
        } else if label.contains("energy") || label.contains("clean") {
            ThemeBucket::CleanEnergy
        } else if label.contains("healthcare") {
            ThemeBucket::Healthcare
        } else {
            ThemeBucket::Broad
        }
    }

    /// (growth %, volatility %)
    pub const fn base_rates(self) -> (f64, f64) {
        match self {
            ThemeBucket::Technology => (12.0, 25.0),
            ThemeBucket::CleanEnergy => (10.0, 30.0),
            ThemeBucket::Healthcare => (9.0, 18.0),
            ThemeBucket::Broad => (8.0, 15.0),
        }
    }
}

/// Fraction of holdings per sector keyword
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectorWeights {
    pub tech: f64,
    pub health: f64,
    pub energy: f64,
}

impl SectorWeights {
    /// Every weight divides by the full holding count, sector or not.
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        if holdings.is_empty() {
            return Self::default();
        }

        let total = holdings.len() as f64;
        let share = |keyword: &str| {
            let matches = holdings
                .iter()
                .filter(|h| {
                    h.sector
                        .as_deref()
                        .is_some_and(|s| s.to_lowercase().contains(keyword))
                })
                .count();
            matches as f64 / total
        };

        Self {
            tech: share("tech"),
            health: share("health"),
            energy: share("energy"),
        }
    }

    pub fn growth_boost(&self) -> f64 {
        self.tech * 4.0 + self.health * 1.0 + self.energy * 2.0
    }

    pub fn volatility_boost(&self) -> f64 {
        self.tech * 10.0 + self.health * 3.0 + self.energy * 15.0
    }
}

/// Portfolio walk parameters for the given holdings and index label
pub fn portfolio_params(holdings: &[Holding], index_label: &str) -> SeriesParams {
    let bucket = ThemeBucket::from_label(index_label);
    let (base_growth, base_volatility) = bucket.base_rates();
    let weights = SectorWeights::from_holdings(holdings);

    let params = SeriesParams::new(
        base_growth + weights.growth_boost(),
        base_volatility + weights.volatility_boost(),
        PORTFOLIO_CYCLE,
    );

    debug!(
        "Portfolio params for '{}': bucket {:?}, weights {:?}, growth {:.2}%, volatility {:.2}%",
        index_label, bucket, weights, params.growth, params.volatility
    );

    params
}
