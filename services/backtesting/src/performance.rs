//! Trailing-period performance summary

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::DEFAULT_RISK_FREE_RATE;
use crate::stats;
use crate::types::{DailyPoint, PerformanceSummary, PeriodKey, PeriodResult, trailing};

/// Statistics for every period with the default 2% risk-free rate
pub fn compute_performance(series: &[DailyPoint]) -> PerformanceSummary {
    compute_performance_with(series, DEFAULT_RISK_FREE_RATE)
}

pub fn compute_performance_with(series: &[DailyPoint], risk_free_rate: f64) -> PerformanceSummary {
    let mut computed = BTreeMap::new();

    for key in PeriodKey::ALL {
        let slice = trailing(series, key.days());
        if slice.len() < 2 {
            debug!("Period {} has {} points, using zero record", key, slice.len());
            continue;
        }
        computed.insert(key, period_result(key, slice, risk_free_rate));
    }

    PerformanceSummary::assemble(computed)
}

/// Statistics over one slice of at least two points
pub fn period_result(period: PeriodKey, slice: &[DailyPoint], risk_free_rate: f64) -> PeriodResult {
    let portfolio: Vec<f64> = slice.iter().map(|p| p.portfolio_value).collect();
    let sp500: Vec<f64> = slice.iter().map(|p| p.sp500_value).collect();
    let nasdaq: Vec<f64> = slice.iter().map(|p| p.nasdaq_value).collect();

    let portfolio_return = stats::percent_return(&portfolio);
    let sp500_return = stats::percent_return(&sp500);
    let nasdaq_return = stats::percent_return(&nasdaq);

    let portfolio_returns = stats::daily_returns(&portfolio);
    let market_returns = stats::daily_returns(&sp500);

    let result = PeriodResult {
        period,
        portfolio_return,
        sp500_return,
        nasdaq_return,
        alpha: portfolio_return - sp500_return,
        beta: stats::beta(&portfolio_returns, &market_returns),
        sharpe_ratio: stats::sharpe_ratio_with(&portfolio_returns, risk_free_rate),
        max_drawdown: stats::max_drawdown(&portfolio) * 100.0,
        volatility: stats::annualized_volatility(&portfolio_returns),
    };

    debug!(
        "Period {} - Return: {:.2}%, Alpha: {:.2}, Beta: {:.3}, Sharpe: {:.4}, MaxDD: {:.2}%",
        period,
        result.portfolio_return,
        result.alpha,
        result.beta,
        result.sharpe_ratio,
        result.max_drawdown
    );

    result
}
