//! Return and risk statistics over value series
//!
//! All moments are population moments (divide by `n`).

use statrs::statistics::Statistics;

use crate::config::DEFAULT_RISK_FREE_RATE;

const DAYS_PER_YEAR: f64 = 365.0;

/// Simple day-over-day returns
pub fn daily_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Percent return from the first to the last value
pub fn percent_return(values: &[f64]) -> f64 {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) if values.len() >= 2 => (last / first - 1.0) * 100.0,
        _ => 0.0,
    }
}

/// Covariance of the two return series over market variance.
/// Returns 1 when the market does not move.
pub fn beta(portfolio_returns: &[f64], market_returns: &[f64]) -> f64 {
    if portfolio_returns.is_empty() || market_returns.is_empty() {
        return 1.0;
    }

    let portfolio_mean = portfolio_returns.mean();
    let market_mean = market_returns.mean();

    let covariance = portfolio_returns
        .iter()
        .zip(market_returns)
        .map(|(p, m)| (p - portfolio_mean) * (m - market_mean))
        .sum::<f64>()
        / portfolio_returns.len() as f64;
    let market_variance = market_returns.population_variance();

    if market_variance == 0.0 {
        1.0
    } else {
        covariance / market_variance
    }
}

/// Daily-scale Sharpe ratio with the default 2% annual risk-free rate
pub fn sharpe_ratio(returns: &[f64]) -> f64 {
    sharpe_ratio_with(returns, DEFAULT_RISK_FREE_RATE)
}

/// `(mean - rf/365) / std`. Not annualized.
pub fn sharpe_ratio_with(returns: &[f64], annual_risk_free: f64) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }

    let daily_risk_free = annual_risk_free / DAYS_PER_YEAR;
    let mean = returns.mean();
    let std_dev = returns.population_std_dev();

    if std_dev == 0.0 {
        0.0
    } else {
        (mean - daily_risk_free) / std_dev
    }
}

/// Largest peak-to-trough decline as a non-negative fraction
pub fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = match values.first() {
        Some(first) => *first,
        None => return 0.0,
    };
    let mut max_drawdown = 0.0_f64;

    for &value in values {
        if value > peak {
            peak = value;
        }
        if peak > 0.0 {
            max_drawdown = max_drawdown.max((peak - value) / peak);
        }
    }

    max_drawdown
}

/// Drawdown fraction as a negative percent. A zero drawdown stays `0.0`, never `-0.0`.
pub fn negative_percent(fraction: f64) -> f64 {
    if fraction == 0.0 { 0.0 } else { -fraction * 100.0 }
}

/// Running drawdown from the peak seen so far, as negative percent
pub fn drawdown_series(values: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    values
        .iter()
        .map(|&value| {
            peak = peak.max(value);
            if peak > 0.0 {
                negative_percent((peak - value) / peak)
            } else {
                0.0
            }
        })
        .collect()
}

/// Population standard deviation of daily returns, annualized, in percent
pub fn annualized_volatility(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    returns.population_std_dev() * DAYS_PER_YEAR.sqrt() * 100.0
}
