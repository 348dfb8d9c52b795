//! Chart-ready transform over a trailing lookback window

use tracing::debug;

use crate::stats;
use crate::types::{ChartPoint, DailyPoint, DetailedBacktestResult, LookbackWindow, trailing};

/// Rebase the trailing `window` of the series to percent returns.
/// Drawdowns here are negative, unlike [`crate::PeriodResult::max_drawdown`].
pub fn get_detailed_backtest(series: &[DailyPoint], window: LookbackWindow) -> DetailedBacktestResult {
    let slice = trailing(series, window.days());
    let Some(first) = slice.first() else {
        debug!("Detail requested for {} on an empty series", window);
        return DetailedBacktestResult::default();
    };

    let portfolio: Vec<f64> = slice.iter().map(|p| p.portfolio_value).collect();
    let sp500: Vec<f64> = slice.iter().map(|p| p.sp500_value).collect();
    let drawdowns = stats::drawdown_series(&portfolio);

    let chart_data: Vec<ChartPoint> = slice
        .iter()
        .zip(drawdowns)
        .map(|(point, drawdown)| ChartPoint {
            date: point.date.format("%Y-%m-%d").to_string(),
            asset: rebased(point.portfolio_value, first.portfolio_value),
            benchmark: rebased(point.sp500_value, first.sp500_value),
            drawdown,
        })
        .collect();

    let (total_return, sp500_total_return) = chart_data
        .last()
        .map(|last| (last.asset, last.benchmark))
        .unwrap_or_default();

    debug!(
        "Detail {}: {} points, total return {:.2}%, benchmark {:.2}%",
        window,
        chart_data.len(),
        total_return,
        sp500_total_return
    );

    DetailedBacktestResult {
        chart_data,
        total_return,
        max_drawdown: stats::negative_percent(stats::max_drawdown(&portfolio)),
        sp500_total_return,
        sp500_max_drawdown: stats::negative_percent(stats::max_drawdown(&sp500)),
    }
}

fn rebased(value: f64, base: f64) -> f64 {
    (value / base - 1.0) * 100.0
}
