//! Unit tests for the chart-ready detail transform

use pretty_assertions::assert_eq;
use rstest::*;
use snapfolio_backtesting::*;
use crate::test_utils::*;

#[fixture]
fn generated() -> Vec<DailyPoint> {
    generate_series_with(
        &TestHoldingFactory::mixed_basket(),
        "Healthcare Innovation",
        SeriesWindow::ending(as_of()),
        &mut SeededNoise::new(11),
    )
}

#[rstest]
fn test_empty_series_gives_zeroed_result() {
    let result = get_detailed_backtest(&[], LookbackWindow::Y10);
    assert_eq!(
        result,
        DetailedBacktestResult {
            chart_data: vec![],
            total_return: 0.0,
            max_drawdown: 0.0,
            sp500_total_return: 0.0,
            sp500_max_drawdown: 0.0,
        }
    );
}

#[rstest]
#[case(LookbackWindow::Y1, 365)]
#[case(LookbackWindow::Y5, 1097)]
#[case(LookbackWindow::Y10, 1097)]
fn test_window_takes_trailing_slice(generated: Vec<DailyPoint>, #[case] window: LookbackWindow, #[case] expected: usize) {
    let result = get_detailed_backtest(&generated, window);
    assert_eq!(result.chart_data.len(), expected);
    assert_eq!(
        result.chart_data.last().unwrap().date,
        generated.last().unwrap().date.format("%Y-%m-%d").to_string()
    );
}

#[rstest]
#[case(LookbackWindow::Y1)]
#[case(LookbackWindow::Y5)]
#[case(LookbackWindow::Y10)]
fn test_first_chart_point_is_rebased_to_zero(generated: Vec<DailyPoint>, #[case] window: LookbackWindow) {
    let result = get_detailed_backtest(&generated, window);
    let first = &result.chart_data[0];
    assert_eq!(first.asset, 0.0);
    assert_eq!(first.benchmark, 0.0);
    assert_eq!(first.drawdown, 0.0);
}

#[rstest]
fn test_dates_are_iso_calendar_dates() {
    let series = TestSeriesFactory::from_portfolio(&[10_000.0, 10_100.0]);
    let result = get_detailed_backtest(&series, LookbackWindow::Y1);
    assert_eq!(result.chart_data[0].date, "2024-01-01");
    assert_eq!(result.chart_data[1].date, "2024-01-02");
}

#[rstest]
fn test_rebasing_and_drawdown_series() {
    let series = TestSeriesFactory::from_values(&[
        (10_000.0, 5_000.0, 1.0),
        (12_000.0, 5_500.0, 1.0),
        (9_000.0, 4_500.0, 1.0),
        (10_800.0, 6_000.0, 1.0),
    ]);
    let result = get_detailed_backtest(&series, LookbackWindow::Y1);

    let assets: Vec<f64> = result.chart_data.iter().map(|p| p.asset).collect();
    let benchmarks: Vec<f64> = result.chart_data.iter().map(|p| p.benchmark).collect();
    let drawdowns: Vec<f64> = result.chart_data.iter().map(|p| p.drawdown).collect();

    for (actual, expected) in assets.iter().zip([0.0, 20.0, -10.0, 8.0]) {
        TestAssertions::assert_approx_eq(*actual, expected, 1e-9);
    }
    for (actual, expected) in benchmarks.iter().zip([0.0, 10.0, -10.0, 20.0]) {
        TestAssertions::assert_approx_eq(*actual, expected, 1e-9);
    }
    for (actual, expected) in drawdowns.iter().zip([0.0, 0.0, -25.0, -10.0]) {
        TestAssertions::assert_approx_eq(*actual, expected, 1e-9);
    }

    TestAssertions::assert_approx_eq(result.total_return, 8.0, 1e-9);
    TestAssertions::assert_approx_eq(result.sp500_total_return, 20.0, 1e-9);
    TestAssertions::assert_approx_eq(result.max_drawdown, -25.0, 1e-9);
    TestAssertions::assert_approx_eq(result.sp500_max_drawdown, -(1.0 - 4_500.0 / 5_500.0) * 100.0, 1e-9);
}

#[rstest]
fn test_peak_tracking_restarts_at_slice_boundary() {
    // Old peak of 20k sits outside the 1Y window
    let mut values = vec![20_000.0];
    values.extend(std::iter::repeat(10_000.0).take(365));
    let series = TestSeriesFactory::from_portfolio(&values);

    let result = get_detailed_backtest(&series, LookbackWindow::Y1);
    assert_eq!(result.chart_data.len(), 365);
    assert!(result.chart_data.iter().all(|p| p.drawdown == 0.0));
    assert_eq!(result.max_drawdown, 0.0);
}

#[rstest]
fn test_drawdown_sign_differs_from_period_summary(generated: Vec<DailyPoint>) {
    let summary = compute_performance(&generated);
    let detail = get_detailed_backtest(&generated, LookbackWindow::Y1);

    assert!(summary[PeriodKey::Y1].max_drawdown >= 0.0);
    assert!(detail.max_drawdown <= 0.0);
    assert!(detail.sp500_max_drawdown <= 0.0);
    TestAssertions::assert_approx_eq(detail.max_drawdown, -summary[PeriodKey::Y1].max_drawdown, 1e-9);
}

#[rstest]
fn test_totals_match_last_chart_point(generated: Vec<DailyPoint>) {
    let detail = get_detailed_backtest(&generated, LookbackWindow::Y5);
    let last = detail.chart_data.last().unwrap();
    assert_eq!(detail.total_return, last.asset);
    assert_eq!(detail.sp500_total_return, last.benchmark);
}

#[rstest]
#[case(&[10_000.0, 10_000.0, 10_000.0])]
#[case(&[10_000.0, 10_050.0, 10_100.0])]
fn test_no_drawdown_serializes_as_plain_zero(#[case] portfolio: &[f64]) {
    let detail = get_detailed_backtest(&TestSeriesFactory::from_portfolio(portfolio), LookbackWindow::Y1);

    assert!(detail.max_drawdown.is_sign_positive());
    assert!(detail.sp500_max_drawdown.is_sign_positive());
    assert!(detail.chart_data.iter().all(|p| p.drawdown.is_sign_positive()));

    let json = serde_json::to_string(&detail).unwrap();
    assert!(!json.contains("-0.0"), "{json}");
}
