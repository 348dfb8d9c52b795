//! Synthetic daily series generator
//!
//! Produces one point per calendar day (weekends included) over the
//! history window. Each day's value is computed directly from the number
//! of days elapsed, so the random term is a fresh draw scaled by
//! `sqrt(days)` rather than a running sum.

use chrono::{Days, Months, NaiveDate, Utc};
use std::f64::consts::PI;
use tracing::{debug, info, trace, warn};

use crate::config::{DEFAULT_BASE_VALUE, DEFAULT_HISTORY_YEARS};
use crate::heuristics::{NASDAQ_PARAMS, SP500_PARAMS, SeriesParams, portfolio_params};
use crate::noise::{NoiseSource, ThreadNoise};
use crate::types::{DailyPoint, Holding};

const DAYS_PER_YEAR: f64 = 365.0;

/// Calendar window and starting level of a generated history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesWindow {
    pub as_of: NaiveDate,
    pub years: u32,
    pub base_value: f64,
}

impl SeriesWindow {
    pub fn ending(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            years: DEFAULT_HISTORY_YEARS,
            base_value: DEFAULT_BASE_VALUE,
        }
    }

    /// Same calendar day `years` earlier. Feb 29 falls back to Feb 28.
    /// `None` when that day is outside chrono's calendar.
    pub fn start(&self) -> Option<NaiveDate> {
        let months = self.years.checked_mul(12)?;
        self.as_of.checked_sub_months(Months::new(months))
    }

    /// Number of points the window produces, both ends inclusive
    pub fn len(&self) -> usize {
        self.start()
            .map_or(0, |start| (self.as_of - start).num_days() as usize + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate a history ending today with unseeded noise
pub fn generate_series(holdings: &[Holding], index_label: &str) -> Vec<DailyPoint> {
    let window = SeriesWindow::ending(Utc::now().date_naive());
    generate_series_with(holdings, index_label, window, &mut ThreadNoise::new())
}

pub fn generate_series_with<N: NoiseSource>(
    holdings: &[Holding],
    index_label: &str,
    window: SeriesWindow,
    noise: &mut N,
) -> Vec<DailyPoint> {
    let portfolio = portfolio_params(holdings, index_label);
    let Some(start) = window.start() else {
        warn!(
            "{} years before {} is out of calendar range, no history generated",
            window.years, window.as_of
        );
        return Vec::new();
    };
    let len = window.len();

    info!(
        "Generating {} days of synthetic history for '{}' ({} holdings) from {} to {}",
        len,
        index_label,
        holdings.len(),
        start,
        window.as_of
    );

    let mut series = Vec::with_capacity(len);
    for day in 0..len {
        let Some(date) = start.checked_add_days(Days::new(day as u64)) else {
            break;
        };
        let elapsed = day as f64;

        series.push(DailyPoint {
            date,
            portfolio_value: level(window.base_value, &portfolio, elapsed, noise),
            sp500_value: level(window.base_value, &SP500_PARAMS, elapsed, noise),
            nasdaq_value: level(window.base_value, &NASDAQ_PARAMS, elapsed, noise),
        });
    }

    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        debug!(
            "Series bounds: portfolio {:.2} -> {:.2}, sp500 {:.2} -> {:.2}, nasdaq {:.2} -> {:.2}",
            first.portfolio_value,
            last.portfolio_value,
            first.sp500_value,
            last.sp500_value,
            first.nasdaq_value,
            last.nasdaq_value
        );
    }

    series
}

/// Cumulative return in percent after `elapsed` days
pub fn cumulative_return<N: NoiseSource>(params: &SeriesParams, elapsed: f64, noise: &mut N) -> f64 {
    let daily_drift = params.growth / DAYS_PER_YEAR;
    let daily_volatility = params.volatility / DAYS_PER_YEAR.sqrt();

    let trend = daily_drift * elapsed;
    let phase = (2.0 * PI * elapsed / DAYS_PER_YEAR).sin();
    let cycle_effect = phase * trend * params.cycle_effect;
    let carried_cycle = phase * trend * params.cycle_carry;
    let shock = noise.next_shock() * daily_volatility * elapsed.sqrt();

    trace!(
        "day {}: trend {:.4}, cycle {:.4} (carried {:.4}), shock {:.4}",
        elapsed, trend, cycle_effect, carried_cycle, shock
    );

    trend + carried_cycle + shock
}

fn level<N: NoiseSource>(base_value: f64, params: &SeriesParams, elapsed: f64, noise: &mut N) -> f64 {
    base_value * (1.0 + cumulative_return(params, elapsed, noise) / 100.0)
}
