// ABOUTME: Statistical primitives backing every analytics pass
// ABOUTME: Mean, population standard deviation, trailing moving average, OLS regression, and forecasting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Statistical Primitives
//!
//! All functions are total: empty or degenerate input yields zeros instead of an
//! error, so callers can feed partially logged data straight through.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single `(x, y)` observation for regression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Independent variable (series index)
    pub x: f64,
    /// Observed value
    pub y: f64,
}

impl DataPoint {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordinary least squares fit `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change per index step)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
}

impl RegressionResult {
    /// Value of the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// A projected value for a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Projected date
    pub date: NaiveDate,
    /// Projected value
    pub value: f64,
}

/// Arithmetic mean; zero for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; zero for fewer than two values
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|value| (value - avg).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Mean of the trailing `window` values
///
/// A window larger than the series averages the whole series. Empty input or a
/// zero window yields zero.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> f64 {
    if values.is_empty() || window == 0 {
        return 0.0;
    }
    let start = values.len().saturating_sub(window);
    mean(&values[start..])
}

/// Ordinary least squares regression over `points`
///
/// Empty input yields a zero line. When all `x` are equal the denominator is
/// replaced by one, which keeps the result finite.
#[must_use]
pub fn linear_regression(points: &[DataPoint]) -> RegressionResult {
    if points.is_empty() {
        return RegressionResult::default();
    }

    let n = points.len() as f64;
    let sum_x = points.iter().map(|p| p.x).sum::<f64>();
    let sum_y = points.iter().map(|p| p.y).sum::<f64>();
    let sum_xy = points.iter().map(|p| p.x * p.y).sum::<f64>();
    let sum_xx = points.iter().map(|p| p.x * p.x).sum::<f64>();

    let mut denominator = n.mul_add(sum_xx, -(sum_x * sum_x));
    if denominator.abs() < f64::EPSILON {
        denominator = 1.0;
    }

    let slope = n.mul_add(sum_xy, -(sum_x * sum_y)) / denominator;
    let intercept = slope.mul_add(-sum_x, sum_y) / n;

    RegressionResult { slope, intercept }
}

/// Project `days` values along a line, dated one day apart after `start`
///
/// Point `i` (1-based) is dated `start + i` days with value `slope * i + intercept`.
#[must_use]
pub fn forecast_values(
    start: NaiveDate,
    slope: f64,
    intercept: f64,
    days: u32,
) -> Vec<ForecastPoint> {
    (1..=days)
        .filter_map(|i| {
            start
                .checked_add_days(Days::new(u64::from(i)))
                .map(|date| ForecastPoint {
                    date,
                    value: slope.mul_add(f64::from(i), intercept),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_dev_of_known_series() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_regression_with_constant_x_stays_finite() {
        let points = [DataPoint::new(1.0, 3.0), DataPoint::new(1.0, 5.0)];
        let fit = linear_regression(&points);
        assert!(fit.slope.is_finite());
        assert!(fit.intercept.is_finite());
    }

    #[test]
    fn test_zero_day_forecast_is_empty() {
        assert!(forecast_values(NaiveDate::MIN, 1.0, 0.0, 0).is_empty());
    }
}
