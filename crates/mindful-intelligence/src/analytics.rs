// ABOUTME: Analytics summarizer producing calorie and mindfulness moving averages
// ABOUTME: Fits a weight trend by least squares and projects a short forecast from the last weighing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Summary
//!
//! Daily series are built from the most recent `lookback_days` logs in date order:
//! total calories per day and the mean of the mindful ratings actually recorded
//! that day. The weight trend uses every weight measurement, indexed by position.

use crate::config::intelligence::AnalyticsConfig;
use crate::config::IntelligenceConfig;
use crate::statistics::{
    forecast_values, linear_regression, moving_average, DataPoint, ForecastPoint,
    RegressionResult,
};
use chrono::{DateTime, Utc};
use mindful_core::models::{DailyLog, DailyLogs, WeightLogs};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Moving average for one window length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowAverage {
    /// Window length in days
    pub window: usize,
    /// Mean over the trailing window
    pub value: f64,
}

/// Derived analytics over recent logs and all weight measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Calorie moving averages, one per configured window (7, 14, 30 by default)
    pub calories_moving_average: Vec<WindowAverage>,
    /// Mindfulness moving averages, one per configured window (7, 14 by default)
    pub mindfulness_moving_average: Vec<WindowAverage>,
    /// Weight regression, present with at least two measurements
    pub weight_trend: Option<RegressionResult>,
    /// Projected weights, empty without a trend
    pub weight_forecast: Vec<ForecastPoint>,
    /// Computation instant supplied by the caller
    pub last_updated: DateTime<Utc>,
}

impl AnalyticsSummary {
    /// Calorie moving average for `window`, if that window was computed
    #[must_use]
    pub fn calories_average(&self, window: usize) -> Option<f64> {
        find_window(&self.calories_moving_average, window)
    }

    /// Mindfulness moving average for `window`, if that window was computed
    #[must_use]
    pub fn mindfulness_average(&self, window: usize) -> Option<f64> {
        find_window(&self.mindfulness_moving_average, window)
    }
}

fn find_window(averages: &[WindowAverage], window: usize) -> Option<f64> {
    averages
        .iter()
        .find(|average| average.window == window)
        .map(|average| average.value)
}

/// Builds [`AnalyticsSummary`] values from logs
#[derive(Debug, Clone)]
pub struct AnalyticsSummarizer {
    config: AnalyticsConfig,
}

impl Default for AnalyticsSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsSummarizer {
    /// Create a summarizer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().analytics.clone())
    }

    /// Create a summarizer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Summarize the last `lookback_days` logs and the full weight history
    #[must_use]
    pub fn summarize(
        &self,
        daily_logs: &DailyLogs,
        weight_logs: &WeightLogs,
        lookback_days: usize,
        now: DateTime<Utc>,
    ) -> AnalyticsSummary {
        let skip = daily_logs.len().saturating_sub(lookback_days);
        let (calories, mindfulness): (Vec<f64>, Vec<f64>) = daily_logs
            .values()
            .skip(skip)
            .map(|log| (log.total_calories(), mean_mindfulness(log)))
            .unzip();

        let windows = |series: &[f64], sizes: &[usize]| -> Vec<WindowAverage> {
            sizes
                .iter()
                .map(|&window| WindowAverage {
                    window,
                    value: moving_average(series, window),
                })
                .collect()
        };

        let weight_points: Vec<DataPoint> = weight_logs
            .values()
            .enumerate()
            .map(|(index, &weight)| DataPoint::new(index as f64, weight))
            .collect();
        let weight_trend = (weight_points.len() >= self.config.min_weight_points)
            .then(|| linear_regression(&weight_points));

        let weight_forecast = weight_trend.map_or_else(Vec::new, |trend| {
            let start = weight_logs
                .keys()
                .next_back()
                .copied()
                .unwrap_or_else(|| now.date_naive());
            forecast_values(
                start,
                trend.slope,
                trend.intercept,
                self.config.forecast_days,
            )
        });

        debug!(
            days = calories.len(),
            weight_points = weight_points.len(),
            has_trend = weight_trend.is_some(),
            "Summarized analytics"
        );

        AnalyticsSummary {
            calories_moving_average: windows(&calories, &self.config.calorie_windows),
            mindfulness_moving_average: windows(&mindfulness, &self.config.mindfulness_windows),
            weight_trend,
            weight_forecast,
            last_updated: now,
        }
    }
}

/// Mean of recorded mindful ratings for a day; zero when none were recorded
fn mean_mindfulness(log: &DailyLog) -> f64 {
    let (sum, count) = log
        .mindful_ratings()
        .fold((0.0, 0_usize), |(sum, count), rating| (sum + rating, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Summarize analytics with the global configuration
///
/// Takes the last `lookback_days` logs by date. The caller supplies `now`, which
/// becomes `last_updated` and anchors the forecast when no weight is recorded.
#[must_use]
pub fn summarize_analytics(
    daily_logs: &DailyLogs,
    weight_logs: &WeightLogs,
    lookback_days: usize,
    now: DateTime<Utc>,
) -> AnalyticsSummary {
    AnalyticsSummarizer::new().summarize(daily_logs, weight_logs, lookback_days, now)
}
