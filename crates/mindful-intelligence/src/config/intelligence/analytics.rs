// ABOUTME: Analytics summarizer configuration for moving-average windows and weight forecasting
// ABOUTME: Configures calorie and mindfulness windows, forecast horizon, and default lookbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Summary Configuration

use super::error::ConfigError;
use mindful_core::constants::lookback;
use serde::{Deserialize, Serialize};

/// Configuration for the analytics summarizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Calorie moving-average windows in days, reported in this order
    pub calorie_windows: Vec<usize>,
    /// Mindfulness moving-average windows in days, reported in this order
    pub mindfulness_windows: Vec<usize>,
    /// Number of days projected forward from the most recent weighing
    pub forecast_days: u32,
    /// Minimum number of weight measurements required for a trend
    pub min_weight_points: usize,
    /// Lookback used when the caller does not pass one
    pub default_lookback_days: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            calorie_windows: vec![7, 14, 30],
            mindfulness_windows: vec![7, 14],
            forecast_days: 14,
            min_weight_points: 2,
            default_lookback_days: lookback::ANALYTICS_DAYS,
        }
    }
}

impl AnalyticsConfig {
    /// Validate window and horizon settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when a window list is empty or holds a zero
    /// window, or when fewer than two weight points would be accepted for a regression.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calorie_windows.is_empty() || self.calorie_windows.contains(&0) {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_windows must be non-empty and contain only positive windows",
            ));
        }
        if self.mindfulness_windows.is_empty() || self.mindfulness_windows.contains(&0) {
            return Err(ConfigError::ValueOutOfRange(
                "mindfulness_windows must be non-empty and contain only positive windows",
            ));
        }
        if self.min_weight_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_weight_points must be at least 2",
            ));
        }
        if self.default_lookback_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_lookback_days must be positive",
            ));
        }
        Ok(())
    }
}
