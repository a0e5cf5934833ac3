// ABOUTME: Goal evaluator configuration for weight, nutrition, and habit goals
// ABOUTME: Configures nutrition tolerance, habit streak default, and weight completion tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Evaluation Configuration

use super::error::ConfigError;
use mindful_core::constants::lookback;
use serde::{Deserialize, Serialize};

/// Goal evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Relative calorie deviation tolerated before a nutrition goal is behind
    pub nutrition_tolerance: f64,
    /// Calorie moving-average window compared against nutrition goals
    pub nutrition_window_days: usize,
    /// Streak length required when a habit goal has no `minDays`
    pub default_habit_min_days: u32,
    /// Distance (kg) at which a weight goal counts as reached; zero means exact
    pub weight_completion_tolerance_kg: f64,
    /// Lookback of the analytics summary backing weight and nutrition goals
    pub summary_lookback_days: usize,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            nutrition_tolerance: 0.1,
            nutrition_window_days: 7,
            default_habit_min_days: 7,
            weight_completion_tolerance_kg: 0.0,
            summary_lookback_days: lookback::ANALYTICS_DAYS,
        }
    }
}

impl GoalConfig {
    /// Validate goal tolerances
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for negative tolerances or a zero window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.nutrition_tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "nutrition_tolerance must be between 0.0 and 1.0",
            ));
        }
        if self.weight_completion_tolerance_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight_completion_tolerance_kg must not be negative",
            ));
        }
        if self.nutrition_window_days == 0 || self.summary_lookback_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "goal windows must be positive",
            ));
        }
        Ok(())
    }
}
