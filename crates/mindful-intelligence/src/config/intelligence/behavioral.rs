// ABOUTME: Behavioral pattern analyzer thresholds for weekly insight rules
// ABOUTME: Configures emotional-eating count, mindfulness bands, streak minimum, and snack meal name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Behavioral Pattern Configuration

use super::error::ConfigError;
use mindful_core::constants::{lookback, meals};
use serde::{Deserialize, Serialize};

/// Thresholds for the behavioral pattern rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralConfig {
    /// Emotional episodes above this count raise a pattern insight
    pub emotional_episode_threshold: usize,
    /// Average mindfulness strictly below this raises a suggestion
    pub low_mindfulness_below: f64,
    /// Average mindfulness at or above this raises an achievement
    pub high_mindfulness_from: f64,
    /// Minimum streak length celebrated as an achievement
    pub streak_achievement_days: u32,
    /// Meal bucket counted by the late-night snacking rule
    pub snack_meal_name: String,
    /// Window used when the caller does not pass one
    pub default_window_days: usize,
}

impl Default for BehavioralConfig {
    fn default() -> Self {
        Self {
            emotional_episode_threshold: 3,
            low_mindfulness_below: 3.0,
            high_mindfulness_from: 4.0,
            streak_achievement_days: 7,
            snack_meal_name: meals::SNACKS.to_owned(),
            default_window_days: lookback::BEHAVIORAL_DAYS,
        }
    }
}

impl BehavioralConfig {
    /// Validate mindfulness bands
    ///
    /// # Errors
    ///
    /// Returns an error when the bands fall outside the 1-5 rating scale or overlap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1.0..=5.0).contains(&self.low_mindfulness_below)
            || !(1.0..=5.0).contains(&self.high_mindfulness_from)
        {
            return Err(ConfigError::ValueOutOfRange(
                "mindfulness bands must lie on the 1-5 rating scale",
            ));
        }
        if self.low_mindfulness_below > self.high_mindfulness_from {
            return Err(ConfigError::InvalidRange(
                "low_mindfulness_below must be <= high_mindfulness_from",
            ));
        }
        Ok(())
    }
}
