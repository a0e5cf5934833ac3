// ABOUTME: Intelligence module configuration for habit analytics and coaching heuristics
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Every threshold used by the analyzers lives here with its documented default.
//!
//! # Module Structure
//!
//! - `analytics` - Moving-average windows and weight forecast horizon
//! - `behavioral` - Weekly behavioral insight rules
//! - `coach` - Persona tags, per-entry heuristics, and advice rationale
//! - `goals` - Goal evaluation tolerances
//! - `nutrition` - BMR coefficients, activity factors, and macro split
//!
//! # Environment Overrides
//!
//! Scalar thresholds can be overridden with `MINDFUL_*` variables, for example
//! `MINDFUL_COACH_EMOTIONAL_EATER_THRESHOLD=0.3`. Overrides are applied once when
//! [`IntelligenceConfig::global`] is first read.

pub mod analytics;
pub mod behavioral;
pub mod coach;
pub mod error;
pub mod goals;
pub mod nutrition;

pub use analytics::AnalyticsConfig;
pub use behavioral::BehavioralConfig;
pub use coach::{CoachConfig, CoachHeuristics, PersonaThresholds, RationaleThresholds};
pub use error::ConfigError;
pub use goals::GoalConfig;
pub use nutrition::{
    ActivityFactorsConfig, BiometricLimits, BmrConfig, MacroRatioConfig, NutritionConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the analytics summarizer
    pub analytics: AnalyticsConfig,
    /// Configuration for the behavioral pattern analyzer
    pub behavioral: BehavioralConfig,
    /// Configuration for coach analysis and advice
    pub coach: CoachConfig,
    /// Configuration for goal evaluation
    pub goals: GoalConfig,
    /// Configuration for nutrition target calculation
    pub nutrition: NutritionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every configuration group
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found across the groups
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analytics.validate()?;
        self.behavioral.validate()?;
        self.coach.validate()?;
        self.goals.validate()?;
        self.nutrition.validate()?;
        if !self
            .analytics
            .calorie_windows
            .contains(&self.goals.nutrition_window_days)
        {
            return Err(ConfigError::InvalidRange(
                "goals.nutrition_window_days must be one of analytics.calorie_windows",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Analytics overrides
        Self::apply_env_var(
            "MINDFUL_ANALYTICS_FORECAST_DAYS",
            &mut self.analytics.forecast_days,
        )?;
        Self::apply_env_var(
            "MINDFUL_ANALYTICS_LOOKBACK_DAYS",
            &mut self.analytics.default_lookback_days,
        )?;

        // Behavioral overrides
        Self::apply_env_var(
            "MINDFUL_BEHAVIORAL_EMOTIONAL_THRESHOLD",
            &mut self.behavioral.emotional_episode_threshold,
        )?;
        Self::apply_env_var(
            "MINDFUL_BEHAVIORAL_LOW_MINDFULNESS",
            &mut self.behavioral.low_mindfulness_below,
        )?;
        Self::apply_env_var(
            "MINDFUL_BEHAVIORAL_HIGH_MINDFULNESS",
            &mut self.behavioral.high_mindfulness_from,
        )?;
        Self::apply_env_var(
            "MINDFUL_BEHAVIORAL_STREAK_DAYS",
            &mut self.behavioral.streak_achievement_days,
        )?;

        // Coach overrides
        Self::apply_env_var(
            "MINDFUL_COACH_EMOTIONAL_EATER_THRESHOLD",
            &mut self.coach.personas.emotional_eater,
        )?;
        Self::apply_env_var(
            "MINDFUL_COACH_EVENING_SNACKER_THRESHOLD",
            &mut self.coach.personas.evening_snacker,
        )?;
        Self::apply_env_var(
            "MINDFUL_COACH_HABITUAL_GRAZER_THRESHOLD",
            &mut self.coach.personas.habitual_grazer,
        )?;
        Self::apply_env_var(
            "MINDFUL_COACH_LOW_MINDFULNESS_THRESHOLD",
            &mut self.coach.personas.low_mindfulness,
        )?;
        Self::apply_env_var(
            "MINDFUL_COACH_LOW_PROTEIN_RATIO",
            &mut self.coach.personas.low_protein_ratio,
        )?;
        Self::apply_env_var(
            "MINDFUL_COACH_LOW_HYDRATION_RATIO",
            &mut self.coach.personas.low_hydration_ratio,
        )?;
        Self::apply_env_var(
            "MINDFUL_COACH_EVENING_SNACK_MIN_CALORIES",
            &mut self.coach.heuristics.evening_snack_min_calories,
        )?;
        Self::apply_env_var("MINDFUL_COACH_MAX_ACTIONS", &mut self.coach.max_actions)?;
        Self::apply_env_var(
            "MINDFUL_COACH_LOOKBACK_DAYS",
            &mut self.coach.default_lookback_days,
        )?;

        // Goal overrides
        Self::apply_env_var(
            "MINDFUL_GOALS_NUTRITION_TOLERANCE",
            &mut self.goals.nutrition_tolerance,
        )?;
        Self::apply_env_var(
            "MINDFUL_GOALS_HABIT_MIN_DAYS",
            &mut self.goals.default_habit_min_days,
        )?;

        // Nutrition overrides
        Self::apply_env_var(
            "MINDFUL_NUTRITION_PROTEIN_G_PER_KG",
            &mut self.nutrition.macros.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            "MINDFUL_NUTRITION_FAT_PERCENT_TDEE",
            &mut self.nutrition.macros.fat_percent_tdee,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_overlapping_mindfulness_bands_rejected() {
        let mut config = IntelligenceConfig::default();
        config.behavioral.low_mindfulness_below = 4.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_nutrition_window_must_be_a_calorie_window() {
        let mut config = IntelligenceConfig::default();
        config.goals.nutrition_window_days = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));

        config.analytics.calorie_windows.push(10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_snack_keyword_rejected() {
        let mut config = IntelligenceConfig::default();
        config.coach.heuristics.evening_snack_keywords.push(" ".to_owned());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_descending_activity_factors_rejected() {
        let mut config = IntelligenceConfig::default();
        config.nutrition.activity_factors.light = 1.1;
        assert!(config.validate().is_err());
    }
}
