// ABOUTME: Coach analyzer configuration for persona tagging and advice rationale
// ABOUTME: Configures persona thresholds, evening-snack and hunger-mismatch limits, and action count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coach Configuration
//!
//! Ratios are fractions in `[0, 1]` except `low_mindfulness_threshold`, which is on
//! the 1-5 rating scale.

use super::error::ConfigError;
use mindful_core::constants::lookback;
use serde::{Deserialize, Serialize};

/// Coach analyzer and advice configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Persona tag thresholds
    pub personas: PersonaThresholds,
    /// Per-entry heuristics used while scanning logs
    pub heuristics: CoachHeuristics,
    /// Thresholds controlling which rationale parts are shown
    pub rationale: RationaleThresholds,
    /// Maximum number of actions per advice
    pub max_actions: usize,
    /// Lookback used when the caller does not pass one
    pub default_lookback_days: usize,
}

/// Thresholds assigning persona tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaThresholds {
    /// `emotional_eater` when emotion-trigger share is above this
    pub emotional_eater: f64,
    /// `evening_snacker` when evening-snack day share is above this
    pub evening_snacker: f64,
    /// `habitual_grazer` when hunger-mismatch share is above this
    pub habitual_grazer: f64,
    /// `low_mindfulness` when average rating is below this
    pub low_mindfulness: f64,
    /// `low_protein_intake` when protein ratio is below this
    pub low_protein_ratio: f64,
    /// `low_hydration` when hydration ratio is below this
    pub low_hydration_ratio: f64,
}

/// Per-entry heuristics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachHeuristics {
    /// Case-insensitive name keywords marking an entry as a snack or dessert
    pub evening_snack_keywords: Vec<String>,
    /// Snack entries must exceed this energy (kcal) to count
    pub evening_snack_min_calories: f64,
    /// Hunger at or below this level counts as low hunger
    pub hunger_mismatch_max_level: u8,
    /// Low-hunger entries above this energy (kcal) count as a mismatch
    pub hunger_mismatch_min_calories: f64,
}

/// Thresholds for optional rationale parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RationaleThresholds {
    /// Show emotion-driven share when above this
    pub emotion_percent: f64,
    /// Show evening-snack day share when above this
    pub evening_snack_percent: f64,
    /// Show hydration ratio when below this
    pub hydration_ratio: f64,
    /// Show protein ratio when below this
    pub protein_ratio: f64,
}

impl Default for PersonaThresholds {
    fn default() -> Self {
        Self {
            emotional_eater: 0.25,
            evening_snacker: 0.35,
            habitual_grazer: 0.15,
            low_mindfulness: 2.5,
            low_protein_ratio: 0.8,
            low_hydration_ratio: 0.7,
        }
    }
}

impl Default for CoachHeuristics {
    fn default() -> Self {
        Self {
            evening_snack_keywords: vec!["snack".to_owned(), "dessert".to_owned()],
            evening_snack_min_calories: 120.0,
            hunger_mismatch_max_level: 2,
            hunger_mismatch_min_calories: 300.0,
        }
    }
}

impl Default for RationaleThresholds {
    fn default() -> Self {
        Self {
            emotion_percent: 0.15,
            evening_snack_percent: 0.25,
            hydration_ratio: 0.9,
            protein_ratio: 0.9,
        }
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            personas: PersonaThresholds::default(),
            heuristics: CoachHeuristics::default(),
            rationale: RationaleThresholds::default(),
            max_actions: 3,
            default_lookback_days: lookback::COACH_DAYS,
        }
    }
}

impl CoachConfig {
    /// Validate persona and rationale thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` when a share threshold leaves `[0, 1]`, the
    /// mindfulness threshold leaves the rating scale, or no actions would ever be returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = [
            self.personas.emotional_eater,
            self.personas.evening_snacker,
            self.personas.habitual_grazer,
            self.rationale.emotion_percent,
            self.rationale.evening_snack_percent,
        ];
        if shares.iter().any(|share| !(0.0..=1.0).contains(share)) {
            return Err(ConfigError::ValueOutOfRange(
                "coach share thresholds must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=5.0).contains(&self.personas.low_mindfulness) {
            return Err(ConfigError::ValueOutOfRange(
                "low_mindfulness threshold must be between 0 and 5",
            ));
        }
        let keywords = &self.heuristics.evening_snack_keywords;
        if keywords.is_empty() || keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            return Err(ConfigError::ValueOutOfRange(
                "evening_snack_keywords must be non-empty and contain no blank keywords",
            ));
        }
        if self.max_actions == 0 || self.default_lookback_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_actions and default_lookback_days must be positive",
            ));
        }
        Ok(())
    }
}
