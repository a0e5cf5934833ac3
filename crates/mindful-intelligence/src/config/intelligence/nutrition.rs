// ABOUTME: Nutrition target configuration for BMR, TDEE, and macro calculation
// ABOUTME: Configures revised Harris-Benedict coefficients, activity factors, and macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Configuration
//!
//! # Scientific References
//!
//! - BMR: Roza & Shizgal (1984), revised Harris-Benedict equations.
//!   DOI: 10.1093/ajcn/40.1.168

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Nutrition target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Macronutrient split
    pub macros: MacroRatioConfig,
    /// Biometric input limits
    pub limits: BiometricLimits,
}

/// Revised Harris-Benedict coefficients
///
/// Reference: Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
/// American Journal of Clinical Nutrition, 40(1), 168-182.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male constant (88.362)
    pub male_constant: f64,
    /// Male weight coefficient (13.397)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799)
    pub male_height_coef: f64,
    /// Male age coefficient (5.677, subtracted)
    pub male_age_coef: f64,
    /// Female constant (447.593)
    pub female_constant: f64,
    /// Female weight coefficient (9.247)
    pub female_weight_coef: f64,
    /// Female height coefficient (3.098)
    pub female_height_coef: f64,
    /// Female age coefficient (4.330, subtracted)
    pub female_age_coef: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (physical job or twice-daily training): 1.9
    pub very_active: f64,
}

/// Daily macro split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroRatioConfig {
    /// Protein per kilogram of body weight (g/kg)
    pub protein_g_per_kg: f64,
    /// Share of TDEE from fat (percent)
    pub fat_percent_tdee: f64,
    /// Energy density of protein (kcal/g)
    pub protein_kcal_per_g: f64,
    /// Energy density of carbohydrate (kcal/g)
    pub carbs_kcal_per_g: f64,
    /// Energy density of fat (kcal/g)
    pub fat_kcal_per_g: f64,
}

/// Accepted biometric input ranges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricLimits {
    /// Maximum body weight (kg)
    pub max_weight_kg: f64,
    /// Maximum height (cm)
    pub max_height_cm: f64,
    /// Minimum age (years)
    pub min_age: u32,
    /// Maximum age (years)
    pub max_age: u32,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_constant: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_constant: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for MacroRatioConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 1.8,
            fat_percent_tdee: 25.0,
            protein_kcal_per_g: 4.0,
            carbs_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
        }
    }
}

impl Default for BiometricLimits {
    fn default() -> Self {
        Self {
            max_weight_kg: 300.0,
            max_height_cm: 300.0,
            min_age: 10,
            max_age: 120,
        }
    }
}

impl NutritionConfig {
    /// Validate coefficients, factors, and macro ratios
    ///
    /// # Errors
    ///
    /// Returns an error when coefficients are not positive, activity factors are out of
    /// range or not ascending, or macro ratios are implausible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        if bmr.male_weight_coef <= 0.0
            || bmr.male_height_coef <= 0.0
            || bmr.female_weight_coef <= 0.0
            || bmr.female_height_coef <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let macros = &self.macros;
        if !(0.5..=3.0).contains(&macros.protein_g_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "protein_g_per_kg must be between 0.5 and 3.0",
            ));
        }
        if !(10.0..=50.0).contains(&macros.fat_percent_tdee) {
            return Err(ConfigError::ValueOutOfRange(
                "fat_percent_tdee must be between 10 and 50",
            ));
        }
        if macros.protein_kcal_per_g <= 0.0
            || macros.carbs_kcal_per_g <= 0.0
            || macros.fat_kcal_per_g <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "macro energy densities must be positive",
            ));
        }

        if self.limits.min_age >= self.limits.max_age {
            return Err(ConfigError::InvalidRange("min_age must be < max_age"));
        }
        Ok(())
    }
}
