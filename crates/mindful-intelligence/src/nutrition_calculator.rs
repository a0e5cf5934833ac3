// ABOUTME: Nutrition target calculation from profile biometrics
// ABOUTME: Revised Harris-Benedict BMR, activity-scaled TDEE, and daily macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Computes the daily targets proposed during profile setup.
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>

use crate::config::intelligence::{
    ActivityFactorsConfig, BiometricLimits, BmrConfig, NutritionConfig,
};
use mindful_core::errors::AppError;
use mindful_core::models::{ActivityLevel, Sex, UserProfile};
use serde::{Deserialize, Serialize};

/// Daily energy and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Rounded daily energy target (kcal)
    pub calories: f64,
    /// Rounded daily protein target (grams)
    pub protein_g: f64,
    /// Rounded daily carbohydrate target (grams)
    pub carbs_g: f64,
    /// Rounded daily fat target (grams)
    pub fats_g: f64,
}

fn validate_biometrics(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    limits: &BiometricLimits,
) -> Result<(), AppError> {
    if weight_kg <= 0.0 || weight_kg > limits.max_weight_kg {
        return Err(AppError::invalid_input(format!(
            "Weight must be between 0 and {} kg",
            limits.max_weight_kg
        )));
    }
    if height_cm <= 0.0 || height_cm > limits.max_height_cm {
        return Err(AppError::invalid_input(format!(
            "Height must be between 0 and {} cm",
            limits.max_height_cm
        )));
    }
    if !(limits.min_age..=limits.max_age).contains(&age) {
        return Err(AppError::invalid_input(format!(
            "Age must be between {} and {} years",
            limits.min_age, limits.max_age
        )));
    }
    Ok(())
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// - Men: 88.362 + 13.397 x `weight_kg` + 4.799 x `height_cm` - 5.677 x age
/// - Women: 447.593 + 9.247 x `weight_kg` + 3.098 x `height_cm` - 4.330 x age
///
/// # Errors
///
/// Returns an error if weight, height, or age is outside the default biometric limits
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> Result<f64, AppError> {
    calculate_bmr_with_limits(
        weight_kg,
        height_cm,
        age,
        sex,
        config,
        &BiometricLimits::default(),
    )
}

fn calculate_bmr_with_limits(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
    limits: &BiometricLimits,
) -> Result<f64, AppError> {
    validate_biometrics(weight_kg, height_cm, age, limits)?;

    let (constant, weight_coef, height_coef, age_coef) = match sex {
        Sex::Male => (
            config.male_constant,
            config.male_weight_coef,
            config.male_height_coef,
            config.male_age_coef,
        ),
        Sex::Female => (
            config.female_constant,
            config.female_weight_coef,
            config.female_height_coef,
            config.female_age_coef,
        ),
    };

    Ok(age_coef.mul_add(
        -f64::from(age),
        height_coef.mul_add(height_cm, weight_coef.mul_add(weight_kg, constant)),
    ))
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor (1.2 / 1.375 / 1.55 / 1.725 / 1.9)
///
/// # Errors
///
/// Returns an error if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<f64, AppError> {
    if bmr <= 0.0 {
        return Err(AppError::invalid_input("BMR must be positive"));
    }

    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };

    Ok(bmr * activity_factor)
}

/// Calculate daily targets for a profile
///
/// Protein is `protein_g_per_kg` x weight, fat supplies `fat_percent_tdee` of TDEE,
/// and carbohydrates fill the remainder (never below zero). Targets are rounded.
///
/// # Errors
///
/// Returns an error if the profile biometrics are outside the configured limits
pub fn calculate_macro_targets(
    profile: &UserProfile,
    config: &NutritionConfig,
) -> Result<MacroTargets, AppError> {
    let bmr = calculate_bmr_with_limits(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        &config.bmr,
        &config.limits,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors)?;

    let macros = &config.macros;
    let protein_g = profile.weight_kg * macros.protein_g_per_kg;
    let fat_kcal = tdee * macros.fat_percent_tdee / 100.0;
    let fats_g = fat_kcal / macros.fat_kcal_per_g;
    let carbs_g = (protein_g.mul_add(-macros.protein_kcal_per_g, tdee) - fat_kcal)
        / macros.carbs_kcal_per_g;

    Ok(MacroTargets {
        bmr,
        tdee,
        calories: tdee.round(),
        protein_g: protein_g.round(),
        carbs_g: carbs_g.max(0.0).round(),
        fats_g: fats_g.round(),
    })
}
