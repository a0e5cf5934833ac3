// ABOUTME: User profile model with biometrics, nutrition goals, and the goal-tracking extension
// ABOUTME: Sex, ActivityLevel, NutritionGoals, MealTimes, Goal, GoalType, and GoalTarget definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Biological sex used for BMR estimation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male BMR coefficients
    Male,
    /// Female BMR coefficients
    #[default]
    Female,
}

/// Self-reported activity level used for TDEE
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

/// Daily intake targets
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionGoals {
    /// Energy target (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein target (grams)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrate target (grams)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat target (grams)
    #[serde(default)]
    pub fats_g: f64,
    /// Water target (millilitres)
    #[serde(default)]
    pub water_ml: f64,
}

/// Preferred meal times in `HH:MM` format
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealTimes {
    /// Breakfast time
    pub breakfast: String,
    /// Lunch time
    pub lunch: String,
    /// Dinner time
    pub dinner: String,
    /// Optional snack time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snack: Option<String>,
}

/// Kind of tracked goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Body-weight target
    Weight,
    /// Habit consistency target
    Habit,
    /// Daily nutrition target
    Nutrition,
    /// Any goal kind this build does not evaluate
    #[serde(other)]
    Unknown,
}

/// Structured goal target
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalTargetDetails {
    /// Numeric target (weight goals stored as an object)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Daily calorie target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Daily protein target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Habit identifier for habit goals
    #[serde(
        default,
        rename = "habitId",
        skip_serializing_if = "Option::is_none"
    )]
    pub habit_id: Option<String>,
    /// Minimum streak length for habit goals
    #[serde(
        default,
        rename = "minDays",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_days: Option<u32>,
}

/// Goal target: either a bare number or a structured object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GoalTarget {
    /// Plain numeric target
    Value(f64),
    /// Structured target with optional fields
    Details(GoalTargetDetails),
}

impl Default for GoalTarget {
    fn default() -> Self {
        Self::Details(GoalTargetDetails::default())
    }
}

impl GoalTarget {
    /// Numeric target value, from either representation
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Details(details) => details.value,
        }
    }

    /// Structured details, if the target is an object
    #[must_use]
    pub const fn details(&self) -> Option<&GoalTargetDetails> {
        match self {
            Self::Value(_) => None,
            Self::Details(details) => Some(details),
        }
    }
}

/// A user-defined goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Goal identifier
    pub id: String,
    /// Goal kind
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    /// Target definition (empty details when the app stored none)
    #[serde(default)]
    pub target: GoalTarget,
    /// Start date (ISO)
    #[serde(default)]
    pub start_date: String,
    /// Optional end date (ISO)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Free-form metadata stored by the app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// User profile captured during onboarding
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: u32,
    /// Biological sex
    #[serde(default)]
    pub sex: Sex,
    /// Current weight (kg)
    #[serde(default)]
    pub weight_kg: f64,
    /// Height (cm)
    #[serde(default)]
    pub height_cm: f64,
    /// Weight at onboarding (kg)
    #[serde(default)]
    pub start_weight_kg: f64,
    /// Target weight (kg)
    #[serde(default)]
    pub goal_weight_kg: f64,
    /// Activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Daily intake targets
    #[serde(default)]
    pub goals: NutritionGoals,
    /// Self-reported eating triggers
    #[serde(default)]
    pub eating_triggers: Vec<String>,
    /// Foods the user finds hard to moderate
    #[serde(default)]
    pub problem_foods: Vec<String>,
    /// Habits the user wants to build
    #[serde(default)]
    pub preferred_habits: Vec<String>,
    /// Why the user started
    #[serde(default)]
    pub motivation_reason: String,
    /// Preferred meal times
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_times: Option<MealTimes>,
    /// Whether reminders are enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
    /// Tracked goals (extension stored alongside the profile)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goals_list: Vec<Goal>,
}
