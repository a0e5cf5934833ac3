// ABOUTME: Read-only application snapshot consumed by the analytics core
// ABOUTME: AppData with date-keyed daily and weight logs plus planner and photo records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::daily_log::DailyLog;
use super::nutrition::FoodEntry;
use super::profile::UserProfile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily logs keyed by local calendar date (chronological iteration order)
pub type DailyLogs = BTreeMap<NaiveDate, DailyLog>;

/// Weight measurements in kilograms keyed by local calendar date
pub type WeightLogs = BTreeMap<NaiveDate, f64>;

/// A progress photo reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressPhoto {
    /// Photo identifier
    pub id: String,
    /// Device-local image URI
    #[serde(rename = "imageUri")]
    pub image_uri: String,
    /// Date taken (ISO)
    pub date: String,
    /// Optional caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A meal planned ahead of time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedMeal {
    /// Plan entry identifier
    pub id: String,
    /// Meal slot (`Breakfast`, `Lunch`, `Dinner`, `Snacks`)
    #[serde(rename = "mealType")]
    pub meal_type: String,
    /// Meal name
    pub name: String,
    /// Planned energy (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Planned protein (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Complete snapshot of the user's stored data
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppData {
    /// User profile and goals
    #[serde(default)]
    pub profile: UserProfile,
    /// User-defined foods
    #[serde(default)]
    pub custom_foods: Vec<FoodEntry>,
    /// Daily logs by date
    #[serde(default)]
    pub daily_logs: DailyLogs,
    /// Weight measurements by date
    #[serde(default)]
    pub weight_logs: WeightLogs,
    /// Progress photos
    #[serde(default)]
    pub progress_photos: Vec<ProgressPhoto>,
    /// Meal planner entries by date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_meals: Option<BTreeMap<NaiveDate, Vec<PlannedMeal>>>,
}

impl AppData {
    /// Most recent daily log, if any
    #[must_use]
    pub fn latest_log(&self) -> Option<(&NaiveDate, &DailyLog)> {
        self.daily_logs.iter().next_back()
    }
}
