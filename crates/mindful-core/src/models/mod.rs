// ABOUTME: Snapshot data model for the Mindful Coach analytics core
// ABOUTME: Re-exports daily logs, food entries, profile, goals, and the AppData snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! These structures mirror the JSON snapshot stored by the mobile app. They are
//! read-only inputs to the analytics core: the persistence layer owns them and
//! the analytics functions never mutate them.
//!
//! ## Design Principles
//!
//! - **Tolerant**: numeric fields default to zero, behavioral fields are `Option`
//! - **Chronological**: logs are keyed by `NaiveDate` in ordered maps
//! - **Wire compatible**: field names match the stored snapshot

mod app_data;
mod daily_log;
mod nutrition;
mod profile;

// Snapshot
pub use app_data::{AppData, DailyLogs, PlannedMeal, ProgressPhoto, WeightLogs};

// Daily log domain
pub use daily_log::{CoachActionRecord, DailyLog, MoodCheckins, MoodLevel, Reflection};

// Nutrition domain
pub use nutrition::{EatingTrigger, FoodEntry, MoodBefore, WorkoutEntry};

// Profile domain
pub use profile::{
    ActivityLevel, Goal, GoalTarget, GoalTargetDetails, GoalType, MealTimes, NutritionGoals, Sex,
    UserProfile,
};
