// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and builders for food entries, daily logs, and snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `mindful_coach`
//!
//! Builders here keep the integration tests focused on behavior instead of
//! snapshot boilerplate.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mindful_coach::models::{
    AppData, DailyLog, EatingTrigger, FoodEntry, Goal, GoalTarget, GoalTargetDetails, GoalType,
    MoodBefore, NutritionGoals, UserProfile,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Parse an ISO date, panicking on malformed fixtures
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// Noon UTC on the given date
pub fn noon(value: &str) -> DateTime<Utc> {
    date(value)
        .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
        .and_utc()
}

/// Consecutive dates starting at `start`
pub fn dates_from(start: &str, days: usize) -> Vec<NaiveDate> {
    let first = date(start);
    first.iter_days().take(days).collect()
}

/// A food entry with calories and protein only
pub fn food(name: &str, calories: f64, protein_g: f64) -> FoodEntry {
    FoodEntry::new(name, calories, protein_g)
}

/// A food entry with a mindful rating
pub fn rated(name: &str, calories: f64, rating: u8) -> FoodEntry {
    FoodEntry {
        mindful_rating: Some(rating),
        ..FoodEntry::new(name, calories, 0.0)
    }
}

/// A food entry with an eating trigger
pub fn triggered(name: &str, calories: f64, trigger: EatingTrigger) -> FoodEntry {
    FoodEntry {
        eating_trigger: Some(trigger),
        ..FoodEntry::new(name, calories, 0.0)
    }
}

/// A food entry with a mood before eating
pub fn with_mood(name: &str, calories: f64, mood: MoodBefore) -> FoodEntry {
    FoodEntry {
        mood_before: Some(mood),
        ..FoodEntry::new(name, calories, 0.0)
    }
}

/// A daily log with the given meals
pub fn log_with(meals: &[(&str, Vec<FoodEntry>)]) -> DailyLog {
    DailyLog {
        meals: meals
            .iter()
            .map(|(meal, entries)| ((*meal).to_owned(), entries.clone()))
            .collect(),
        ..DailyLog::default()
    }
}

/// A daily log with a single breakfast entry
pub fn breakfast_log(entry: FoodEntry) -> DailyLog {
    log_with(&[("Breakfast", vec![entry])])
}

/// A profile with nutrition goals and typical biometrics
pub fn profile() -> UserProfile {
    UserProfile {
        name: "Test User".to_owned(),
        age: 30,
        weight_kg: 80.0,
        height_cm: 175.0,
        start_weight_kg: 85.0,
        goal_weight_kg: 75.0,
        goals: NutritionGoals {
            calories: 2000.0,
            protein_g: 100.0,
            carbs_g: 200.0,
            fats_g: 70.0,
            water_ml: 2000.0,
        },
        ..UserProfile::default()
    }
}

/// A snapshot with one log per consecutive date from `start`
pub fn app_data(start: &str, logs: Vec<DailyLog>) -> AppData {
    AppData {
        profile: profile(),
        daily_logs: dates_from(start, logs.len()).into_iter().zip(logs).collect(),
        ..AppData::default()
    }
}

/// A goal with a plain numeric target
pub fn value_goal(id: &str, goal_type: GoalType, value: f64) -> Goal {
    Goal {
        id: id.to_owned(),
        goal_type,
        target: GoalTarget::Value(value),
        start_date: "2024-01-01".to_owned(),
        end_date: None,
        metadata: None,
    }
}

/// A goal with a structured target
pub fn detail_goal(id: &str, goal_type: GoalType, details: GoalTargetDetails) -> Goal {
    Goal {
        id: id.to_owned(),
        goal_type,
        target: GoalTarget::Details(details),
        start_date: "2024-01-01".to_owned(),
        end_date: None,
        metadata: None,
    }
}
