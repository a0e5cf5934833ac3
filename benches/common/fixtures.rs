// ABOUTME: Benchmark fixtures for generating realistic habit and nutrition snapshots
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic snapshots.
//!
//! Every value is derived from the day index, so repeated runs measure the
//! same data.

use chrono::{Days, NaiveDate};
use mindful_coach::models::{
    AppData, DailyLog, EatingTrigger, FoodEntry, Goal, GoalTarget, GoalTargetDetails, GoalType,
    MoodBefore, NutritionGoals, UserProfile,
};

/// Predefined snapshot sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SnapshotSize {
    /// One week of logs
    Week,
    /// One quarter of logs
    Quarter,
    /// A full year of logs
    Year,
}

impl SnapshotSize {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }
}

const MEALS: [&str; 4] = ["Breakfast", "Lunch", "Dinner", "Snacks"];

const TRIGGERS: [EatingTrigger; 5] = [
    EatingTrigger::Hunger,
    EatingTrigger::Emotion,
    EatingTrigger::Social,
    EatingTrigger::Habit,
    EatingTrigger::Craving,
];

const MOODS: [MoodBefore; 6] = [
    MoodBefore::Neutral,
    MoodBefore::Happy,
    MoodBefore::Stressed,
    MoodBefore::Neutral,
    MoodBefore::Bored,
    MoodBefore::Sad,
];

#[allow(clippy::cast_possible_truncation)]
fn entry(day: usize, slot: usize) -> FoodEntry {
    let seed = day * 7 + slot * 13;
    let name = if slot == 3 {
        format!("Dessert {}", seed % 5)
    } else {
        format!("Meal {}", seed % 11)
    };

    FoodEntry {
        grams: 150.0 + (seed % 200) as f64,
        carbs_g: 20.0 + (seed % 60) as f64,
        fats_g: 5.0 + (seed % 25) as f64,
        hunger_level: (seed % 3 != 0).then_some((seed % 5 + 1) as u8),
        mood_before: (seed % 2 == 0).then_some(MOODS[seed % MOODS.len()]),
        eating_trigger: (seed % 4 != 0).then_some(TRIGGERS[seed % TRIGGERS.len()]),
        mindful_rating: Some((seed % 5 + 1) as u8),
        satisfaction_level: Some((seed % 4 + 2) as u8),
        ..FoodEntry::new(name, 150.0 + (seed % 450) as f64, 5.0 + (seed % 35) as f64)
    }
}

fn daily_log(day: usize) -> DailyLog {
    let mut log = DailyLog {
        water_ml: 1200.0 + ((day * 37) % 1500) as f64,
        ..DailyLog::default()
    };
    for (slot, meal) in MEALS.iter().enumerate() {
        let entries = (0..=(day + slot) % 2).map(|offset| entry(day, slot + offset)).collect();
        log.meals.insert((*meal).to_owned(), entries);
    }
    log.habit_streak.insert("water".to_owned(), (day % 12) as u32);
    log.habit_streak.insert("walk".to_owned(), (day % 9) as u32);
    log
}

fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "weight".to_owned(),
            goal_type: GoalType::Weight,
            target: GoalTarget::Value(75.0),
            start_date: "2024-01-01".to_owned(),
            end_date: None,
            metadata: None,
        },
        Goal {
            id: "calories".to_owned(),
            goal_type: GoalType::Nutrition,
            target: GoalTarget::Details(GoalTargetDetails {
                calories: Some(2000.0),
                ..GoalTargetDetails::default()
            }),
            start_date: "2024-01-01".to_owned(),
            end_date: None,
            metadata: None,
        },
        Goal {
            id: "water".to_owned(),
            goal_type: GoalType::Habit,
            target: GoalTarget::Details(GoalTargetDetails {
                habit_id: Some("water".to_owned()),
                min_days: Some(7),
                ..GoalTargetDetails::default()
            }),
            start_date: "2024-01-01".to_owned(),
            end_date: None,
            metadata: None,
        },
    ]
}

/// Generate a snapshot with one log per day and a weigh-in every third day
#[must_use]
pub fn generate_snapshot(size: SnapshotSize) -> AppData {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let mut data = AppData {
        profile: UserProfile {
            age: 35,
            weight_kg: 82.0,
            height_cm: 176.0,
            goal_weight_kg: 75.0,
            goals: NutritionGoals {
                calories: 2000.0,
                protein_g: 120.0,
                carbs_g: 220.0,
                fats_g: 65.0,
                water_ml: 2000.0,
            },
            goals_list: goals(),
            ..UserProfile::default()
        },
        ..AppData::default()
    };

    for day in 0..size.days() {
        let Some(date) = start.checked_add_days(Days::new(day as u64)) else {
            continue;
        };
        data.daily_logs.insert(date, daily_log(day));
        if day % 3 == 0 {
            data.weight_logs
                .insert(date, 85.0 - day as f64 * 0.02 + (day % 5) as f64 * 0.1);
        }
    }
    data
}
