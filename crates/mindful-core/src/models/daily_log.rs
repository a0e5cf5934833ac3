// ABOUTME: Per-day log model holding meals, water, habits, mood check-ins, and reflections
// ABOUTME: Provides iteration and daily total helpers used by every analytics pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::{FoodEntry, WorkoutEntry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mood scale used by the morning and evening check-ins
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    /// Feeling great
    Great,
    /// Feeling good
    Good,
    /// Feeling okay
    Okay,
    /// Feeling stressed
    Stressed,
    /// Feeling low
    Low,
}

/// Morning and evening mood check-ins
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodCheckins {
    /// Morning check-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morning: Option<MoodLevel>,
    /// Evening check-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evening: Option<MoodLevel>,
}

/// End-of-day reflection prompts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reflection {
    /// What went well
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<String>,
    /// What was hard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    /// Plan for tomorrow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tomorrow_focus: Option<String>,
}

/// Completion record for a coach action on a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoachActionRecord {
    /// Whether the action was completed
    pub done: bool,
    /// When it was marked complete (ISO timestamp as stored by the app)
    pub completed_at: String,
}

/// Everything logged on a single day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    /// Food entries keyed by meal name (`Breakfast`, `Lunch`, `Dinner`, `Snacks`, ...)
    ///
    /// Meals keep the order they were stored in.
    #[serde(default)]
    pub meals: IndexMap<String, Vec<FoodEntry>>,
    /// Workouts in logging order
    #[serde(default)]
    pub workout_entries: Vec<WorkoutEntry>,
    /// Cumulative water intake in millilitres
    #[serde(default)]
    pub water_ml: f64,
    /// Habit id to done-today flag
    #[serde(default)]
    pub daily_habits: BTreeMap<String, bool>,
    /// Habit id to consecutive-day count
    #[serde(default)]
    pub habit_streak: BTreeMap<String, u32>,
    /// Mood check-ins
    #[serde(default)]
    pub mood_checkins: MoodCheckins,
    /// Reflection text
    #[serde(default)]
    pub reflection: Reflection,
    /// Coach action completion records keyed by action id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_actions: Option<BTreeMap<String, CoachActionRecord>>,
}

impl DailyLog {
    /// Iterate over every food entry of the day, meal by meal
    pub fn entries(&self) -> impl Iterator<Item = &FoodEntry> {
        self.meals.values().flatten()
    }

    /// Entries logged under a specific meal name
    #[must_use]
    pub fn meal(&self, name: &str) -> &[FoodEntry] {
        self.meals.get(name).map_or(&[], Vec::as_slice)
    }

    /// Whether at least one meal has an entry
    #[must_use]
    pub fn has_meals(&self) -> bool {
        self.meals.values().any(|entries| !entries.is_empty())
    }

    /// Total energy across all meals (kcal)
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.entries().map(|entry| entry.calories).sum()
    }

    /// Total protein across all meals (grams)
    #[must_use]
    pub fn total_protein_g(&self) -> f64 {
        self.entries().map(|entry| entry.protein_g).sum()
    }

    /// Mindful ratings that were actually recorded (zero counts as unrated)
    pub fn mindful_ratings(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries()
            .filter_map(|entry| entry.mindful_rating)
            .filter(|rating| *rating > 0)
            .map(f64::from)
    }

    /// Whether a coach action is recorded as done on this day
    #[must_use]
    pub fn is_action_done(&self, action_id: &str) -> bool {
        self.coach_actions
            .as_ref()
            .and_then(|actions| actions.get(action_id))
            .is_some_and(|record| record.done)
    }
}
