// ABOUTME: Food and workout entry models captured by the logging screens
// ABOUTME: FoodEntry with optional mindful check-in fields, MoodBefore, EatingTrigger, WorkoutEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// How the user felt right before eating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MoodBefore {
    /// Under pressure
    Stressed,
    /// Positive mood
    Happy,
    /// Low mood
    Sad,
    /// Nothing to do
    Bored,
    /// Worried or restless
    Anxious,
    /// No notable emotion
    Neutral,
}

/// What prompted an eating episode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EatingTrigger {
    /// Physical hunger
    Hunger,
    /// Emotional state
    Emotion,
    /// Social setting
    Social,
    /// Routine or habit
    Habit,
    /// Specific craving
    Craving,
}

impl EatingTrigger {
    /// Wire name of the trigger (matches the serialized form)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hunger => "hunger",
            Self::Emotion => "emotion",
            Self::Social => "social",
            Self::Habit => "habit",
            Self::Craving => "craving",
        }
    }
}

/// A single logged food item
///
/// The behavioral fields are only present when the entry was captured through
/// the mindful check-in flow. Aggregations must skip absent values rather than
/// treating them as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    /// Food name as displayed to the user
    pub name: String,
    /// Portion weight in grams
    #[serde(default)]
    pub grams: f64,
    /// Energy in kcal
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat in grams
    #[serde(default)]
    pub fats_g: f64,
    /// Hunger before eating (1 = not hungry, 5 = very hungry)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunger_level: Option<u8>,
    /// Mood before eating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_before: Option<MoodBefore>,
    /// What prompted the eating episode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eating_trigger: Option<EatingTrigger>,
    /// How mindfully the food was eaten (1-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mindful_rating: Option<u8>,
    /// Satisfaction after eating (1-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction_level: Option<u8>,
}

impl FoodEntry {
    /// Create an entry with macro values and no behavioral data
    #[must_use]
    pub fn new(name: impl Into<String>, calories: f64, protein_g: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein_g,
            ..Self::default()
        }
    }

    /// Whether the entry counts as emotionally driven
    ///
    /// True when the trigger was emotion, or any non-neutral mood was recorded.
    #[must_use]
    pub fn is_emotionally_driven(&self) -> bool {
        self.eating_trigger == Some(EatingTrigger::Emotion)
            || self
                .mood_before
                .is_some_and(|mood| mood != MoodBefore::Neutral)
    }
}

/// A logged workout
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntry {
    /// Workout name
    pub name: String,
    /// Duration in minutes
    #[serde(default)]
    pub duration_min: f64,
    /// Estimated energy burned in kcal
    #[serde(default)]
    pub calories_burned: f64,
}
