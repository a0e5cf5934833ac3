// ABOUTME: Eating trigger analysis across every logged entry
// ABOUTME: Counts each trigger, collects associated foods, and attaches coping alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mindful_core::models::{DailyLogs, EatingTrigger};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Suggestion used for triggers without a dedicated alternatives table
pub const GENERIC_ALTERNATIVE: &str = "Take a moment to pause and reflect";

const EMOTION_ALTERNATIVES: &[&str] = &[
    "Take 5 deep breaths",
    "Call a friend or family member",
    "Go for a short walk",
    "Journal about your feelings",
    "Listen to calming music",
];

const SOCIAL_ALTERNATIVES: &[&str] = &[
    "Suggest a non-food activity",
    "Eat mindfully and focus on conversation",
    "Choose smaller portions",
    "Drink water between bites",
    "Focus on enjoying the company",
];

const HABIT_ALTERNATIVES: &[&str] = &[
    "Replace the routine with a new habit",
    "Change your environment",
    "Set a timer before eating",
    "Drink a glass of water first",
    "Ask yourself if you're truly hungry",
];

/// Aggregate for one eating trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerAnalysis {
    /// Trigger value
    pub trigger: EatingTrigger,
    /// Number of entries with this trigger
    pub frequency: usize,
    /// Distinct food names, in first-seen order
    pub associated_foods: Vec<String>,
    /// Coping alternatives for this trigger
    pub suggested_alternatives: Vec<String>,
}

/// Coping alternatives for a trigger
#[must_use]
pub fn suggested_alternatives(trigger: EatingTrigger) -> Vec<String> {
    let table: &[&str] = match trigger {
        EatingTrigger::Emotion => EMOTION_ALTERNATIVES,
        EatingTrigger::Social => SOCIAL_ALTERNATIVES,
        EatingTrigger::Habit => HABIT_ALTERNATIVES,
        EatingTrigger::Hunger | EatingTrigger::Craving => &[GENERIC_ALTERNATIVE],
    };
    table.iter().map(|&alternative| alternative.to_owned()).collect()
}

/// Analyze triggers across every log
///
/// Results are ordered by the first chronological appearance of each trigger.
#[must_use]
pub fn analyze_triggers(logs: &DailyLogs) -> Vec<TriggerAnalysis> {
    let mut analyses: Vec<TriggerAnalysis> = Vec::new();

    for entry in logs.values().flat_map(|log| log.entries()) {
        let Some(trigger) = entry.eating_trigger else {
            continue;
        };

        let position = analyses
            .iter()
            .position(|analysis| analysis.trigger == trigger)
            .unwrap_or(analyses.len());
        if position == analyses.len() {
            analyses.push(TriggerAnalysis {
                trigger,
                frequency: 0,
                associated_foods: Vec::new(),
                suggested_alternatives: suggested_alternatives(trigger),
            });
        }

        let analysis = &mut analyses[position];
        analysis.frequency += 1;
        if !analysis.associated_foods.contains(&entry.name) {
            analysis.associated_foods.push(entry.name.clone());
        }
    }

    debug!(triggers = analyses.len(), "Analyzed eating triggers");
    analyses
}
