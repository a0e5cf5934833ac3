// ABOUTME: Behavioral pattern analyzer turning a window of daily logs into coaching insights
// ABOUTME: Detects emotional eating, mindfulness levels, long habit streaks, and frequent snacking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::BehavioralConfig;
use crate::config::IntelligenceConfig;
use crate::statistics::mean;
use mindful_core::models::{DailyLog, DailyLogs};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Kind of behavioral insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// A recurring behavior worth noticing
    Pattern,
    /// Something the user is doing well
    Achievement,
    /// A gentle nudge toward improvement
    Suggestion,
    /// A concerning behavior
    Warning,
}

/// A human-readable observation about recent behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralInsight {
    /// Insight kind
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    /// Short headline
    pub title: String,
    /// Message shown to the user
    pub message: String,
    /// Concrete next step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionable_tip: Option<String>,
    /// Numbers the insight was derived from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_data: Option<serde_json::Value>,
}

impl BehavioralInsight {
    fn new(
        insight_type: InsightType,
        title: &str,
        message: String,
        actionable_tip: &str,
        related_data: serde_json::Value,
    ) -> Self {
        Self {
            insight_type,
            title: title.to_owned(),
            message,
            actionable_tip: Some(actionable_tip.to_owned()),
            related_data: Some(related_data),
        }
    }
}

/// Applies the weekly behavioral rules to a window of logs
#[derive(Debug, Clone)]
pub struct BehavioralAnalyzer {
    config: BehavioralConfig,
}

impl Default for BehavioralAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl BehavioralAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().behavioral.clone())
    }

    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: BehavioralConfig) -> Self {
        Self { config }
    }

    /// Analyze the `days` most recent logs by date
    ///
    /// Insights are returned in rule order: emotional eating, mindfulness, habit
    /// streaks, then snacking frequency.
    #[must_use]
    pub fn analyze(&self, logs: &DailyLogs, days: usize) -> Vec<BehavioralInsight> {
        let skip = logs.len().saturating_sub(days);
        let window: Vec<&DailyLog> = logs.values().skip(skip).collect();

        let mut insights = Vec::new();
        insights.extend(self.emotional_eating(&window));
        insights.extend(self.mindfulness(&window));
        insights.extend(self.habit_streaks(&window));
        insights.extend(self.snacking(&window, days));

        debug!(
            window_days = window.len(),
            insights = insights.len(),
            "Analyzed behavioral patterns"
        );
        insights
    }

    fn emotional_eating(&self, window: &[&DailyLog]) -> Option<BehavioralInsight> {
        let episodes = window
            .iter()
            .flat_map(|log| log.entries())
            .filter(|entry| entry.is_emotionally_driven())
            .count();

        (episodes > self.config.emotional_episode_threshold).then(|| {
            BehavioralInsight::new(
                InsightType::Pattern,
                "Emotional Eating Pattern Detected",
                format!("You've logged {episodes} emotional eating episodes this week."),
                "Try the 3-minute pause technique before eating to check if you're truly hungry.",
                json!({ "episodes": episodes }),
            )
        })
    }

    fn mindfulness(&self, window: &[&DailyLog]) -> Option<BehavioralInsight> {
        let ratings: Vec<f64> = window.iter().flat_map(|log| log.mindful_ratings()).collect();
        if ratings.is_empty() {
            return None;
        }

        let average = mean(&ratings);
        let data = json!({ "average": average, "ratings": ratings.len() });
        if average < self.config.low_mindfulness_below {
            Some(BehavioralInsight::new(
                InsightType::Suggestion,
                "Focus on Mindful Eating",
                format!("Your average mindfulness rating is {average:.1}/5."),
                "Try eating one meal per day without distractions - no phone, TV, or reading.",
                data,
            ))
        } else if average >= self.config.high_mindfulness_from {
            Some(BehavioralInsight::new(
                InsightType::Achievement,
                "Great Mindful Eating!",
                format!("You're averaging {average:.1}/5 for mindful eating. Keep it up!"),
                "You're doing great! Try teaching someone else about mindful eating.",
                data,
            ))
        } else {
            None
        }
    }

    fn habit_streaks(&self, window: &[&DailyLog]) -> Vec<BehavioralInsight> {
        let Some(latest) = window.last() else {
            return Vec::new();
        };

        latest
            .habit_streak
            .iter()
            .filter(|(_, &streak)| streak >= self.config.streak_achievement_days)
            .map(|(habit, &streak)| {
                BehavioralInsight::new(
                    InsightType::Achievement,
                    "Habit Streak!",
                    format!("{streak} days strong with \"{habit}\"!"),
                    "Celebrate this success and keep the momentum going!",
                    json!({ "habit": habit, "streak": streak }),
                )
            })
            .collect()
    }

    /// Snack-bucket frequency check
    ///
    /// Entries carry no timestamps, so every entry logged under the snack meal
    /// counts as an evening snack.
    fn snacking(&self, window: &[&DailyLog], days: usize) -> Option<BehavioralInsight> {
        let snacks: usize = window
            .iter()
            .map(|log| log.meal(&self.config.snack_meal_name).len())
            .sum();

        (snacks as f64 > days as f64 / 2.0).then(|| {
            BehavioralInsight::new(
                InsightType::Pattern,
                "Late Night Eating Pattern",
                "You seem to snack frequently in the evenings.".to_owned(),
                "Try having a larger, more satisfying dinner or plan a healthy evening snack.",
                json!({ "snacks": snacks }),
            )
        })
    }
}

/// Analyze the `days` most recent logs with the global configuration
#[must_use]
pub fn analyze_behavioral_patterns(logs: &DailyLogs, days: usize) -> Vec<BehavioralInsight> {
    BehavioralAnalyzer::new().analyze(logs, days)
}
