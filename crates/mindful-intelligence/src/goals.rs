// ABOUTME: Goal evaluator producing status and guidance for weight, nutrition, and habit goals
// ABOUTME: Compares goals against the weight trend, the 7-day calorie average, and habit streaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::analytics::{AnalyticsSummarizer, AnalyticsSummary};
use crate::config::intelligence::{AnalyticsConfig, GoalConfig};
use crate::config::IntelligenceConfig;
use chrono::{DateTime, Utc};
use mindful_core::models::{AppData, Goal, GoalType};
use serde::{Deserialize, Serialize};
use tracing::debug;

const WEIGHT_ADJUSTMENT: &str = "Reduce daily intake by ~200 kcal and re-evaluate in 2 weeks.";
const NUTRITION_ADJUSTMENT: &str = "Try reducing portion sizes or swapping calorie-dense foods.";

/// Progress state of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Moving toward the target
    OnTrack,
    /// Not moving toward the target
    Behind,
    /// Target reached
    Completed,
    /// Likely to miss the target
    AtRisk,
}

/// Evaluation of one goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecommendation {
    /// Identifier of the evaluated goal
    pub goal_id: String,
    /// Progress state
    pub status: GoalStatus,
    /// Explanation shown to the user
    pub message: String,
    /// Suggested change when the goal is behind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_adjustment: Option<String>,
}

impl GoalRecommendation {
    fn new(goal: &Goal, status: GoalStatus, message: String) -> Self {
        Self {
            goal_id: goal.id.clone(),
            status,
            message,
            recommended_adjustment: None,
        }
    }

    fn with_adjustment_when_behind(mut self, adjustment: &str) -> Self {
        if self.status == GoalStatus::Behind {
            self.recommended_adjustment = Some(adjustment.to_owned());
        }
        self
    }
}

/// Evaluates goals stored on the profile
#[derive(Debug, Clone)]
pub struct GoalEvaluator {
    config: GoalConfig,
    summarizer: AnalyticsSummarizer,
}

impl Default for GoalEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalEvaluator {
    /// Create an evaluator using the global configuration
    #[must_use]
    pub fn new() -> Self {
        let config = IntelligenceConfig::global();
        Self::with_config(config.goals.clone(), config.analytics.clone())
    }

    /// Create an evaluator with explicit goal and analytics configuration
    #[must_use]
    pub const fn with_config(config: GoalConfig, analytics: AnalyticsConfig) -> Self {
        Self {
            config,
            summarizer: AnalyticsSummarizer::with_config(analytics),
        }
    }

    /// Evaluate every goal in `data.profile.goals_list`, in list order
    ///
    /// Goals of an unknown kind are skipped.
    #[must_use]
    pub fn evaluate(&self, data: &AppData, now: DateTime<Utc>) -> Vec<GoalRecommendation> {
        let goals = &data.profile.goals_list;
        if goals.is_empty() {
            return Vec::new();
        }

        let summary = self.summarizer.summarize(
            &data.daily_logs,
            &data.weight_logs,
            self.config.summary_lookback_days,
            now,
        );

        let recommendations: Vec<GoalRecommendation> = goals
            .iter()
            .filter_map(|goal| match goal.goal_type {
                GoalType::Weight => Some(self.evaluate_weight(goal, data, &summary)),
                GoalType::Nutrition => Some(self.evaluate_nutrition(goal, &summary)),
                GoalType::Habit => Some(self.evaluate_habit(goal, data)),
                GoalType::Unknown => {
                    debug!(goal_id = %goal.id, "Skipping goal of unknown type");
                    None
                }
            })
            .collect();

        debug!(goals = recommendations.len(), "Evaluated goals");
        recommendations
    }

    fn evaluate_weight(
        &self,
        goal: &Goal,
        data: &AppData,
        summary: &AnalyticsSummary,
    ) -> GoalRecommendation {
        let Some(target) = goal.target.value() else {
            return GoalRecommendation::new(
                goal,
                GoalStatus::OnTrack,
                "Set a numeric target weight to track this goal.".to_owned(),
            );
        };

        let current = data.profile.weight_kg;
        let slope = summary.weight_trend.map_or(0.0, |trend| trend.slope);

        let (status, message) =
            if (current - target).abs() <= self.config.weight_completion_tolerance_kg {
                (
                    GoalStatus::Completed,
                    format!("You've reached your target weight of {target} kg."),
                )
            } else if (current > target && slope >= 0.0) || (current < target && slope <= 0.0) {
                (
                    GoalStatus::Behind,
                    "Your recent weight trend suggests you are not moving towards your goal. Consider small weekly adjustments.".to_owned(),
                )
            } else {
                (
                    GoalStatus::OnTrack,
                    "You are progressing towards your goal based on recent trends.".to_owned(),
                )
            };

        GoalRecommendation::new(goal, status, message).with_adjustment_when_behind(WEIGHT_ADJUSTMENT)
    }

    fn evaluate_nutrition(&self, goal: &Goal, summary: &AnalyticsSummary) -> GoalRecommendation {
        let average = summary
            .calories_average(self.config.nutrition_window_days)
            .unwrap_or(0.0);
        let target = goal
            .target
            .details()
            .and_then(|details| details.calories)
            .filter(|calories| *calories > 0.0);
        let window = self.config.nutrition_window_days;

        let (status, message) = match target {
            None => (
                GoalStatus::OnTrack,
                "Set a daily calorie target to track this goal.".to_owned(),
            ),
            Some(_) if average <= 0.0 => (
                GoalStatus::OnTrack,
                "Log a few days of meals to compare against your calorie goal.".to_owned(),
            ),
            Some(target) if (average - target).abs() / target > self.config.nutrition_tolerance => (
                GoalStatus::Behind,
                format!(
                    "Your {window}-day average calories ({}) differs from your goal ({target}).",
                    average.round()
                ),
            ),
            Some(_) => (
                GoalStatus::OnTrack,
                format!(
                    "Your {window}-day average calories ({}) is close to your goal.",
                    average.round()
                ),
            ),
        };

        GoalRecommendation::new(goal, status, message)
            .with_adjustment_when_behind(NUTRITION_ADJUSTMENT)
    }

    fn evaluate_habit(&self, goal: &Goal, data: &AppData) -> GoalRecommendation {
        let details = goal.target.details();
        let habit_id = details
            .and_then(|details| details.habit_id.as_deref())
            .unwrap_or("this habit");
        let min_days = details
            .and_then(|details| details.min_days)
            .filter(|days| *days > 0)
            .unwrap_or(self.config.default_habit_min_days);
        let streak = data
            .latest_log()
            .and_then(|(_, log)| log.habit_streak.get(habit_id))
            .copied()
            .unwrap_or(0);

        if streak >= min_days {
            GoalRecommendation::new(
                goal,
                GoalStatus::OnTrack,
                format!("You're maintaining {habit_id} with a {streak}-day streak."),
            )
        } else {
            GoalRecommendation::new(
                goal,
                GoalStatus::Behind,
                format!("Your {habit_id} streak is {streak}. Aim for consistency."),
            )
        }
    }
}

/// Evaluate profile goals with the global configuration
///
/// `now` anchors the backing analytics summary.
#[must_use]
pub fn evaluate_goals(data: &AppData, now: DateTime<Utc>) -> Vec<GoalRecommendation> {
    GoalEvaluator::new().evaluate(data, now)
}
