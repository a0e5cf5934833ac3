// ABOUTME: Habit and nutrition intelligence engine for the Mindful Coach workspace
// ABOUTME: Statistics, behavioral insights, trigger analysis, coach advice, goals, and nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mindful Intelligence
//!
//! Pure, synchronous analytics over the [`mindful_core::models`] snapshot. Every
//! analyzer is total: missing data produces neutral results rather than errors.
//! Thresholds come from [`config::IntelligenceConfig`]; each analyzer also has a
//! `with_config` constructor for explicit configuration.
//!
//! ## Modules
//!
//! - **statistics**: mean, standard deviation, moving average, regression, forecast
//! - **analytics**: calorie and mindfulness moving averages plus weight trend
//! - **behavioral**: weekly behavioral insights
//! - **triggers**: eating trigger frequencies and coping alternatives
//! - **coaching_tips**: tip library, personalized tip, mindful eating prompts
//! - **coach**: persona analysis and coach advice
//! - **goals**: goal status evaluation
//! - **nutrition_calculator**: BMR, TDEE, and macro targets

/// Intelligence configuration and validation
pub mod config;

/// Statistical primitives
pub mod statistics;

/// Analytics summarizer
pub mod analytics;

/// Behavioral pattern analyzer
pub mod behavioral;

/// Eating trigger analyzer
pub mod triggers;

/// Habit coaching tips and mindful eating prompts
pub mod coaching_tips;

/// Coach analysis and advice
pub mod coach;

/// Goal evaluator
pub mod goals;

/// Nutrition target calculator
pub mod nutrition_calculator;

pub use analytics::{summarize_analytics, AnalyticsSummarizer, AnalyticsSummary, WindowAverage};
pub use behavioral::{
    analyze_behavioral_patterns, BehavioralAnalyzer, BehavioralInsight, InsightType,
};
pub use coach::{
    action_library, analyze_for_coach, generate_coach_advice, mark_completed_actions,
    CoachAction, CoachAdvice, CoachAnalysis, CoachAnalyzer, Impact, PersonaTag,
};
pub use coaching_tips::{
    coaching_tips, mindful_eating_prompts, personalized_tip, HabitCoachingTip, MealPhase,
    MindfulEatingPrompts, TipCategory, TipDifficulty,
};
pub use config::{ConfigError, IntelligenceConfig};
pub use goals::{evaluate_goals, GoalEvaluator, GoalRecommendation, GoalStatus};
pub use nutrition_calculator::{calculate_bmr, calculate_macro_targets, calculate_tdee, MacroTargets};
pub use statistics::{
    forecast_values, linear_regression, mean, moving_average, std_dev, DataPoint, ForecastPoint,
    RegressionResult,
};
pub use triggers::{analyze_triggers, TriggerAnalysis};
