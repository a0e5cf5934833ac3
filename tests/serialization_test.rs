// ABOUTME: Round-trip tests for derived analytics outputs
// ABOUTME: Every result type must survive JSON encoding unchanged for the persistence layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{app_data, date, log_with, noon, rated, triggered, value_goal};
use mindful_coach::intelligence::config::intelligence::{
    AnalyticsConfig, BehavioralConfig, CoachConfig, GoalConfig, NutritionConfig,
};
use mindful_coach::intelligence::{
    analyze_triggers, calculate_macro_targets, coaching_tips, mindful_eating_prompts,
    AnalyticsSummarizer, BehavioralAnalyzer, CoachAnalyzer, GoalEvaluator,
};
use mindful_coach::models::{AppData, DailyLog, EatingTrigger, GoalType};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

fn assert_round_trip<T>(value: &T)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let json = serde_json::to_string(value).unwrap();
    let decoded: T = serde_json::from_str(&json).unwrap();
    assert_eq!(&decoded, value);
}

fn busy_day() -> DailyLog {
    let mut log = log_with(&[
        (
            "Dinner",
            vec![
                triggered("Chips", 300.0, EatingTrigger::Emotion),
                triggered("Chips", 300.0, EatingTrigger::Emotion),
                rated("Salmon", 600.0, 2),
            ],
        ),
        ("Snacks", vec![triggered("Dessert", 350.0, EatingTrigger::Habit)]),
    ]);
    log.water_ml = 900.0;
    log.habit_streak.insert("walk".to_owned(), 9);
    log
}

fn snapshot() -> AppData {
    let mut data = app_data("2024-03-01", (0..10).map(|_| busy_day()).collect());
    data.weight_logs.insert(date("2024-03-01"), 81.0);
    data.weight_logs.insert(date("2024-03-05"), 80.4);
    data.weight_logs.insert(date("2024-03-09"), 80.1);
    data.profile.goals_list = vec![value_goal("lose", GoalType::Weight, 75.0)];
    data
}

#[test]
fn test_analytics_summary_round_trip() {
    common::init_test_logging();
    let data = snapshot();
    let summary = AnalyticsSummarizer::with_config(AnalyticsConfig::default()).summarize(
        &data.daily_logs,
        &data.weight_logs,
        30,
        noon("2024-03-10"),
    );

    assert!(summary.weight_trend.is_some());
    assert_round_trip(&summary);
}

#[test]
fn test_insights_and_triggers_round_trip() {
    let data = snapshot();
    let insights = BehavioralAnalyzer::with_config(BehavioralConfig::default())
        .analyze(&data.daily_logs, 7);

    assert!(!insights.is_empty());
    assert_round_trip(&insights);
    assert_round_trip(&analyze_triggers(&data.daily_logs));
}

#[test]
fn test_coach_outputs_round_trip() {
    let data = snapshot();
    let analyzer = CoachAnalyzer::with_config(CoachConfig::default());

    assert_round_trip(&analyzer.analyze(&data, 14));
    let advice = analyzer.advise(&data, 14, date("2024-03-10"));
    assert!(!advice.actions.is_empty());
    assert_round_trip(&advice);
}

#[test]
fn test_goal_and_target_outputs_round_trip() {
    let data = snapshot();
    let recommendations = GoalEvaluator::with_config(GoalConfig::default(), AnalyticsConfig::default())
        .evaluate(&data, noon("2024-03-10"));

    assert_round_trip(&recommendations);
    assert_round_trip(&calculate_macro_targets(&data.profile, &NutritionConfig::default()).unwrap());
}

#[test]
fn test_static_libraries_round_trip() {
    assert_round_trip(&coaching_tips());
    assert_round_trip(&mindful_eating_prompts());
}
