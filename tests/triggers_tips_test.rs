// ABOUTME: Integration tests for trigger analysis, coaching tips, and mindful eating prompts
// ABOUTME: Uses a seeded ChaCha generator so tip selection is reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, food, log_with, triggered};
use mindful_coach::intelligence::coaching_tips::{focus_category, tips_for_category};
use mindful_coach::intelligence::triggers::{suggested_alternatives, GENERIC_ALTERNATIVE};
use mindful_coach::intelligence::{
    analyze_triggers, coaching_tips, mindful_eating_prompts, personalized_tip, BehavioralInsight,
    InsightType, MealPhase, TipCategory,
};
use mindful_coach::models::{DailyLogs, EatingTrigger};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn insight(message: &str) -> BehavioralInsight {
    BehavioralInsight {
        insight_type: InsightType::Pattern,
        title: "Test".to_owned(),
        message: message.to_owned(),
        actionable_tip: None,
        related_data: None,
    }
}

#[test]
fn test_triggers_count_and_deduplicate_foods() {
    common::init_test_logging();
    let mut logs = DailyLogs::new();
    logs.insert(
        date("2024-03-01"),
        log_with(&[
            (
                "Dinner",
                vec![
                    triggered("Chips", 300.0, EatingTrigger::Emotion),
                    triggered("Wine", 120.0, EatingTrigger::Social),
                ],
            ),
            ("Snacks", vec![triggered("Chips", 300.0, EatingTrigger::Emotion)]),
        ]),
    );
    logs.insert(
        date("2024-03-02"),
        log_with(&[(
            "Lunch",
            vec![
                triggered("Cookies", 200.0, EatingTrigger::Emotion),
                food("Salad", 350.0, 10.0),
            ],
        )]),
    );

    let analyses = analyze_triggers(&logs);

    assert_eq!(analyses.len(), 2);
    let emotion = &analyses[0];
    assert_eq!(emotion.trigger, EatingTrigger::Emotion);
    assert_eq!(emotion.frequency, 3);
    assert_eq!(emotion.associated_foods, vec!["Chips", "Cookies"]);
    assert_eq!(emotion.suggested_alternatives.len(), 5);
    assert_eq!(emotion.suggested_alternatives[0], "Take 5 deep breaths");

    let social = &analyses[1];
    assert_eq!(social.trigger, EatingTrigger::Social);
    assert_eq!(social.frequency, 1);
    assert_eq!(social.associated_foods, vec!["Wine"]);
}

#[test]
fn test_triggers_without_table_get_generic_alternative() {
    assert_eq!(
        suggested_alternatives(EatingTrigger::Craving),
        vec![GENERIC_ALTERNATIVE]
    );
    assert_eq!(
        suggested_alternatives(EatingTrigger::Hunger),
        vec![GENERIC_ALTERNATIVE]
    );
    assert_eq!(suggested_alternatives(EatingTrigger::Habit).len(), 5);
}

#[test]
fn test_triggers_ignore_entries_without_trigger() {
    let mut logs = DailyLogs::new();
    logs.insert(
        date("2024-03-01"),
        log_with(&[("Lunch", vec![food("Salad", 350.0, 10.0)])]),
    );

    assert!(analyze_triggers(&logs).is_empty());
    assert!(analyze_triggers(&DailyLogs::new()).is_empty());
}

#[test]
fn test_tip_library_contents() {
    let tips = coaching_tips();
    assert_eq!(tips.len(), 8);

    let ids: HashSet<&str> = tips.iter().map(|tip| tip.id.as_str()).collect();
    assert_eq!(ids.len(), 8);
    assert_eq!(tips_for_category(TipCategory::MindfulEating).len(), 3);
    assert_eq!(tips_for_category(TipCategory::EmotionalEating).len(), 2);
}

#[test]
fn test_focus_category_priority() {
    assert_eq!(focus_category(&[]), TipCategory::MindfulEating);
    assert_eq!(
        focus_category(&[insight("Plenty of stress lately")]),
        TipCategory::StressManagement
    );
    assert_eq!(
        focus_category(&[
            insight("Your average mindfulness rating is 2.0/5."),
            insight("You've logged 5 emotional eating episodes this week."),
        ]),
        TipCategory::EmotionalEating
    );
    assert_eq!(
        focus_category(&[insight("Plenty of stress, little mindful eating")]),
        TipCategory::MindfulEating
    );
}

#[test]
fn test_personalized_tip_matches_focus_category() {
    let insights = [insight("You've logged 4 emotional eating episodes this week.")];

    for seed in 0..20 {
        let tip = personalized_tip(&insights, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
        assert_eq!(tip.category, TipCategory::EmotionalEating);
    }
}

#[test]
fn test_personalized_tip_is_reproducible_with_seed() {
    let first = personalized_tip(&[], &mut ChaCha8Rng::seed_from_u64(7));
    let second = personalized_tip(&[], &mut ChaCha8Rng::seed_from_u64(7));

    assert_eq!(first, second);
}

#[test]
fn test_personalized_tip_covers_whole_category() {
    let picked: HashSet<String> = (0..200)
        .filter_map(|seed| personalized_tip(&[], &mut ChaCha8Rng::seed_from_u64(seed)))
        .map(|tip| tip.id)
        .collect();

    let expected: HashSet<String> = tips_for_category(TipCategory::MindfulEating)
        .into_iter()
        .map(|tip| tip.id)
        .collect();
    assert_eq!(picked, expected);
}

#[test]
fn test_mindful_eating_prompts_per_phase() {
    let prompts = mindful_eating_prompts();

    for phase in [MealPhase::PreMeal, MealPhase::DuringMeal, MealPhase::PostMeal] {
        assert_eq!(prompts.for_phase(phase).len(), 5);
    }
    assert_eq!(
        prompts.for_phase(MealPhase::PreMeal)[0],
        "How hungry am I right now on a scale of 1-5?"
    );
    assert_eq!(
        prompts.for_phase(MealPhase::PostMeal)[4],
        "What would I do differently next time?"
    );
}

#[test]
fn test_associated_foods_follow_meal_order() {
    let mut logs = DailyLogs::new();
    logs.insert(
        date("2024-03-01"),
        log_with(&[
            ("Breakfast", vec![triggered("Toast", 250.0, EatingTrigger::Habit)]),
            ("Lunch", vec![triggered("Sandwich", 450.0, EatingTrigger::Habit)]),
            ("Dinner", vec![triggered("Pasta", 700.0, EatingTrigger::Habit)]),
        ]),
    );

    let analyses = analyze_triggers(&logs);

    assert_eq!(analyses.len(), 1);
    assert_eq!(
        analyses[0].associated_foods,
        vec!["Toast", "Sandwich", "Pasta"]
    );
}
