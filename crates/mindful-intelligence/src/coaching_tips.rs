// ABOUTME: Static habit coaching tip library and mindful eating prompts
// ABOUTME: Selects a personalized tip for recent insights using a caller-supplied random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Habit Coaching Tips
//!
//! Tip selection is random within the focus category. The random source is a
//! parameter so callers can seed it (e.g. `rand_chacha::ChaCha8Rng`) for
//! reproducible output.

use crate::behavioral::BehavioralInsight;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Area a coaching tip addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    /// Awareness while eating
    MindfulEating,
    /// Eating in response to emotions
    EmotionalEating,
    /// Portion sizes
    PortionControl,
    /// Regular meal schedule
    MealTiming,
    /// Non-food stress relief
    StressManagement,
}

/// How much practice a tip assumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipDifficulty {
    /// First steps
    Beginner,
    /// Builds on basic habits
    Intermediate,
    /// For experienced users
    Advanced,
}

/// A habit coaching tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitCoachingTip {
    /// Stable identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Full tip text
    pub description: String,
    /// Focus area
    pub category: TipCategory,
    /// Practice level
    pub difficulty: TipDifficulty,
}

struct TipDefinition {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: TipCategory,
    difficulty: TipDifficulty,
}

impl TipDefinition {
    fn to_tip(&self) -> HabitCoachingTip {
        HabitCoachingTip {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

const TIP_LIBRARY: &[TipDefinition] = &[
    TipDefinition {
        id: "mindful_hunger",
        title: "Check Your Hunger Level",
        description: "Before eating, rate your hunger from 1-5. Aim to eat when you're at a 3-4.",
        category: TipCategory::MindfulEating,
        difficulty: TipDifficulty::Beginner,
    },
    TipDefinition {
        id: "pause_before_eating",
        title: "Take a 3-Minute Pause",
        description: "Before eating, take 3 deep breaths and ask yourself: \"Am I hungry or am I feeling something else?\"",
        category: TipCategory::MindfulEating,
        difficulty: TipDifficulty::Beginner,
    },
    TipDefinition {
        id: "emotional_check",
        title: "Identify Your Emotions",
        description: "When you want to eat, first identify what emotion you're feeling. Are you actually hungry?",
        category: TipCategory::EmotionalEating,
        difficulty: TipDifficulty::Beginner,
    },
    TipDefinition {
        id: "stress_alternatives",
        title: "Stress-Relief Alternatives",
        description: "Instead of eating when stressed, try: 5-minute walk, calling a friend, or deep breathing.",
        category: TipCategory::StressManagement,
        difficulty: TipDifficulty::Intermediate,
    },
    TipDefinition {
        id: "portion_visualization",
        title: "Use Visual Portion Guides",
        description: "Palm = protein serving, fist = vegetables, cupped hand = carbs, thumb = fats.",
        category: TipCategory::PortionControl,
        difficulty: TipDifficulty::Beginner,
    },
    TipDefinition {
        id: "mindful_chewing",
        title: "Chew Slowly and Mindfully",
        description: "Put your fork down between bites. Chew each bite 20-30 times and notice flavors.",
        category: TipCategory::MindfulEating,
        difficulty: TipDifficulty::Intermediate,
    },
    TipDefinition {
        id: "trigger_identification",
        title: "Map Your Eating Triggers",
        description: "Notice patterns: What time? What mood? What situation? Knowledge is power.",
        category: TipCategory::EmotionalEating,
        difficulty: TipDifficulty::Intermediate,
    },
    TipDefinition {
        id: "meal_timing",
        title: "Regular Meal Schedule",
        description: "Eat at consistent times to prevent extreme hunger that leads to overeating.",
        category: TipCategory::MealTiming,
        difficulty: TipDifficulty::Beginner,
    },
];

/// The full tip library in display order
#[must_use]
pub fn coaching_tips() -> Vec<HabitCoachingTip> {
    TIP_LIBRARY.iter().map(TipDefinition::to_tip).collect()
}

/// Tips in one category, in library order
#[must_use]
pub fn tips_for_category(category: TipCategory) -> Vec<HabitCoachingTip> {
    TIP_LIBRARY
        .iter()
        .filter(|tip| tip.category == category)
        .map(TipDefinition::to_tip)
        .collect()
}

/// Category to focus on given recent insight messages
///
/// Matching is by substring: `emotional` wins over `mindful`, which wins over
/// `stress`. Anything else falls back to mindful eating.
#[must_use]
pub fn focus_category(insights: &[BehavioralInsight]) -> TipCategory {
    let mentions = |needle: &str| insights.iter().any(|insight| insight.message.contains(needle));

    if mentions("emotional") {
        TipCategory::EmotionalEating
    } else if mentions("mindful") {
        TipCategory::MindfulEating
    } else if mentions("stress") {
        TipCategory::StressManagement
    } else {
        TipCategory::MindfulEating
    }
}

/// Pick a tip for the focus category of `insights`
///
/// Returns `None` only when the library has no tip in that category.
pub fn personalized_tip<R: Rng + ?Sized>(
    insights: &[BehavioralInsight],
    rng: &mut R,
) -> Option<HabitCoachingTip> {
    let category = focus_category(insights);
    let relevant: Vec<&TipDefinition> = TIP_LIBRARY
        .iter()
        .filter(|tip| tip.category == category)
        .collect();

    let tip = relevant.choose(rng).map(|tip| tip.to_tip());
    debug!(
        ?category,
        candidates = relevant.len(),
        tip = tip.as_ref().map(|tip| tip.id.as_str()),
        "Selected personalized tip"
    );
    tip
}

/// Stage of a meal a prompt belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPhase {
    /// Before the first bite
    PreMeal,
    /// While eating
    DuringMeal,
    /// After finishing
    PostMeal,
}

/// Reflection prompts shown during the mindful eating check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindfulEatingPrompts {
    /// Asked before eating
    pub pre_meal: Vec<String>,
    /// Asked while eating
    pub during_meal: Vec<String>,
    /// Asked after eating
    pub post_meal: Vec<String>,
}

impl MindfulEatingPrompts {
    /// Prompts for one meal phase
    #[must_use]
    pub fn for_phase(&self, phase: MealPhase) -> &[String] {
        match phase {
            MealPhase::PreMeal => &self.pre_meal,
            MealPhase::DuringMeal => &self.during_meal,
            MealPhase::PostMeal => &self.post_meal,
        }
    }
}

const PRE_MEAL_PROMPTS: &[&str] = &[
    "How hungry am I right now on a scale of 1-5?",
    "What emotion am I feeling right now?",
    "Am I eating because I'm hungry or for another reason?",
    "What would satisfy me right now?",
    "How do I want to feel after this meal?",
];

const DURING_MEAL_PROMPTS: &[&str] = &[
    "How does this food taste?",
    "What textures and flavors do I notice?",
    "Am I eating quickly or slowly?",
    "How satisfied am I feeling?",
    "Am I still hungry?",
];

const POST_MEAL_PROMPTS: &[&str] = &[
    "How satisfied do I feel (1-5)?",
    "How was my mindfulness during this meal?",
    "What did I enjoy most about this food?",
    "How do I feel emotionally now?",
    "What would I do differently next time?",
];

/// The static mindful eating prompt library
#[must_use]
pub fn mindful_eating_prompts() -> MindfulEatingPrompts {
    MindfulEatingPrompts {
        pre_meal: owned_prompts(PRE_MEAL_PROMPTS),
        during_meal: owned_prompts(DURING_MEAL_PROMPTS),
        post_meal: owned_prompts(POST_MEAL_PROMPTS),
    }
}

fn owned_prompts(prompts: &[&str]) -> Vec<String> {
    prompts.iter().map(|&prompt| prompt.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_every_focus_category_has_tips() {
        for category in [
            TipCategory::EmotionalEating,
            TipCategory::MindfulEating,
            TipCategory::StressManagement,
        ] {
            assert!(!tips_for_category(category).is_empty());
        }
    }

    #[test]
    fn test_same_seed_selects_same_tip() {
        let pick = |seed| personalized_tip(&[], &mut ChaCha8Rng::seed_from_u64(seed));
        assert_eq!(pick(3), pick(3));
    }
}
