// ABOUTME: Coach analyzer deriving behavior ratios and persona tags from recent logs
// ABOUTME: Generates focused coach advice with library actions, a message, and a numeric rationale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coach Analysis and Advice
//!
//! The analyzer reduces the last `lookback_days` logs to a handful of ratios and
//! tags the user with personas. Advice picks a single focus area by persona
//! priority and recommends up to three actions from a static library.
//!
//! Entries carry no timestamps, so "evening snack" is a name heuristic; see
//! [`CoachAnalyzer::is_evening_snack_entry`].

use crate::config::intelligence::CoachConfig;
use crate::config::IntelligenceConfig;
use crate::statistics::{mean, std_dev};
use chrono::NaiveDate;
use mindful_core::models::{AppData, DailyLog, EatingTrigger, FoodEntry};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Behavioral persona assigned from coach ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaTag {
    /// Large share of emotion-triggered entries
    EmotionalEater,
    /// Frequent snack or dessert days
    EveningSnacker,
    /// Eats substantial amounts when not hungry
    HabitualGrazer,
    /// Low average mindful rating
    LowMindfulness,
    /// Protein well below goal
    LowProteinIntake,
    /// Water well below goal
    LowHydration,
}

impl PersonaTag {
    /// Wire name of the tag (matches the serialized form)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmotionalEater => "emotional_eater",
            Self::EveningSnacker => "evening_snacker",
            Self::HabitualGrazer => "habitual_grazer",
            Self::LowMindfulness => "low_mindfulness",
            Self::LowProteinIntake => "low_protein_intake",
            Self::LowHydration => "low_hydration",
        }
    }
}

impl fmt::Display for PersonaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ratios describing recent eating behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachAnalysis {
    /// Requested lookback in days
    pub lookback_days: usize,
    /// Days with at least one meal entry over the lookback (0-1)
    pub logging_consistency: f64,
    /// Mean recorded mindful rating (0-5)
    pub avg_mindfulness: f64,
    /// Population standard deviation of daily calories
    pub calorie_std_dev: f64,
    /// Share of logged days with a qualifying snack or dessert (0-1)
    pub evening_snack_percent: f64,
    /// Share of entries triggered by emotion (0-1)
    pub emotion_trigger_percent: f64,
    /// Share of entries eaten at low hunger with high energy (0-1)
    pub hunger_mismatch_percent: f64,
    /// Mean daily water over the water goal
    pub hydration_ratio: f64,
    /// Mean daily protein over the protein goal
    pub protein_ratio: f64,
    /// Assigned personas, in tagging order
    pub persona_tags: Vec<PersonaTag>,
}

impl CoachAnalysis {
    /// Analysis with every ratio at zero and no tags
    #[must_use]
    pub const fn empty(lookback_days: usize) -> Self {
        Self {
            lookback_days,
            logging_consistency: 0.0,
            avg_mindfulness: 0.0,
            calorie_std_dev: 0.0,
            evening_snack_percent: 0.0,
            emotion_trigger_percent: 0.0,
            hunger_mismatch_percent: 0.0,
            hydration_ratio: 0.0,
            protein_ratio: 0.0,
            persona_tags: Vec::new(),
        }
    }

    /// Whether `tag` was assigned
    #[must_use]
    pub fn has_tag(&self, tag: PersonaTag) -> bool {
        self.persona_tags.contains(&tag)
    }
}

/// Expected effect of a coach action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Small effect
    Low,
    /// Moderate effect
    Medium,
    /// Large effect
    High,
}

/// A concrete action the coach can recommend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachAction {
    /// Stable identifier, also the key of daily completion records
    pub id: String,
    /// Short label
    pub label: String,
    /// What to do
    pub description: String,
    /// Area the action works on
    #[serde(rename = "focusArea")]
    pub focus_area: String,
    /// Expected effect
    pub impact: Impact,
    /// Personas this action suits
    pub recommended_for: Vec<PersonaTag>,
    /// Completion state for a given day, once marked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

/// Advice for the coming days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachAdvice {
    /// Single focus area chosen by persona priority
    pub focus_area: String,
    /// Coaching message for the focus area
    pub message: String,
    /// Numbers behind the advice, joined with ` • `
    pub rationale: String,
    /// Personas from the underlying analysis
    pub persona_tags: Vec<PersonaTag>,
    /// Recommended actions in library order
    pub actions: Vec<CoachAction>,
    /// Date the advice was generated for
    pub generated_at: NaiveDate,
}

struct ActionDefinition {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    focus_area: &'static str,
    impact: Impact,
    recommended_for: &'static [PersonaTag],
}

impl ActionDefinition {
    fn suits(&self, tags: &[PersonaTag]) -> bool {
        self.recommended_for.iter().any(|tag| tags.contains(tag))
    }

    fn to_action(&self) -> CoachAction {
        CoachAction {
            id: self.id.to_owned(),
            label: self.label.to_owned(),
            description: self.description.to_owned(),
            focus_area: self.focus_area.to_owned(),
            impact: self.impact,
            recommended_for: self.recommended_for.to_vec(),
            done: None,
        }
    }
}

const ACTION_LIBRARY: &[ActionDefinition] = &[
    ActionDefinition {
        id: "mindful_breath",
        label: "Pre-meal 3-breath pause",
        description: "Pause for three slow breaths before eating to raise mindfulness.",
        focus_area: "mindfulness",
        impact: Impact::Medium,
        recommended_for: &[PersonaTag::LowMindfulness, PersonaTag::EmotionalEater],
    },
    ActionDefinition {
        id: "hydrate_morning",
        label: "Morning hydration",
        description: "Drink 500ml water within 30 minutes of waking.",
        focus_area: "hydration",
        impact: Impact::Low,
        recommended_for: &[PersonaTag::LowHydration],
    },
    ActionDefinition {
        id: "protein_breakfast",
        label: "Protein breakfast",
        description: "Include ≥25g protein at breakfast to improve satiety.",
        focus_area: "protein",
        impact: Impact::High,
        recommended_for: &[PersonaTag::LowProteinIntake, PersonaTag::EveningSnacker],
    },
    ActionDefinition {
        id: "evening_swap",
        label: "Evening swap",
        description: "Swap evening high-calorie snack for herbal tea or fruit 3 nights this week.",
        focus_area: "evening",
        impact: Impact::Medium,
        recommended_for: &[PersonaTag::EveningSnacker],
    },
    ActionDefinition {
        id: "emotion_journal",
        label: "Emotion journal",
        description: "Write 1–2 lines describing feelings before emotional snack.",
        focus_area: "emotions",
        impact: Impact::Medium,
        recommended_for: &[PersonaTag::EmotionalEater],
    },
];

/// Focus areas in priority order, with their coaching message
const FOCUS_PRIORITY: &[(PersonaTag, &str, &str)] = &[
    (
        PersonaTag::EmotionalEater,
        "emotional regulation",
        "You have a pattern of eating driven by emotions. Building a brief pre-meal awareness habit can reduce impulsive choices.",
    ),
    (
        PersonaTag::EveningSnacker,
        "evening routine",
        "Evenings appear to contribute a sizeable calorie share. Adjusting your late routine and boosting morning protein can help.",
    ),
    (
        PersonaTag::LowHydration,
        "hydration",
        "Hydration is below target. Improving water intake can aid appetite regulation and energy.",
    ),
    (
        PersonaTag::LowMindfulness,
        "mindful eating",
        "Mindfulness scores are low. Small pauses and sensory check-ins can enhance satiety awareness.",
    ),
    (
        PersonaTag::LowProteinIntake,
        "protein distribution",
        "Protein intake lags behind your goal. Earlier-day protein can reduce late snacking.",
    ),
];

const DEFAULT_FOCUS_AREA: &str = "consistency";
const DEFAULT_FOCUS_MESSAGE: &str =
    "You are building a solid foundation. Let’s refine one small area this week to keep momentum.";
const RATIONALE_SEPARATOR: &str = " • ";

/// The full action library in recommendation order
#[must_use]
pub fn action_library() -> Vec<CoachAction> {
    ACTION_LIBRARY
        .iter()
        .map(ActionDefinition::to_action)
        .collect()
}

/// Per-day tallies collected while scanning logs
#[derive(Default)]
struct DayTallies {
    days_with_meals: usize,
    evening_snack_days: usize,
    total_entries: usize,
    emotion_entries: usize,
    hunger_mismatch_entries: usize,
    daily_calories: Vec<f64>,
    mindful_ratings: Vec<f64>,
    water_totals: Vec<f64>,
    protein_totals: Vec<f64>,
}

/// Derives coach analysis and advice
#[derive(Debug, Clone)]
pub struct CoachAnalyzer {
    config: CoachConfig,
    snack_pattern: Option<Regex>,
}

impl Default for CoachAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachAnalyzer {
    /// Create an analyzer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IntelligenceConfig::global().coach.clone())
    }

    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub fn with_config(config: CoachConfig) -> Self {
        let keywords: Vec<String> = config
            .heuristics
            .evening_snack_keywords
            .iter()
            .map(|keyword| keyword.trim())
            .filter(|keyword| !keyword.is_empty())
            .map(regex::escape)
            .collect();
        // An empty alternation matches every name
        let snack_pattern = if keywords.is_empty() {
            warn!("No evening snack keywords configured, heuristic disabled");
            None
        } else {
            RegexBuilder::new(&keywords.join("|"))
                .case_insensitive(true)
                .build()
                .inspect_err(|e| warn!("Invalid evening snack keywords, heuristic disabled: {e}"))
                .ok()
        };
        Self {
            config,
            snack_pattern,
        }
    }

    /// Heuristic: whether an entry counts toward an evening-snack day
    ///
    /// Entries have no time of day, so this matches the food name against the
    /// configured keywords (`snack`, `dessert` by default, case-insensitive) and
    /// requires more than the configured energy (120 kcal by default).
    #[must_use]
    pub fn is_evening_snack_entry(&self, entry: &FoodEntry) -> bool {
        entry.calories > self.config.heuristics.evening_snack_min_calories
            && self
                .snack_pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(&entry.name))
    }

    fn is_hunger_mismatch(&self, entry: &FoodEntry) -> bool {
        let heuristics = &self.config.heuristics;
        entry
            .hunger_level
            .is_some_and(|level| (1..=heuristics.hunger_mismatch_max_level).contains(&level))
            && entry.calories > heuristics.hunger_mismatch_min_calories
    }

    fn tally(&self, logs: &[&DailyLog]) -> DayTallies {
        let mut tallies = DayTallies::default();
        for log in logs {
            if log.has_meals() {
                tallies.days_with_meals += 1;
            }
            tallies.daily_calories.push(log.total_calories());
            if log.entries().any(|entry| self.is_evening_snack_entry(entry)) {
                tallies.evening_snack_days += 1;
            }
            for entry in log.entries() {
                tallies.total_entries += 1;
                if entry.eating_trigger == Some(EatingTrigger::Emotion) {
                    tallies.emotion_entries += 1;
                }
                if self.is_hunger_mismatch(entry) {
                    tallies.hunger_mismatch_entries += 1;
                }
            }
            tallies.mindful_ratings.extend(log.mindful_ratings());
            tallies.water_totals.push(log.water_ml);
            tallies.protein_totals.push(log.total_protein_g());
        }
        tallies
    }

    /// Analyze the last `lookback_days` logs of `data`
    #[must_use]
    pub fn analyze(&self, data: &AppData, lookback_days: usize) -> CoachAnalysis {
        let skip = data.daily_logs.len().saturating_sub(lookback_days);
        let logs: Vec<&DailyLog> = data.daily_logs.values().skip(skip).collect();
        if logs.is_empty() {
            debug!(lookback_days, "No logs in coach lookback window");
            return CoachAnalysis::empty(lookback_days);
        }

        let tallies = self.tally(&logs);
        let goals = &data.profile.goals;

        let mut analysis = CoachAnalysis {
            lookback_days,
            logging_consistency: tallies.days_with_meals as f64 / lookback_days as f64,
            avg_mindfulness: mean(&tallies.mindful_ratings),
            calorie_std_dev: std_dev(&tallies.daily_calories),
            evening_snack_percent: ratio(tallies.evening_snack_days, tallies.days_with_meals),
            emotion_trigger_percent: ratio(tallies.emotion_entries, tallies.total_entries),
            hunger_mismatch_percent: ratio(
                tallies.hunger_mismatch_entries,
                tallies.total_entries,
            ),
            hydration_ratio: mean(&tallies.water_totals) / goal_or_one(goals.water_ml),
            protein_ratio: mean(&tallies.protein_totals) / goal_or_one(goals.protein_g),
            persona_tags: Vec::new(),
        };
        analysis.persona_tags = self.persona_tags(&analysis);

        debug!(
            days = logs.len(),
            entries = tallies.total_entries,
            tags = ?analysis.persona_tags,
            "Coach analysis complete"
        );
        analysis
    }

    fn persona_tags(&self, analysis: &CoachAnalysis) -> Vec<PersonaTag> {
        let thresholds = &self.config.personas;
        [
            (
                analysis.emotion_trigger_percent > thresholds.emotional_eater,
                PersonaTag::EmotionalEater,
            ),
            (
                analysis.evening_snack_percent > thresholds.evening_snacker,
                PersonaTag::EveningSnacker,
            ),
            (
                analysis.hunger_mismatch_percent > thresholds.habitual_grazer,
                PersonaTag::HabitualGrazer,
            ),
            (
                analysis.avg_mindfulness < thresholds.low_mindfulness,
                PersonaTag::LowMindfulness,
            ),
            (
                analysis.protein_ratio < thresholds.low_protein_ratio,
                PersonaTag::LowProteinIntake,
            ),
            (
                analysis.hydration_ratio < thresholds.low_hydration_ratio,
                PersonaTag::LowHydration,
            ),
        ]
        .into_iter()
        .filter_map(|(applies, tag)| applies.then_some(tag))
        .collect()
    }

    /// Generate advice from the last `lookback_days` logs, dated `today`
    #[must_use]
    pub fn advise(&self, data: &AppData, lookback_days: usize, today: NaiveDate) -> CoachAdvice {
        let analysis = self.analyze(data, lookback_days);
        let tags = &analysis.persona_tags;

        let actions: Vec<CoachAction> = ACTION_LIBRARY
            .iter()
            .filter(|action| action.suits(tags))
            .take(self.config.max_actions)
            .map(ActionDefinition::to_action)
            .collect();

        let (focus_area, message) = FOCUS_PRIORITY
            .iter()
            .find(|(tag, _, _)| tags.contains(tag))
            .map_or((DEFAULT_FOCUS_AREA, DEFAULT_FOCUS_MESSAGE), |&(_, area, message)| {
                (area, message)
            });

        CoachAdvice {
            focus_area: focus_area.to_owned(),
            message: message.to_owned(),
            rationale: self.rationale(&analysis),
            persona_tags: analysis.persona_tags.clone(),
            actions,
            generated_at: today,
        }
    }

    fn rationale(&self, analysis: &CoachAnalysis) -> String {
        let thresholds = &self.config.rationale;
        let mut parts = vec![
            format!(
                "Logging consistency {:.0}%",
                analysis.logging_consistency * 100.0
            ),
            format!("Avg mindfulness {:.1}/5", analysis.avg_mindfulness),
        ];
        if analysis.emotion_trigger_percent > thresholds.emotion_percent {
            parts.push(format!(
                "Emotion-driven meals {:.0}%",
                analysis.emotion_trigger_percent * 100.0
            ));
        }
        if analysis.evening_snack_percent > thresholds.evening_snack_percent {
            parts.push(format!(
                "Evening snack days {:.0}%",
                analysis.evening_snack_percent * 100.0
            ));
        }
        if analysis.hydration_ratio < thresholds.hydration_ratio {
            parts.push(format!(
                "Hydration {:.0}% of goal",
                analysis.hydration_ratio * 100.0
            ));
        }
        if analysis.protein_ratio < thresholds.protein_ratio {
            parts.push(format!(
                "Protein {:.0}% of goal",
                analysis.protein_ratio * 100.0
            ));
        }
        parts.join(RATIONALE_SEPARATOR)
    }
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Goals of zero (unset) divide by one
fn goal_or_one(goal: f64) -> f64 {
    if goal > 0.0 {
        goal
    } else {
        1.0
    }
}

/// Analyze the last `lookback_days` logs with the global configuration
#[must_use]
pub fn analyze_for_coach(data: &AppData, lookback_days: usize) -> CoachAnalysis {
    CoachAnalyzer::new().analyze(data, lookback_days)
}

/// Generate coach advice with the global configuration
///
/// `today` is the caller's local date and becomes `generated_at`.
#[must_use]
pub fn generate_coach_advice(
    data: &AppData,
    lookback_days: usize,
    today: NaiveDate,
) -> CoachAdvice {
    CoachAnalyzer::new().advise(data, lookback_days, today)
}

/// Mark each advised action done or not from a day's completion records
pub fn mark_completed_actions(advice: &mut CoachAdvice, log: &DailyLog) {
    for action in &mut advice.actions {
        action.done = Some(log.is_action_done(&action.id));
    }
}
