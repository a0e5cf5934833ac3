// ABOUTME: Analytics commands for mindful-cli
// ABOUTME: Summary, behavioral insights, triggers, tips, and mindful eating prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CommandContext;
use crate::helpers::display::print_json;
use anyhow::Result;
use mindful_coach::intelligence::{
    analyze_behavioral_patterns, analyze_triggers, mindful_eating_prompts, personalized_tip,
    summarize_analytics,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

pub fn summary(context: &CommandContext) -> Result<()> {
    let lookback = context.lookback_or(context.config.analytics.default_lookback_days);
    let summary = summarize_analytics(
        &context.data.daily_logs,
        &context.data.weight_logs,
        lookback,
        context.now,
    );
    print_json(&summary)?;
    Ok(())
}

pub fn insights(context: &CommandContext) -> Result<()> {
    let days = context.lookback_or(context.config.behavioral.default_window_days);
    print_json(&analyze_behavioral_patterns(&context.data.daily_logs, days))?;
    Ok(())
}

pub fn triggers(context: &CommandContext) -> Result<()> {
    print_json(&analyze_triggers(&context.data.daily_logs))?;
    Ok(())
}

pub fn tip(context: &CommandContext, seed: Option<u64>) -> Result<()> {
    let days = context.lookback_or(context.config.behavioral.default_window_days);
    let insights = analyze_behavioral_patterns(&context.data.daily_logs, days);

    let tip = if let Some(seed) = seed {
        debug!(seed, "Selecting tip with seeded generator");
        personalized_tip(&insights, &mut ChaCha8Rng::seed_from_u64(seed))
    } else {
        personalized_tip(&insights, &mut rand::thread_rng())
    };

    print_json(&tip)?;
    Ok(())
}

pub fn prompts() -> Result<()> {
    print_json(&mindful_eating_prompts())?;
    Ok(())
}
