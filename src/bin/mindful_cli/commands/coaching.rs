// ABOUTME: Coaching commands for mindful-cli
// ABOUTME: Coach analysis, advice, goal evaluation, and nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CommandContext;
use crate::helpers::display::print_json;
use anyhow::Result;
use mindful_coach::intelligence::{
    analyze_for_coach, calculate_macro_targets, evaluate_goals, generate_coach_advice,
    mark_completed_actions,
};
use tracing::debug;

pub fn coach(context: &CommandContext) -> Result<()> {
    let lookback = context.lookback_or(context.config.coach.default_lookback_days);
    print_json(&analyze_for_coach(&context.data, lookback))?;
    Ok(())
}

pub fn advice(context: &CommandContext) -> Result<()> {
    let lookback = context.lookback_or(context.config.coach.default_lookback_days);
    let mut advice = generate_coach_advice(&context.data, lookback, context.today);

    if let Some(log) = context.data.daily_logs.get(&context.today) {
        mark_completed_actions(&mut advice, log);
    } else {
        debug!(today = %context.today, "No log for today, leaving action status unset");
    }

    print_json(&advice)?;
    Ok(())
}

pub fn goals(context: &CommandContext) -> Result<()> {
    print_json(&evaluate_goals(&context.data, context.now))?;
    Ok(())
}

pub fn targets(context: &CommandContext) -> Result<()> {
    let targets = calculate_macro_targets(&context.data.profile, &context.config.nutrition)?;
    print_json(&targets)?;
    Ok(())
}
