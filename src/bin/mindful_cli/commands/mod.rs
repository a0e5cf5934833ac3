// ABOUTME: Command implementations for mindful-cli
// ABOUTME: Shared command context plus analytics and coaching commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod analytics;
mod coaching;

pub use analytics::{insights, prompts, summary, tip, triggers};
pub use coaching::{advice, coach, goals, targets};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Utc};
use mindful_coach::config::IntelligenceConfig;
use mindful_coach::errors::AppResult;
use mindful_coach::models::AppData;
use mindful_coach::snapshot::load_snapshot;
use std::path::Path;

/// Everything a command needs: the snapshot, the evaluation date, and config
pub struct CommandContext {
    pub data: AppData,
    pub today: NaiveDate,
    pub now: DateTime<Utc>,
    pub lookback: Option<usize>,
    pub config: &'static IntelligenceConfig,
}

impl CommandContext {
    /// Load the snapshot and fix the evaluation clock
    ///
    /// A pinned `today` evaluates at noon UTC of that date so runs are reproducible.
    pub fn load(path: &Path, today: Option<NaiveDate>, lookback: Option<usize>) -> AppResult<Self> {
        let data = load_snapshot(path)?;
        let (today, now) = today.map_or_else(
            || (Local::now().date_naive(), Utc::now()),
            |date| (date, date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(12)),
        );

        Ok(Self {
            data,
            today,
            now,
            lookback,
            config: IntelligenceConfig::global(),
        })
    }

    /// Requested lookback, or the command's configured default
    pub fn lookback_or(&self, default_days: usize) -> usize {
        self.lookback.unwrap_or(default_days)
    }
}
