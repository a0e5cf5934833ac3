// ABOUTME: Application-wide constants shared by the analytics crates and the CLI
// ABOUTME: Service names, meal names, and default lookback windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the command-line tool
    pub const MINDFUL_CLI: &str = "mindful-cli";
}

/// Meal names used as keys in `DailyLog::meals`
pub mod meals {
    /// Breakfast slot
    pub const BREAKFAST: &str = "Breakfast";
    /// Lunch slot
    pub const LUNCH: &str = "Lunch";
    /// Dinner slot
    pub const DINNER: &str = "Dinner";
    /// Snack slot
    pub const SNACKS: &str = "Snacks";
}

/// Default lookback windows (days)
pub mod lookback {
    /// Analytics summary window
    pub const ANALYTICS_DAYS: usize = 30;
    /// Behavioral pattern window
    pub const BEHAVIORAL_DAYS: usize = 7;
    /// Coach analysis window
    pub const COACH_DAYS: usize = 14;
}

/// Environment variable names
pub mod env_vars {
    /// Default snapshot path for the CLI
    pub const DATA_PATH: &str = "MINDFUL_DATA_PATH";
    /// Fixed local date for reproducible CLI runs
    pub const TODAY: &str = "MINDFUL_TODAY";
}
