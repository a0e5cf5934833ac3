// ABOUTME: Environment configuration for the command-line tool
// ABOUTME: Resolves the snapshot path and an optional fixed "today" from MINDFUL_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the CLI

use crate::constants::env_vars;
use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Settings the CLI reads from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliEnvironment {
    /// Default snapshot path (`MINDFUL_DATA_PATH`)
    pub data_path: Option<PathBuf>,
    /// Fixed local date for reproducible runs (`MINDFUL_TODAY`, `YYYY-MM-DD`)
    pub today: Option<NaiveDate>,
}

impl CliEnvironment {
    /// Read the CLI environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `MINDFUL_TODAY` is not a `YYYY-MM-DD` date
    pub fn from_env() -> AppResult<Self> {
        let data_path = env::var_os(env_vars::DATA_PATH)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let today = env::var(env_vars::TODAY)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| parse_date(value.trim()))
            .transpose()?;

        debug!(?data_path, ?today, "Loaded CLI environment");
        Ok(Self { data_path, today })
    }

    /// Pick the snapshot path: an explicit argument wins over the environment
    ///
    /// # Errors
    ///
    /// Returns a missing-field error if neither source provides a path
    pub fn resolve_data_path(&self, explicit: Option<PathBuf>) -> AppResult<PathBuf> {
        explicit.or_else(|| self.data_path.clone()).ok_or_else(|| {
            AppError::new(
                ErrorCode::MissingRequiredField,
                format!(
                    "No snapshot path given; pass --data or set {}",
                    env_vars::DATA_PATH
                ),
            )
        })
    }
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns a configuration error naming the rejected value
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        AppError::config(format!("Invalid date '{value}', expected YYYY-MM-DD"))
            .with_source(e)
    })
}
