// ABOUTME: Output formatting helpers for mindful-cli
// ABOUTME: Prints command results as pretty JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mindful_coach::errors::{AppError, AppResult};
use serde::Serialize;

/// Print any serializable result as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::serialization(format!("Failed to render output: {e}")).with_source(e))?;
    println!("{rendered}");
    Ok(())
}
