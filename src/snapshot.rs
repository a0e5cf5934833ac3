// ABOUTME: Snapshot loading for the JSON data export of the mobile app
// ABOUTME: Reads and parses AppData from a file or string with structured errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::AppData;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Parse a snapshot from JSON text
///
/// # Errors
///
/// Returns an `InvalidFormat` error if the text is not a valid snapshot
pub fn parse_snapshot(json: &str) -> AppResult<AppData> {
    let data: AppData = serde_json::from_str(json)?;
    debug!(
        daily_logs = data.daily_logs.len(),
        weight_logs = data.weight_logs.len(),
        goals = data.profile.goals_list.len(),
        "Parsed snapshot"
    );
    Ok(data)
}

/// Load a snapshot from a JSON file
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `StorageError` if it
/// cannot be read, and `InvalidFormat` if it is not a valid snapshot
pub fn load_snapshot(path: &Path) -> AppResult<AppData> {
    let resource = path.display().to_string();
    let json = fs::read_to_string(path).map_err(|e| {
        let error = if e.kind() == io::ErrorKind::NotFound {
            AppError::not_found(format!("Snapshot file {resource}"))
        } else {
            AppError::storage(format!("Failed to read snapshot {resource}: {e}"))
        };
        error.with_resource_id(&resource).with_source(e)
    })?;
    let data = parse_snapshot(&json).map_err(|e| e.with_resource_id(&resource))?;
    info!(path = %resource, days = data.daily_logs.len(), "Loaded snapshot");
    Ok(data)
}
