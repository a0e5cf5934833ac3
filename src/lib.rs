// ABOUTME: Main library entry point for the Mindful Coach analytics tools
// ABOUTME: Re-exports the core model and intelligence engine, plus logging, config, and snapshot IO
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mindful Coach
//!
//! Analytics and coaching core for a mindful nutrition and habit tracker. The
//! engine consumes a read-only [`models::AppData`] snapshot and derives moving
//! averages, weight trends, behavioral insights, trigger analyses, persona-based
//! coach advice, goal status, and nutrition targets.
//!
//! ## Workspace
//!
//! - `mindful-core`: data model, errors, constants
//! - `mindful-intelligence`: analyzers and their configuration
//! - this crate: logging, CLI environment, snapshot loading, `mindful-cli`
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use mindful_coach::intelligence::{analyze_for_coach, summarize_analytics};
//! use mindful_coach::snapshot::load_snapshot;
//! use std::path::Path;
//!
//! # fn main() -> mindful_coach::errors::AppResult<()> {
//! let data = load_snapshot(Path::new("snapshot.json"))?;
//! let summary = summarize_analytics(&data.daily_logs, &data.weight_logs, 30, Utc::now());
//! let coach = analyze_for_coach(&data, 14);
//! println!("{:?} {:?}", summary.weight_trend, coach.persona_tags);
//! # Ok(())
//! # }
//! ```

pub use mindful_core::{constants, errors, models};

/// Analytics and coaching engine
pub use mindful_intelligence as intelligence;

/// Configuration management
pub mod config;

/// Structured logging setup
pub mod logging;

/// Snapshot loading
pub mod snapshot;
