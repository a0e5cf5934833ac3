// ABOUTME: Core types and constants for the Mindful Coach analytics workspace
// ABOUTME: Foundation crate with the snapshot data model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mindful Core
//!
//! Foundation crate providing the shared data model and error types for the
//! Mindful Coach analytics workspace. It is designed to change infrequently so
//! the analytics crate and the CLI can build against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Meal names, default lookbacks, and environment variable names
//! - **models**: Read-only snapshot model (`AppData`, `DailyLog`, `FoodEntry`, ...)

/// Unified error handling with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Snapshot data model
pub mod models;
