// ABOUTME: Configuration module for the Mindful Coach tools
// ABOUTME: CLI environment settings plus re-exports of the intelligence configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment settings read by the command-line tool
pub mod environment;

pub use environment::CliEnvironment;
pub use mindful_intelligence::config::{intelligence, ConfigError, IntelligenceConfig};
