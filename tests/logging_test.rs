// ABOUTME: Tests for installing the global tracing subscriber
// ABOUTME: Kept in its own binary because a process can only install one subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mindful_coach::logging::{LogFormat, LoggingConfig};

#[test]
fn test_pretty_format_installs_once() {
    let config = LoggingConfig {
        format: LogFormat::Pretty,
        include_location: true,
        ..LoggingConfig::default()
    };

    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}
