// ABOUTME: Tests for environment-driven configuration
// ABOUTME: Covers intelligence threshold overrides, validation errors, CLI environment, and logging config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use mindful_coach::config::environment::parse_date;
use mindful_coach::config::{CliEnvironment, ConfigError, IntelligenceConfig};
use mindful_coach::errors::{AppError, ErrorCode};
use mindful_coach::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

/// Run `test` with `vars` set, removing them afterwards
fn with_env<F: FnOnce()>(vars: &[(&str, &str)], test: F) {
    for (key, value) in vars {
        env::set_var(key, value);
    }
    test();
    for (key, _) in vars {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    let loaded = IntelligenceConfig::load().unwrap();
    let defaults = IntelligenceConfig::default();

    assert_eq!(loaded.coach.max_actions, defaults.coach.max_actions);
    assert_eq!(
        loaded.analytics.default_lookback_days,
        defaults.analytics.default_lookback_days
    );
}

#[test]
#[serial]
fn test_env_overrides_thresholds() {
    with_env(
        &[
            ("MINDFUL_COACH_MAX_ACTIONS", "2"),
            ("MINDFUL_BEHAVIORAL_STREAK_DAYS", " 10 "),
            ("MINDFUL_ANALYTICS_FORECAST_DAYS", "30"),
            ("MINDFUL_GOALS_NUTRITION_TOLERANCE", "0.2"),
        ],
        || {
            let config = IntelligenceConfig::load().unwrap();
            assert_eq!(config.coach.max_actions, 2);
            assert_eq!(config.behavioral.streak_achievement_days, 10);
            assert_eq!(config.analytics.forecast_days, 30);
            assert!((config.goals.nutrition_tolerance - 0.2).abs() < f64::EPSILON);
        },
    );
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    with_env(&[("MINDFUL_COACH_MAX_ACTIONS", "three")], || {
        let error = IntelligenceConfig::load().unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
        assert!(error.to_string().contains("MINDFUL_COACH_MAX_ACTIONS"));
    });
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    with_env(&[("MINDFUL_COACH_EMOTIONAL_EATER_THRESHOLD", "1.5")], || {
        let error = IntelligenceConfig::load().unwrap_err();
        assert!(matches!(error, ConfigError::ValueOutOfRange(_)));

        let app_error = AppError::from(error);
        assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    });
}

#[test]
fn test_zero_max_actions_is_invalid() {
    let mut config = IntelligenceConfig::default();
    config.coach.max_actions = 0;
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_cli_environment_reads_path_and_today() {
    with_env(
        &[
            ("MINDFUL_DATA_PATH", "/tmp/snapshot.json"),
            ("MINDFUL_TODAY", "2024-03-08"),
        ],
        || {
            let environment = CliEnvironment::from_env().unwrap();
            assert_eq!(
                environment.data_path,
                Some(PathBuf::from("/tmp/snapshot.json"))
            );
            assert_eq!(environment.today, Some(common::date("2024-03-08")));
        },
    );
}

#[test]
#[serial]
fn test_cli_environment_rejects_bad_today() {
    with_env(&[("MINDFUL_TODAY", "08/03/2024")], || {
        let error = CliEnvironment::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigError);
        assert!(error.message.contains("08/03/2024"));
    });
}

#[test]
fn test_explicit_data_path_wins() {
    let environment = CliEnvironment {
        data_path: Some(PathBuf::from("from-env.json")),
        today: None,
    };

    assert_eq!(
        environment
            .resolve_data_path(Some(PathBuf::from("explicit.json")))
            .unwrap(),
        PathBuf::from("explicit.json")
    );
    assert_eq!(
        environment.resolve_data_path(None).unwrap(),
        PathBuf::from("from-env.json")
    );
}

#[test]
fn test_missing_data_path_is_reported() {
    let error = CliEnvironment::default().resolve_data_path(None).unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert!(error.message.contains("MINDFUL_DATA_PATH"));
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2024-02-29").unwrap(), common::date("2024-02-29"));
    assert!(parse_date("2023-02-29").is_err());
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Compact);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    with_env(&[("RUST_LOG", "info"), ("LOG_FORMAT", "json")], || {
        let config = LoggingConfig::from_env();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.verbose().level, "debug");
    });
}

#[test]
#[serial]
fn test_logging_defaults_are_quiet() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, "mindful-cli");
}
