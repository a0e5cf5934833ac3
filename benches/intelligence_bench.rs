// ABOUTME: Criterion benchmarks for the analytics and coaching engine
// ABOUTME: Measures statistics, summaries, insights, coach advice, and goal evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the analytics and coaching engine.
//!
//! Measures the statistical primitives and each analyzer over generated
//! snapshots of one week, one quarter, and one year.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::{DateTime, NaiveDate, Utc};
use common::fixtures::{generate_snapshot, SnapshotSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mindful_coach::intelligence::config::intelligence::{
    AnalyticsConfig, BehavioralConfig, CoachConfig, GoalConfig,
};
use mindful_coach::intelligence::{
    analyze_triggers, linear_regression, moving_average, personalized_tip, std_dev,
    AnalyticsSummarizer, BehavioralAnalyzer, CoachAnalyzer, DataPoint, GoalEvaluator,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SIZES: [SnapshotSize; 3] = [SnapshotSize::Week, SnapshotSize::Quarter, SnapshotSize::Year];

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

fn now() -> DateTime<Utc> {
    today().and_hms_opt(12, 0, 0).unwrap_or_default().and_utc()
}

/// Benchmark the statistical primitives over a year of values
#[allow(clippy::cast_precision_loss)]
fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");
    let values: Vec<f64> = (0..365).map(|i| 1800.0 + f64::from(i % 40) * 10.0).collect();
    let points: Vec<DataPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| DataPoint::new(i as f64, value))
        .collect();

    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("moving_average_30", |b| {
        b.iter(|| moving_average(black_box(&values), 30));
    });
    group.bench_function("std_dev", |b| {
        b.iter(|| std_dev(black_box(&values)));
    });
    group.bench_function("linear_regression", |b| {
        b.iter(|| linear_regression(black_box(&points)));
    });
    group.finish();
}

/// Benchmark the analytics summary across snapshot sizes
fn bench_analytics_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics_summary");
    let summarizer = AnalyticsSummarizer::with_config(AnalyticsConfig::default());

    for size in SIZES {
        let data = generate_snapshot(size);
        group.throughput(Throughput::Elements(size.days() as u64));
        group.bench_with_input(BenchmarkId::new("summarize", size.days()), &data, |b, data| {
            b.iter(|| {
                summarizer.summarize(
                    black_box(&data.daily_logs),
                    black_box(&data.weight_logs),
                    size.days(),
                    now(),
                )
            });
        });
    }
    group.finish();
}

/// Benchmark behavioral insights, triggers, and tip selection
fn bench_behavioral(c: &mut Criterion) {
    let mut group = c.benchmark_group("behavioral");
    let analyzer = BehavioralAnalyzer::with_config(BehavioralConfig::default());
    let data = generate_snapshot(SnapshotSize::Year);

    group.bench_function("weekly_insights", |b| {
        b.iter(|| analyzer.analyze(black_box(&data.daily_logs), 7));
    });
    group.bench_function("trigger_analysis_year", |b| {
        b.iter(|| analyze_triggers(black_box(&data.daily_logs)));
    });

    let insights = analyzer.analyze(&data.daily_logs, 7);
    group.bench_function("personalized_tip", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| personalized_tip(black_box(&insights), &mut rng));
    });
    group.finish();
}

/// Benchmark coach analysis and advice across lookbacks
fn bench_coach(c: &mut Criterion) {
    let mut group = c.benchmark_group("coach");
    let analyzer = CoachAnalyzer::with_config(CoachConfig::default());
    let data = generate_snapshot(SnapshotSize::Year);

    for lookback in [7_usize, 14, 90] {
        group.bench_with_input(BenchmarkId::new("analyze", lookback), &lookback, |b, &days| {
            b.iter(|| analyzer.analyze(black_box(&data), days));
        });
    }
    group.bench_function("advise_14_days", |b| {
        b.iter(|| analyzer.advise(black_box(&data), 14, today()));
    });
    group.finish();
}

/// Benchmark the full pipeline a dashboard refresh runs
fn bench_dashboard_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("dashboard_pipeline");
    group.sample_size(50);

    let data = generate_snapshot(SnapshotSize::Year);
    let summarizer = AnalyticsSummarizer::with_config(AnalyticsConfig::default());
    let behavioral = BehavioralAnalyzer::with_config(BehavioralConfig::default());
    let coach = CoachAnalyzer::with_config(CoachConfig::default());
    let goals = GoalEvaluator::with_config(GoalConfig::default(), AnalyticsConfig::default());

    group.bench_function("full_refresh", |b| {
        b.iter(|| {
            let summary = summarizer.summarize(&data.daily_logs, &data.weight_logs, 30, now());
            let insights = behavioral.analyze(&data.daily_logs, 7);
            let advice = coach.advise(&data, 14, today());
            let recommendations = goals.evaluate(&data, now());
            black_box((summary, insights, advice, recommendations))
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_statistics,
    bench_analytics_summary,
    bench_behavioral,
    bench_coach,
    bench_dashboard_pipeline
);
criterion_main!(benches);
