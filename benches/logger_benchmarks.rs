//! Criterion benchmarks for section_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use section_logger::core::{template, FormattingPolicy};
use section_logger::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

fn bench_logger(name: &str) -> Logger {
    let mut logger = Logger::with_registry(name, Arc::new(LoggerRegistry::new()));
    logger.add_sink(shared(MemorySink::bounded(64)));
    logger
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_memory_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_logging");
    group.throughput(Throughput::Elements(1));

    let mut logger = bench_logger("bench_memory");

    group.bench_function("plain_str", |b| {
        b.iter(|| {
            logger.log_str(Severity::Info, black_box("Benchmark message"));
        });
    });

    group.bench_function("format_args", |b| {
        b.iter(|| {
            logger
                .info(format_args!("Request {} took {}ms", black_box(42), black_box(17)))
                .unwrap();
        });
    });

    group.bench_function("runtime_template", |b| {
        b.iter(|| {
            logger
                .log_template(Severity::Info, black_box("Request {} took {}ms"), &[&42, &17])
                .unwrap();
        });
    });

    group.bench_function("multiline", |b| {
        b.iter(|| {
            logger.info(black_box("first\nsecond\nthird")).unwrap();
        });
    });

    group.finish();
}

fn bench_file_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_logging");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut logger = Logger::with_registry("bench_file", Arc::new(LoggerRegistry::new()));
    logger.add_file_sink(temp_dir.path().join("bench.log"), true).unwrap();

    group.bench_function("file", |b| {
        b.iter(|| {
            logger.info(black_box("Benchmark message to file")).unwrap();
        });
    });

    let mut rotating = Logger::with_registry("bench_rotating", Arc::new(LoggerRegistry::new()));
    rotating
        .add_rotating_file_sink(temp_dir.path().join("rotating.log"), 1024 * 1024, 2)
        .unwrap();

    group.bench_function("rotating_file", |b| {
        b.iter(|| {
            rotating.info(black_box("Benchmark message to rotating file")).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Section Benchmarks
// ============================================================================

fn bench_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("sections");
    group.throughput(Throughput::Elements(1));

    let mut logger = bench_logger("bench_sections");

    group.bench_function("scoped_section", |b| {
        b.iter(|| {
            let mut section = ScopedSection::new(&mut logger, black_box("work")).unwrap();
            section.debug("inside").unwrap();
        });
    });

    group.bench_function("muted_section", |b| {
        b.iter(|| {
            let mut quiet = ScopedSection::muted(&mut logger);
            quiet.error(black_box("dropped")).unwrap();
        });
    });

    let policy = FormattingPolicy::new();
    group.bench_function("prefix_depth_8", |b| {
        b.iter(|| black_box(policy.apply(Severity::Warn, black_box(8), "body")));
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let mut logger = bench_logger("bench_filter");
    logger.set_level(Severity::Warn);

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger
                .debug(format_args!("filtered {}", black_box(1)))
                .unwrap();
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("This should be logged")).unwrap();
        });
    });

    let mut console = ConsoleLogger::new(std::io::sink()).with_colors(false);
    console.disable_level(Severity::Debug);

    group.bench_function("bitmask_disabled", |b| {
        b.iter(|| {
            console.debug(format_args!("filtered {}", black_box(1))).unwrap();
        });
    });

    group.bench_function("bitmask_enabled", |b| {
        b.iter(|| {
            console.error(format_args!("logged {}", black_box(1))).unwrap();
        });
    });

    group.finish();
}

fn bench_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("template");

    group.bench_function("positional", |b| {
        b.iter(|| template::format(black_box("{1} before {0}, {{literal}}"), &[&"a", &2]).unwrap());
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_memory_logging,
    bench_file_logging,
    bench_sections,
    bench_level_filtering,
    bench_template
);

criterion_main!(benches);
