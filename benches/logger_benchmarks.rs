//! Criterion benchmarks for log_dispatch

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use log_dispatch::prelude::*;
use std::sync::Arc;

/// Emitter that does nothing, to measure dispatch overhead alone
struct NullEmitter;

impl Emitter for NullEmitter {
    fn emit(&self, logger_name: &str, record: &Record) -> Result<()> {
        black_box((logger_name, record));
        Ok(())
    }
}

fn logger_with_handlers(count: usize) -> Logger {
    let logger = Logger::builder().seed_default_name(false).build();
    for i in 0..count {
        logger.add_handler(format!("null-{}", i), Arc::new(NullEmitter));
    }
    logger
}

// ============================================================================
// Level Parsing Benchmarks
// ============================================================================

fn bench_level_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_parsing");
    group.throughput(Throughput::Elements(1));

    group.bench_function("known", |b| {
        b.iter(|| LogLevel::parse(black_box("warning")));
    });

    group.bench_function("unknown", |b| {
        b.iter(|| LogLevel::parse(black_box("verbose")));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");
    group.throughput(Throughput::Elements(1));

    for count in [0usize, 1, 4, 16] {
        let logger = logger_with_handlers(count);
        group.bench_function(format!("{}_handlers", count), |b| {
            b.iter(|| {
                logger.info(black_box("Info message"));
            });
        });
    }

    let logger = logger_with_handlers(4);
    group.bench_function("formatted", |b| {
        b.iter(|| {
            log_dispatch::info!(logger, "request {} took {}ms", black_box(42), black_box(17));
        });
    });

    group.finish();
}

fn bench_remote_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("remote_forward");
    group.throughput(Throughput::Elements(1));

    let logger = logger_with_handlers(1);
    logger.set_remote_forward(Arc::new(|record: &ForwardRecord<'_>| {
        black_box(record.message);
    }));

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.info(black_box("not forwarded"));
        });
    });

    group.bench_function("forwarded", |b| {
        b.iter(|| {
            logger.error(black_box("forwarded"));
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(logger_with_handlers(2));

    group.bench_function("multi_thread_4", |b| {
        let logger = Arc::clone(&logger);
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            logger.info(black_box("Concurrent message"));
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_output_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_format");
    group.throughput(Throughput::Elements(1));

    let record = Record::new(LogLevel::Info, "Test message");
    let timestamps = TimestampFormat::default();

    for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Logfmt] {
        group.bench_function(format!("{:?}", format), |b| {
            b.iter(|| black_box(format.format("bench", &record, &timestamps)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_level_parsing,
    bench_fan_out,
    bench_remote_forward,
    bench_concurrent_logging,
    bench_output_format
);

criterion_main!(benches);
