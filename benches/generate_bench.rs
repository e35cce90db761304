//! Benchmarks for record generation and script rendering.
//!
//! Tests:
//! - Full database generation at increasing scales
//! - Self-referencing kinds, which scan the earlier ids per record
//! - Rendering the population script from a generated database

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use yarndb_seed::dataset_gen::{Counts, Generator, RecordKind};
use yarndb_seed::script::CommandScript;

fn scaled_counts(factor: usize) -> Counts {
    Counts::default()
        .iter()
        .map(|(kind, count)| (kind, count * factor))
        .collect()
}

/// Benchmark generating every kind with the default ratios
fn bench_generate_database(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_database");
    group.sample_size(20);

    for factor in [1, 10, 50] {
        let counts = scaled_counts(factor);
        group.throughput(Throughput::Elements(counts.total() as u64));
        group.bench_with_input(
            BenchmarkId::new("records", counts.total()),
            &counts,
            |b, counts| {
                b.iter(|| {
                    let db = Generator::new(42).generate(black_box(counts));
                    black_box(db.total_records())
                })
            },
        );
    }

    group.finish();
}

/// Benchmark categories and employees alone
fn bench_self_referencing(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_referencing");

    for kind in [RecordKind::Categories, RecordKind::Employees] {
        let counts = Counts::empty().with(kind, 2_000);
        group.throughput(Throughput::Elements(2_000));
        group.bench_with_input(BenchmarkId::new("kind", kind), &counts, |b, counts| {
            b.iter(|| black_box(Generator::new(7).generate(counts).total_records()))
        });
    }

    group.finish();
}

/// Benchmark script rendering, dominated by per-record YAML serialization
fn bench_render_script(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_script");

    for factor in [1, 10] {
        let db = Generator::new(42).generate(&scaled_counts(factor));
        let script = CommandScript::new("yarndb");
        group.throughput(Throughput::Elements(db.total_records() as u64));
        group.bench_with_input(
            BenchmarkId::new("records", db.total_records()),
            &db,
            |b, db| b.iter(|| black_box(script.render(db).unwrap().len())),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_database,
    bench_self_referencing,
    bench_render_script
);
criterion_main!(benches);
