//! Statistics Engine Benchmarks
//!
//! Column statistics, histogram binning and correlation matrices over
//! synthetic datasets with a sprinkling of missing cells.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use colstats::dataset::{CellValue, Row};
use colstats::stats::{
    compute_column_stats, compute_correlation_matrix, compute_histogram, DEFAULT_BIN_COUNT,
};

/// Create a synthetic dataset where every 17th cell is missing
fn create_dataset(n_rows: usize, n_columns: usize) -> Vec<Row> {
    // Simple LCG random generator for reproducibility
    let mut rng_state: u64 = 42;
    let mut rand_f64 = move || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (rng_state >> 33) as f64 / (u32::MAX as f64)
    };

    (0..n_rows)
        .map(|i| {
            (0..n_columns)
                .map(|c| {
                    let cell = if (i + c) % 17 == 0 {
                        CellValue::Null
                    } else {
                        CellValue::Number(rand_f64() * 100.0)
                    };
                    (format!("col_{}", c), cell)
                })
                .collect()
        })
        .collect()
}

fn bench_column_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_stats");
    for n_rows in [1_000, 10_000, 100_000] {
        let rows = create_dataset(n_rows, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &rows, |b, rows| {
            b.iter(|| compute_column_stats(black_box(rows), "col_0"))
        });
    }
    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    for n_rows in [1_000, 10_000, 100_000] {
        let rows = create_dataset(n_rows, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n_rows), &rows, |b, rows| {
            b.iter(|| compute_histogram(black_box(rows), "col_0", DEFAULT_BIN_COUNT))
        });
    }
    group.finish();
}

fn bench_correlation_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_matrix");
    for n_columns in [2, 5, 10] {
        let rows = create_dataset(10_000, n_columns);
        let names: Vec<String> = (0..n_columns).map(|c| format!("col_{}", c)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n_columns), &rows, |b, rows| {
            b.iter(|| compute_correlation_matrix(black_box(rows), &names))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_column_stats,
    bench_histogram,
    bench_correlation_matrix
);
criterion_main!(benches);
