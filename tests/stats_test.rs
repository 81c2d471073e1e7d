mod common;

use colstats::dataset::{row, CellValue, Row};
use colstats::stats::{
    compute_column_stats, compute_column_stats_with, compute_correlation_matrix,
    compute_correlation_matrix_with, compute_histogram, five_number_summary, ModeTieBreak,
    PairingPolicy, StatsEngine, DEFAULT_BIN_COUNT,
};
use common::{numeric_rows, rows_from_columns};

#[test]
fn test_variance_and_std() {
    let samples: [&[f64]; 4] = [
        &[1.0],
        &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0],
        &[-3.5, 0.0, 12.25],
        &[1e6, 1e6 + 1.0, 1e6 + 2.0],
    ];
    for values in samples {
        let stats = compute_column_stats(&numeric_rows("v", values), "v");
        assert!(stats.variance >= 0.0);
        assert_eq!(stats.std, stats.variance.sqrt());
    }

    // Population variance: divisor is n, not n - 1
    let stats = compute_column_stats(&numeric_rows("v", &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), "v");
    assert_eq!(stats.mean, 5.0);
    assert_eq!(stats.variance, 4.0);
    assert_eq!(stats.std, 2.0);
    assert_eq!(stats.mode, 4.0);
}

#[test]
fn test_median() {
    assert_eq!(compute_column_stats(&numeric_rows("v", &[1.0, 2.0, 3.0, 4.0]), "v").median, 2.5);
    assert_eq!(compute_column_stats(&numeric_rows("v", &[1.0, 2.0, 3.0]), "v").median, 2.0);
}

#[test]
fn test_count_plus_missing_is_row_count() {
    let rows = vec![
        row([("v", CellValue::from("1.5"))]),
        row([("w", CellValue::from(2.0))]),
        row([("v", CellValue::from(""))]),
        row([("v", CellValue::Bool(true))]),
        row([("v", CellValue::from(f64::NAN))]),
        row([("v", CellValue::from(-4.0))]),
    ];
    let stats = compute_column_stats(&rows, "v");
    assert_eq!(stats.count, 2);
    assert_eq!(stats.count + stats.missing, rows.len());
    assert_eq!(stats.min, -4.0);
    assert_eq!(stats.max, 1.5);
    assert_eq!(stats.range, 5.5);
}

#[test]
fn test_empty_column_sentinel() {
    let stats = compute_column_stats(&[], "v");
    assert!(stats.is_empty());
    assert_eq!(stats.mean, 0.0);
    assert_eq!(stats.to_display(2).mean, "0.00");

    let rows = vec![row([("v", CellValue::Null)]), row([("v", CellValue::from("x"))])];
    let stats = compute_column_stats(&rows, "v");
    assert!(stats.is_empty());
    assert_eq!(stats.missing, 2);
    assert!(!stats.mean.is_nan() && !stats.std.is_nan());

    assert!(compute_histogram(&rows, "v", DEFAULT_BIN_COUNT).is_empty());
    assert!(five_number_summary(&rows, "v").is_none());
}

#[test]
fn test_mode_ties() {
    let rows = numeric_rows("v", &[1.0, 1.0, 2.0, 2.0, 3.0]);
    // Ascending value wins ties
    assert_eq!(compute_column_stats(&rows, "v").mode, 1.0);

    let rows = numeric_rows("v", &[3.0, 2.0, 2.0, 3.0, 1.0]);
    assert_eq!(compute_column_stats(&rows, "v").mode, 2.0);
    assert_eq!(
        compute_column_stats_with(&rows, "v", ModeTieBreak::FirstSeen).mode,
        3.0
    );
}

#[test]
fn test_histogram_one_per_bin() {
    let values: Vec<f64> = (0..10).map(|i| (i * 10) as f64).collect();
    let bins = compute_histogram(&numeric_rows("v", &values), "v", DEFAULT_BIN_COUNT);
    assert_eq!(bins.len(), 10);
    assert!(bins.iter().all(|b| b.count == 1));
}

#[test]
fn test_histogram_counts_sum() {
    let rows = rows_from_columns(&[(
        "v",
        &[Some(1.0), None, Some(7.5), Some(7.5), Some(-2.0), None, Some(100.0), Some(3.3)],
    )]);
    let count = compute_column_stats(&rows, "v").count;
    for bin_count in [1, 2, 7, 10, 64] {
        let bins = compute_histogram(&rows, "v", bin_count);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), count);
        assert_eq!(bins.last().unwrap().end, 100.0);
    }
}

#[test]
fn test_correlation_properties() {
    let x = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
    let rows = rows_from_columns(&[
        ("x", &x),
        ("pos", &[Some(2.0), Some(4.0), Some(6.0), Some(8.0), Some(10.0)]),
        ("neg", &[Some(5.0), Some(4.0), Some(3.0), Some(2.0), Some(1.0)]),
        ("flat", &[Some(5.0), Some(5.0), Some(5.0), Some(5.0), Some(5.0)]),
    ]);

    let m = compute_correlation_matrix(&rows, &["x", "pos", "neg", "flat"]);
    for i in 0..m.len() {
        assert_eq!(m.get(i, i), Some(1.0));
    }
    assert!((m.get_by_name("x", "pos").unwrap() - 1.0).abs() < 1e-9);
    assert!((m.get_by_name("x", "neg").unwrap() + 1.0).abs() < 1e-9);
    assert_eq!(m.get_by_name("x", "flat"), Some(0.0));
    assert_eq!(m.get_by_name("flat", "neg"), Some(0.0));
    assert!(m.values().iter().flatten().all(|r| r.is_finite()));
}

#[test]
fn test_correlation_large_magnitudes() {
    let x: Vec<Option<f64>> = (1..=5).map(|i| Some(i as f64 * 1e160)).collect();
    let y: Vec<Option<f64>> = (1..=5).map(|i| Some(i as f64 * 2e160)).collect();
    let rows = rows_from_columns(&[("x", x.as_slice()), ("y", y.as_slice())]);

    let m = compute_correlation_matrix(&rows, &["x", "y"]);
    assert!((m.get(0, 1).unwrap() - 1.0).abs() < 1e-9);

    let stats = compute_column_stats(&numeric_rows("v", &[f64::MAX, f64::MAX]), "v");
    assert!(stats.mean.is_finite() && stats.variance.is_finite() && stats.std.is_finite());
}

#[test]
fn test_correlation_constant_three_values() {
    let rows = rows_from_columns(&[
        ("x", &[Some(1.0), Some(2.0), Some(3.0)]),
        ("y", &[Some(5.0), Some(5.0), Some(5.0)]),
    ]);
    let m = compute_correlation_matrix(&rows, &["x", "y"]);
    assert_eq!(m.get(0, 1), Some(0.0));
    assert_eq!(m.get(1, 0), Some(0.0));
}

#[test]
fn test_correlation_differing_missingness() {
    let rows = rows_from_columns(&[
        ("a", &[Some(1.0), None, Some(3.0), Some(4.0), Some(5.0), Some(2.0)]),
        ("b", &[Some(9.0), Some(1.0), None, Some(4.0), Some(2.0), Some(7.0)]),
        ("c", &[None, Some(3.0), Some(1.0), Some(8.0), None, Some(6.0)]),
    ]);
    let columns = ["a", "b", "c"];

    let joint = compute_correlation_matrix(&rows, &columns);
    assert!(joint.is_symmetric(1e-12));

    let legacy = compute_correlation_matrix_with(&rows, &columns, PairingPolicy::Positional);
    assert_eq!(legacy.len(), 3);
    assert!(legacy.values().iter().flatten().all(|r| (-1.0..=1.0).contains(r)));
    assert_ne!(joint.get(0, 1), legacy.get(0, 1));
}

#[test]
fn test_engine_end_to_end() {
    let rows: Vec<Row> = (0..50)
        .map(|i| {
            let x = i as f64;
            row([
                ("x", CellValue::Number(x)),
                ("y", CellValue::Text(format!("{}", 3.0 * x + 1.0))),
                ("label", CellValue::from(if i % 2 == 0 { "even" } else { "odd" })),
            ])
        })
        .collect();

    let engine = StatsEngine::default();
    let stats = engine.column_stats(&rows, "y");
    assert_eq!(stats.count, 50);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 148.0);

    let pairs = engine.strong_correlations(&rows, &["x", "y", "label"]);
    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].col_a.as_str(), pairs[0].col_b.as_str()), ("x", "y"));

    let counts = engine.value_counts(&rows, "label");
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].count, 25);

    assert_eq!(engine.scatter_points(&rows, "x", "y").len(), 50);

    let line = engine.line_points(&rows, "label", "y");
    assert_eq!(line.len(), 50);
    assert_eq!(line[49], (49.0, 148.0));

    let radar = engine.radar_values(&rows, &["x", "label"]);
    assert_eq!(radar[0].value, 24.5 / 49.0 * 100.0);
    assert_eq!(radar[1].value, 0.0);
}
