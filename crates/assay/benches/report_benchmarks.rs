//! Full report pipeline performance benchmarks.
//!
//! Measures profiling, scoring, detection and rendering on synthetic lab data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use assay::{AnomalyDetector, Dataset, Parser, Profiler, QualityChecker, ReportGenerator, Value};

/// Generate a plate-reader style dataset with gaps, outliers and duplicates.
fn generate_lab_data(rows: usize) -> Dataset {
    let mut rng = StdRng::seed_from_u64(42);

    let mut ids = Vec::with_capacity(rows);
    let mut ph = Vec::with_capacity(rows);
    let mut temperature = Vec::with_capacity(rows);
    let mut concentration = Vec::with_capacity(rows);

    for row in 0..rows {
        ids.push(Value::text(format!("EXP{:05}", row % (rows - rows / 50).max(1))));

        ph.push(if row % 97 == 0 {
            Value::Number(rng.gen_range(14.5..18.0))
        } else if row % 31 == 0 {
            Value::Null
        } else {
            Value::Number(rng.gen_range(6.5..7.5))
        });

        temperature.push(Value::Number(rng.gen_range(20.0..25.0)));

        concentration.push(if row % 53 == 0 {
            Value::Number(-rng.gen_range(0.1..1.0))
        } else {
            Value::Number(rng.gen_range(0.0..10.0))
        });
    }

    Dataset::from_columns(vec![
        ("experiment_id", ids),
        ("ph", ph),
        ("temperature", temperature),
        ("concentration", concentration),
    ])
    .unwrap()
}

/// Render a dataset as CSV for parser benchmarks.
fn to_csv(dataset: &Dataset) -> String {
    let mut data = dataset.column_names().join(",");
    data.push('\n');
    for row in dataset.rows() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        data.push_str(&cells.join(","));
        data.push('\n');
    }
    data
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_report");
    let generator = ReportGenerator::new();

    for rows in [100, 1_000, 10_000].iter() {
        let dataset = generate_lab_data(*rows);
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &dataset, |b, ds| {
            b.iter(|| black_box(generator.generate_full_report(black_box(ds), "bench")))
        });
    }

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");
    let dataset = generate_lab_data(5_000);

    let profiler = Profiler::new();
    let checker = QualityChecker::new();
    let detector = AnomalyDetector::new();

    group.bench_function("profile", |b| {
        b.iter(|| black_box(profiler.generate_profile(black_box(&dataset))))
    });
    group.bench_function("quality_metrics", |b| {
        b.iter(|| black_box(checker.calculate_all_metrics(black_box(&dataset))))
    });
    group.bench_function("anomalies", |b| {
        b.iter(|| black_box(detector.detect_all_anomalies(black_box(&dataset))))
    });

    let report = ReportGenerator::new().generate_full_report(&dataset, "bench");
    group.bench_function("render_text", |b| b.iter(|| black_box(report.render_text())));

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let csv = to_csv(&generate_lab_data(5_000));
    let parser = Parser::new();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(csv.len() as u64));
    group.bench_function("csv_5000_rows", |b| {
        b.iter(|| black_box(parser.parse_str(black_box(&csv)).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_full_report, bench_components, bench_parse);
criterion_main!(benches);
