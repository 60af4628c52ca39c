use binmat_core::{FixedInstance, IntervalInstance};
use binmat_realize::{is_realizable_fixed, is_realizable_interval, realize_interval};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_fixed() -> FixedInstance {
    let rows: Vec<i64> = (0..60).map(|i| 5 + (i % 20)).collect();
    let cols: Vec<i64> = (0..60).map(|j| 5 + ((j * 7) % 20)).collect();
    FixedInstance::new(rows, cols).unwrap()
}

fn sample_interval() -> IntervalInstance {
    let lower: Vec<i64> = (0..40).map(|i| i % 5).collect();
    let upper: Vec<i64> = lower.iter().map(|l| l + 6).collect();
    let col_lower: Vec<i64> = (0..40).map(|j| (j * 3) % 4).collect();
    let col_upper: Vec<i64> = col_lower.iter().map(|l| l + 8).collect();
    IntervalInstance::new(lower, upper, col_lower, col_upper).unwrap()
}

fn bench_realizability(c: &mut Criterion) {
    let fixed = sample_fixed();
    let interval = sample_interval();

    c.bench_function("gale_ryser_60x60", |b| {
        b.iter(|| is_realizable_fixed(black_box(&fixed)))
    });
    c.bench_function("bounded_flow_40x40", |b| {
        b.iter(|| is_realizable_interval(black_box(&interval)))
    });
    c.bench_function("realize_interval_40x40", |b| {
        b.iter(|| realize_interval(black_box(&interval)).unwrap())
    });
}

criterion_group!(benches, bench_realizability);
criterion_main!(benches);
