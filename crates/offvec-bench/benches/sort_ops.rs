//! Criterion micro-benchmarks for the sort strategies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use offvec::{OffVec, RegionPolicy, ScalarKind, Value};
use offvec_bench::filled_i64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn bench_quicksort_random(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let values: Vec<i64> = (0..4096).map(|_| rng.random()).collect();
    c.bench_function("sort_4096_random_i64", |b| {
        b.iter(|| {
            let mut v = filled_i64(&values);
            v.sort().unwrap();
            black_box(v.len())
        });
    });
}

fn bench_quicksort_sorted_input(c: &mut Criterion) {
    let values: Vec<i64> = (0..1024).collect();
    c.bench_function("sort_1024_presorted_i64", |b| {
        b.iter(|| {
            let mut v = filled_i64(&values);
            v.sort().unwrap();
            black_box(v.len())
        });
    });
}

fn bench_bool_partition(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let values: Vec<bool> = (0..4096).map(|_| rng.random()).collect();
    c.bench_function("partition_4096_bool", |b| {
        b.iter(|| {
            let mut v =
                OffVec::with_capacity(ScalarKind::Bool, 4096, RegionPolicy::Shared).unwrap();
            for &x in &values {
                v.push(Value::Bool(x)).unwrap();
            }
            v.sort().unwrap();
            black_box(v.len())
        });
    });
}

criterion_group!(
    benches,
    bench_quicksort_random,
    bench_quicksort_sorted_input,
    bench_bool_partition
);
criterion_main!(benches);
