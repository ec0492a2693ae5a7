use criterion::{criterion_group, criterion_main};

mod canonical;
use canonical::{bench_canonicalize, bench_equality};

mod evaluate;
use evaluate::{bench_evaluate_array, bench_normalize};

criterion_group!(
    benches,
    bench_canonicalize,
    bench_equality,
    bench_evaluate_array,
    bench_normalize
);
criterion_main!(benches);
