use criterion::Criterion;
use numerical_target::{Transformation, canonicalize};
use numerical_target_test_util::random_transformation;
use rand::prelude::*;
use std::hint::black_box;

pub fn bench_canonicalize(c: &mut Criterion) {
    const N: usize = 100;
    const MAX_STEPS: [usize; 3] = [2, 8, 32];

    let mut rng = StdRng::seed_from_u64(0);
    for &max_steps in MAX_STEPS.iter() {
        let transformations: Vec<_> = (0..N)
            .map(|_| random_transformation(&mut rng, max_steps))
            .collect();
        c.bench_function(format!("Canonicalize {N} chains of <= {max_steps} steps").as_str(), |b| {
            b.iter(|| {
                for t in transformations.iter() {
                    black_box(canonicalize(black_box(t)));
                }
            })
        });
    }
}

pub fn bench_equality(c: &mut Criterion) {
    let match_bell = Transformation::match_bell(3.0, 0.5).unwrap();
    let bell = Transformation::bell_match(3.0, 0.5).unwrap();
    c.bench_function("Equality of match_bell and bell_match", |b| {
        b.iter(|| black_box(black_box(&match_bell) == black_box(&bell)))
    });
}
