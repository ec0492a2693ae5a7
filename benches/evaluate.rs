use criterion::Criterion;
use numerical_target::ndarray::Array1;
use numerical_target::{Interval, NumericalTarget, TriangularParameters};
use rand::prelude::*;
use std::hint::black_box;

fn targets() -> Vec<(&'static str, NumericalTarget)> {
    vec![
        ("identity", NumericalTarget::maximize("y").unwrap()),
        (
            "legacy ramp",
            NumericalTarget::normalized_ramp("y", Interval::new(0.0, 100.0).unwrap(), false)
                .unwrap(),
        ),
        (
            "triangular match",
            NumericalTarget::match_triangular("y", 50.0, TriangularParameters::width(40.0))
                .unwrap(),
        ),
        (
            "power-clamp-log",
            NumericalTarget::maximize("y")
                .unwrap()
                .abs()
                .power(0.5)
                .unwrap()
                .clamp(Some(1.0), None)
                .unwrap()
                .log(),
        ),
    ]
}

pub fn bench_evaluate_array(c: &mut Criterion) {
    const COUNTS: [usize; 3] = [10, 1000, 100_000];

    let mut rng = StdRng::seed_from_u64(0);
    for &n in COUNTS.iter() {
        let x_f64: Array1<f64> = (0..n).map(|_| rng.random_range(-100.0..200.0)).collect();
        let x_f32 = x_f64.mapv(|x| x as f32);
        for (name, target) in targets() {
            c.bench_function(format!("Evaluate {name} f64 {n}").as_str(), |b| {
                b.iter(|| black_box(target.evaluate_array(black_box(x_f64.view()))))
            });
            c.bench_function(format!("Evaluate {name} f32 {n}").as_str(), |b| {
                b.iter(|| black_box(target.evaluate_array(black_box(x_f32.view()))))
            });
        }
    }
}

pub fn bench_normalize(c: &mut Criterion) {
    let target = NumericalTarget::maximize("Yield")
        .unwrap()
        .with_domain(Interval::new(-10.0, 10.0).unwrap())
        .power(2.0)
        .unwrap()
        .clamp(None, Some(100.0))
        .unwrap();
    c.bench_function("Normalize power-clamp target", |b| {
        b.iter(|| black_box(black_box(&target).normalize()))
    });
}
