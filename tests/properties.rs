use approx::relative_eq;
use numerical_target::{
    NumericalTarget, Transformation, TransformationTrait, canonicalize, propagate,
    structurally_eq,
};
use numerical_target_test_util::{random_domain, random_transformation};
use rand::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const N_TRANSFORMATIONS: usize = 500;
const N_SAMPLES: usize = 64;
const MAX_STEPS: usize = 6;

fn hash_of(t: &Transformation) -> u64 {
    let mut hasher = DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish()
}

fn close(a: f64, b: f64) -> bool {
    a == b || relative_eq!(a, b, epsilon = 1e-9, max_relative = 1e-9)
}

#[test]
fn canonicalization_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_TRANSFORMATIONS {
        let t = random_transformation(&mut rng, MAX_STEPS);
        let once = canonicalize(&t);
        let twice = canonicalize(&once);
        assert!(structurally_eq(&once, &twice), "{t} -> {once} -> {twice}");
        assert!(once.steps().iter().all(|step| !matches!(step, Transformation::Chain(_))));
    }
}

#[test]
fn canonicalization_preserves_values() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_TRANSFORMATIONS {
        let t = random_transformation(&mut rng, MAX_STEPS);
        let canonical = canonicalize(&t);
        for _ in 0..N_SAMPLES {
            let x: f64 = rng.random_range(-4.0..4.0);
            if let (Ok(a), Ok(b)) = (t.evaluate(x), canonical.evaluate(x)) {
                assert!(close(a, b), "{t} and {canonical} differ at {x}: {a} != {b}");
            }
        }
    }
}

#[test]
fn equality_is_consistent_with_hash() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_TRANSFORMATIONS {
        let t = random_transformation(&mut rng, MAX_STEPS);
        let canonical = canonicalize(&t);
        assert_eq!(t, canonical);
        assert_eq!(hash_of(&t), hash_of(&canonical));

        let negated_twice = t.clone().then(Transformation::negation()).then(Transformation::negation());
        assert_eq!(t, negated_twice);
        assert_eq!(hash_of(&t), hash_of(&negated_twice));
    }
}

#[test]
fn chaining_is_associative() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..N_TRANSFORMATIONS {
        let [f, g, h] = [(); 3].map(|_| random_transformation(&mut rng, 3));
        let left = f.clone().then(g.clone()).then(h.clone());
        let right = f.then(g.then(h));
        assert!(structurally_eq(&canonicalize(&left), &canonicalize(&right)));
        assert_eq!(left.steps().len(), right.steps().len());
    }
}

#[test]
fn propagated_bounds_contain_values() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..N_TRANSFORMATIONS {
        let t = random_transformation(&mut rng, MAX_STEPS);
        let domain = random_domain(&mut rng);
        let Ok(image) = propagate(&t, domain) else {
            continue;
        };
        let tolerance = 1e-9 * f64::max(image.lower().abs(), image.upper().abs()) + 1e-12;
        let samples = (0..N_SAMPLES)
            .map(|_| {
                if domain.is_degenerate() {
                    domain.lower()
                } else {
                    rng.random_range(domain.lower()..=domain.upper())
                }
            })
            .chain([domain.lower(), domain.upper()]);
        for x in samples {
            let y = t
                .apply(x)
                .unwrap_or_else(|error| panic!("{t} fails at {x} within {domain}: {error}"));
            assert!(
                image.lower() - tolerance <= y && y <= image.upper() + tolerance,
                "{t}: f({x}) = {y} is outside of {image} for domain {domain}"
            );
        }
    }
}

#[test]
fn minimization_equals_explicit_negation() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..N_TRANSFORMATIONS {
        let t = random_transformation(&mut rng, MAX_STEPS);
        let minimized = NumericalTarget::new("y", t.clone(), true).unwrap();
        let negated = NumericalTarget::new("y", t.then(Transformation::negation()), false).unwrap();
        assert_eq!(minimized, negated);
    }
}

#[test]
fn normalization_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut normalized_count = 0;
    for _ in 0..N_TRANSFORMATIONS {
        let target = NumericalTarget::new("y", random_transformation(&mut rng, MAX_STEPS), false)
            .unwrap()
            .with_domain(random_domain(&mut rng));
        let Ok(normalized) = target.normalize() else {
            continue;
        };
        normalized_count += 1;
        assert!(normalized.is_normalized(), "{normalized}");
        let image = normalized.image().unwrap();
        assert!(image.lower().abs() < 1e-9, "{image}");
        assert!((image.upper() - 1.0).abs() < 1e-9, "{image}");
        let again = normalized.normalize().unwrap();
        assert_eq!(normalized, again);
    }
    assert!(normalized_count > 0);
}
