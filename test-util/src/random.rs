use numerical_target::{Interval, Transformation, TriangularParameters};
use rand::prelude::*;

const FACTORS: [f64; 6] = [-2.0, -1.0, -0.5, 0.5, 2.0, 3.0];
const EXPONENTS: [f64; 5] = [-1.0, 0.5, 1.0, 2.0, 3.0];

/// Random offset, a multiple of 1/2 in [-3, 3]
fn random_offset<R: Rng>(rng: &mut R) -> f64 {
    0.5 * rng.random_range(-6_i32..=6) as f64
}

fn random_step<R: Rng>(rng: &mut R) -> Transformation {
    match rng.random_range(0..11) {
        0 => Transformation::identity(),
        1 => Transformation::affine(*FACTORS.choose(rng).unwrap(), random_offset(rng)).unwrap(),
        2 => Transformation::negation(),
        3 => Transformation::absolute(),
        4 => Transformation::power(*EXPONENTS.choose(rng).unwrap()).unwrap(),
        5 => {
            let min = random_offset(rng);
            let max = min + 0.5 * rng.random_range(1_i32..=6) as f64;
            match rng.random_range(0..3) {
                0 => Transformation::clamp(Some(min), None),
                1 => Transformation::clamp(None, Some(max)),
                _ => Transformation::clamp(Some(min), Some(max)),
            }
            .unwrap()
        }
        6 => Transformation::bell_match(random_offset(rng), 0.5 * rng.random_range(1_i32..=4) as f64)
            .unwrap(),
        7 => {
            let left = 0.5 * rng.random_range(1_i32..=4) as f64;
            let right = 0.5 * rng.random_range(1_i32..=4) as f64;
            Transformation::match_triangular(
                random_offset(rng),
                TriangularParameters::margins(left, right),
            )
            .unwrap()
        }
        8 => Transformation::sigmoid(random_offset(rng), *FACTORS.choose(rng).unwrap()).unwrap(),
        9 => Transformation::two_sided_affine(
            *FACTORS.choose(rng).unwrap(),
            *FACTORS.choose(rng).unwrap(),
            random_offset(rng),
        )
        .unwrap(),
        _ => Transformation::match_bell(random_offset(rng), 0.5 * rng.random_range(1_i32..=4) as f64)
            .unwrap(),
    }
}

/// Random chain of up to `max_steps` nodes
///
/// Parameters are small dyadic numbers, so affine maps compose exactly on dyadic input. Logarithm
/// and exponential are not generated, their results quickly leave the range where chains stay
/// comparable.
pub fn random_transformation<R: Rng>(rng: &mut R, max_steps: usize) -> Transformation {
    let steps = rng.random_range(1..=max_steps.max(1));
    (0..steps).fold(Transformation::identity(), |transformation, _| {
        transformation.then(random_step(rng))
    })
}

/// Random finite domain with dyadic ends within [-4, 4]
pub fn random_domain<R: Rng>(rng: &mut R) -> Interval {
    let a = 0.25 * rng.random_range(-16_i32..=16) as f64;
    let b = 0.25 * rng.random_range(-16_i32..=16) as f64;
    Interval::new(a.min(b), a.max(b)).unwrap()
}
