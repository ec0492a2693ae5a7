//! Canonical form of transformations and the equality built on it
//!
//! A transformation is rewritten into a flat sequence of primitive nodes by applying the
//! following rules until none of them changes the sequence:
//!
//! 1. nested chains are flattened,
//! 2. nodes equal to a simpler node are replaced by it: two-sided segments with equal slopes by
//!    an affine map, two-sided segments of the absolute value by `Absolute` and a sigmoid of zero
//!    steepness by a constant affine map,
//! 3. adjacent affine maps are merged,
//! 4. identities are dropped, including `Affine(1, 0)` and `Power(1)`,
//! 5. adjacent powers are merged when their input is provably non-negative,
//! 6. triangular matches are kept in their margins form,
//! 7. an affine map directly preceding a bell, triangular, sigmoid or two-sided node is absorbed
//!    into it.
//!
//! Replacements run first in every pass and every other rule except flattening shortens the
//! sequence, so the rewriting terminates.

use crate::bounds::propagate_steps;
use crate::interval::Interval;
use crate::transformations::Transformation;
use crate::transformations::affine::AffineTransformation;
use crate::transformations::chain::ChainTransformation;
use crate::transformations::power::PowerTransformation;

use itertools::Itertools;
use std::hash::{Hash, Hasher};

/// Relative tolerance of parameter comparison
pub const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Absolute tolerance of parameter comparison, applies to values close to zero
pub const ABSOLUTE_TOLERANCE: f64 = 1e-12;

#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    approx::relative_eq!(
        a,
        b,
        epsilon = ABSOLUTE_TOLERANCE,
        max_relative = RELATIVE_TOLERANCE
    )
}

/// Rewrite a transformation into its canonical form
///
/// The result is never a nested chain: it is [Transformation::Identity] for an empty sequence,
/// the only node for a single-step sequence and a flat [Transformation::Chain] otherwise.
pub fn canonicalize(transformation: &Transformation) -> Transformation {
    let mut steps = transformation.clone().into_steps();
    loop {
        let length = steps.len();
        steps = rewrite(steps);
        log::trace!("canonicalization pass: {length} -> {} steps", steps.len());
        if steps.len() == length {
            break;
        }
    }
    match steps.len() {
        0 => Transformation::identity(),
        1 => steps.swap_remove(0),
        _ => ChainTransformation::new(steps).into(),
    }
}

fn rewrite(steps: Vec<Transformation>) -> Vec<Transformation> {
    let steps = replace_special_cases(steps);
    let steps = drop_identities(steps);
    let steps = merge_affine(steps);
    let steps = absorb_affine_into_match(steps);
    merge_powers(steps)
}

fn replace_special_cases(steps: Vec<Transformation>) -> Vec<Transformation> {
    steps
        .into_iter()
        .map(|step| {
            let replacement: Option<Transformation> = match &step {
                Transformation::TwoSidedAffine(two_sided) if two_sided.is_absolute() => {
                    Some(Transformation::absolute())
                }
                Transformation::TwoSidedAffine(two_sided) => two_sided.as_affine().map(Into::into),
                Transformation::Sigmoid(sigmoid) if sigmoid.is_constant() => {
                    AffineTransformation::new(0.0, 0.5).ok().map(Into::into)
                }
                _ => None,
            };
            replacement.unwrap_or(step)
        })
        .collect()
}

fn drop_identities(steps: Vec<Transformation>) -> Vec<Transformation> {
    steps
        .into_iter()
        .filter(|step| !step.is_identity())
        .collect()
}

fn merge_affine(steps: Vec<Transformation>) -> Vec<Transformation> {
    steps
        .into_iter()
        .coalesce(|a, b| {
            if let (Transformation::Affine(first), Transformation::Affine(second)) = (&a, &b) {
                if let Some(merged) = first.then(second) {
                    return Ok(merged.into());
                }
            }
            Err((a, b))
        })
        .collect()
}

fn absorb_affine_into_match(steps: Vec<Transformation>) -> Vec<Transformation> {
    steps
        .into_iter()
        .coalesce(|a, b| {
            let absorbed: Option<Transformation> = match (&a, &b) {
                (Transformation::Affine(affine), Transformation::BellMatch(bell)) => {
                    bell.after(affine).map(Into::into)
                }
                (Transformation::Affine(affine), Transformation::TriangularMatch(triangle)) => {
                    triangle.after(affine).map(Into::into)
                }
                (Transformation::Affine(affine), Transformation::Sigmoid(sigmoid)) => {
                    sigmoid.after(affine).map(Into::into)
                }
                (Transformation::Affine(affine), Transformation::TwoSidedAffine(two_sided)) => {
                    two_sided.after(affine).map(Into::into)
                }
                _ => None,
            };
            absorbed.ok_or((a, b))
        })
        .collect()
}

/// `(x^p)^q = x^(pq)` holds for non-negative `x`, failures at zero are preserved if at least one
/// of the exponents is positive
fn merge_powers(steps: Vec<Transformation>) -> Vec<Transformation> {
    let mut merged: Vec<Transformation> = Vec::with_capacity(steps.len());
    for step in steps {
        if let (Some(Transformation::Power(first)), Transformation::Power(second)) =
            (merged.last(), &step)
        {
            let (p, q) = (first.exponent(), second.exponent());
            let prefix = &merged[..merged.len() - 1];
            if (p > 0.0 || q > 0.0) && is_non_negative(prefix) {
                if let Ok(power) = PowerTransformation::new(p * q) {
                    merged.pop();
                    merged.push(power.into());
                    continue;
                }
            }
        }
        merged.push(step);
    }
    merged
}

/// Is the output of `steps` non-negative for any input?
fn is_non_negative(steps: &[Transformation]) -> bool {
    propagate_steps(steps, Interval::unbounded())
        .map(|image| image.lower() >= 0.0)
        .unwrap_or(false)
}

/// Compare two transformations node by node with the parameter tolerance, without
/// canonicalizing them
pub fn structurally_eq(a: &Transformation, b: &Transformation) -> bool {
    use Transformation::*;

    match a {
        Absolute(_) => matches!(b, Absolute(_)),
        Affine(x) => matches!(b, Affine(y) if x == y),
        BellMatch(x) => matches!(b, BellMatch(y) if x == y),
        Chain(x) => match b {
            Chain(y) => {
                x.len() == y.len()
                    && x.steps()
                        .iter()
                        .zip(y.steps())
                        .all(|(x, y)| structurally_eq(x, y))
            }
            _ => false,
        },
        Clamp(x) => matches!(b, Clamp(y) if x == y),
        Exponential(_) => matches!(b, Exponential(_)),
        Identity(_) => matches!(b, Identity(_)),
        Logarithm(_) => matches!(b, Logarithm(_)),
        Power(x) => matches!(b, Power(y) if x == y),
        Sigmoid(x) => matches!(b, Sigmoid(y) if x == y),
        TriangularMatch(x) => matches!(b, TriangularMatch(y) if x == y),
        TwoSidedAffine(x) => matches!(b, TwoSidedAffine(y) if x == y),
    }
}

/// Two transformations are equal if their canonical forms are structurally equal
impl PartialEq for Transformation {
    fn eq(&self, other: &Self) -> bool {
        structurally_eq(&canonicalize(self), &canonicalize(other))
    }
}

impl Eq for Transformation {}

/// Only the sequence of canonical node kinds is hashed, so transformations equal up to the
/// parameter tolerance hash equal
impl Hash for Transformation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = canonicalize(self);
        let steps = canonical.steps();
        steps.len().hash(state);
        for step in steps {
            core::mem::discriminant(step).hash(state);
        }
    }
}
