pub(super) use crate::error::{ConfigurationError, DomainError};
pub(super) use crate::interval::Interval;

use enum_dispatch::enum_dispatch;
pub(super) use macro_const::macro_const;
pub(super) use schemars::JsonSchema;
pub(super) use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[enum_dispatch]
pub trait TransformationTrait {
    /// Transform a single value.
    fn apply(&self, x: f64) -> Result<f64, DomainError>;

    /// Range of output values for inputs taken from `domain`.
    fn image(&self, domain: Interval) -> Result<Interval, DomainError>;

    /// Formula of the transformation applied to `input`.
    fn describe(&self, input: &str) -> String;
}

/// All transformation nodes are available as variants of this enum
///
/// Nodes are immutable, every operation building a derived transformation returns a new tree.
/// Equality and hashing are defined on the canonical form, see [crate::canonicalize].
#[enum_dispatch(TransformationTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[non_exhaustive]
pub enum Transformation {
    Absolute(super::absolute::AbsoluteTransformation),
    Affine(super::affine::AffineTransformation),
    BellMatch(super::bell_match::BellMatchTransformation),
    Chain(super::chain::ChainTransformation),
    Clamp(super::clamp::ClampTransformation),
    Exponential(super::exponential::ExponentialTransformation),
    Identity(super::identity::IdentityTransformation),
    Logarithm(super::logarithm::LogarithmTransformation),
    Power(super::power::PowerTransformation),
    Sigmoid(super::sigmoid::SigmoidTransformation),
    TriangularMatch(super::triangular_match::TriangularMatchTransformation),
    TwoSidedAffine(super::two_sided_affine::TwoSidedAffineTransformation),
}

/// Wrap a formula into parentheses unless it is a single token
pub(super) fn parenthesize(input: &str) -> Cow<'_, str> {
    if input.contains(' ') {
        Cow::Owned(format!("({input})"))
    } else {
        Cow::Borrowed(input)
    }
}
