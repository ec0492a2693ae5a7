#![doc = include_str!("../README.md")]


#[macro_use]
mod macros;

mod bounds;
pub use bounds::{propagate, unit_rescaling};

mod canonical;
pub use canonical::{ABSOLUTE_TOLERANCE, RELATIVE_TOLERANCE, canonicalize, structurally_eq};

mod error;
pub use error::{ConfigurationError, DomainError, ElementDomainError, NormalizationError};

mod float_trait;
pub use float_trait::Float;

mod interval;
pub use interval::Interval;

pub mod target;
pub use target::{
    BoundsTransform, LegacyTargetParameters, ModernTargetParameters, NumericalTarget, TargetMode,
};

pub mod transformations;
pub use transformations::chain::chain;
pub use transformations::triangular_match::TriangularParameters;
pub use transformations::{Transformation, TransformationTrait};

pub use ndarray;
