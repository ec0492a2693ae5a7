use crate::error::{DomainError, NormalizationError};
use crate::interval::Interval;
use crate::transformations::affine::AffineTransformation;
use crate::transformations::{Transformation, TransformationTrait};

/// Image of `input` under `transformation`
///
/// Chains are propagated step by step, left to right.
pub fn propagate(transformation: &Transformation, input: Interval) -> Result<Interval, DomainError> {
    transformation.image(input)
}

pub(crate) fn propagate_steps(
    steps: &[Transformation],
    input: Interval,
) -> Result<Interval, DomainError> {
    steps
        .iter()
        .try_fold(input, |interval, step| step.image(interval))
}

/// Affine map rescaling a finite `image` of positive width onto $[0, 1]$
///
/// Any positive width is accepted as long as its reciprocal is finite.
pub fn unit_rescaling(image: Interval) -> Result<AffineTransformation, NormalizationError> {
    if !image.is_bounded() || !image.width().is_finite() {
        return Err(NormalizationError::UnboundedDomain {
            lower: image.lower(),
            upper: image.upper(),
        });
    }
    if image.is_degenerate() {
        return Err(NormalizationError::DegenerateRange {
            value: image.lower(),
        });
    }
    AffineTransformation::from_points_mapped_to_unit_interval_bounds(image.lower(), image.upper())
        .map_err(|_| NormalizationError::DegenerateRange {
            value: image.lower(),
        })
}
