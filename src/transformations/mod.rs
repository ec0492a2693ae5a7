use transformation::*;
pub use transformation::{Transformation, TransformationTrait};

use paste::paste;
use std::fmt;
use std::ops::Neg;

pub mod affine;
pub mod bell_match;
pub mod chain;
pub mod clamp;
pub mod power;
pub mod sigmoid;
pub mod transformation;
pub mod triangular_match;
pub mod two_sided_affine;

use affine::AffineTransformation;
use bell_match::BellMatchTransformation;
use clamp::ClampTransformation;
use power::PowerTransformation;
use sigmoid::SigmoidTransformation;
use triangular_match::{TriangularMatchTransformation, TriangularParameters};
use two_sided_affine::TwoSidedAffineTransformation;

/// Transformation without parameters defined by per-element and per-domain functions
macro_rules! parameterless_transformation {
    ($module:ident, $apply:expr, $image:expr, $describe:expr, $doc:literal $(,)?) => {
        paste! {
            pub mod $module {
                use super::*;

                #[doc = $doc]
                #[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
                pub struct [<$module:camel Transformation>] {}

                impl [<$module:camel Transformation>] {
                    pub fn new() -> Self {
                        Self {}
                    }

                    pub const fn doc() -> &'static str {
                        $doc
                    }
                }

                impl Default for [<$module:camel Transformation>] {
                    fn default() -> Self {
                        Self::new()
                    }
                }

                impl TransformationTrait for [<$module:camel Transformation>] {
                    #[inline]
                    fn apply(&self, x: f64) -> Result<f64, DomainError> {
                        let func = $apply;
                        func(x)
                    }

                    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
                        let func = $image;
                        func(domain)
                    }

                    fn describe(&self, input: &str) -> String {
                        let func = $describe;
                        func(input)
                    }
                }

            }
        }
    };
}

parameterless_transformation!(
    identity,
    |x: f64| Ok(x),
    |domain: Interval| Ok(domain),
    |input: &str| input.to_string(),
    "Identity transformation",
);

parameterless_transformation!(
    absolute,
    |x: f64| Ok(x.abs()),
    |domain: Interval| {
        if domain.contains(0.0) {
            Ok(Interval::spanning(
                0.0,
                f64::max(domain.lower().abs(), domain.upper().abs()),
            ))
        } else {
            Ok(domain.map_monotonic(f64::abs))
        }
    },
    |input: &str| format!("|{input}|"),
    "Absolute value transformation",
);

parameterless_transformation!(
    logarithm,
    |x: f64| {
        if x > 0.0 {
            Ok(x.ln())
        } else {
            Err(DomainError::NonPositiveLogarithm(x))
        }
    },
    |domain: Interval| {
        // An excluded zero end maps to an unbounded one
        if domain.lower() > 0.0 || (domain.lower() == 0.0 && domain.is_lower_open()) {
            Ok(domain.map_monotonic(f64::ln))
        } else {
            Err(DomainError::NonPositiveLogarithmDomain {
                lower: domain.lower(),
                upper: domain.upper(),
            })
        }
    },
    |input: &str| format!("ln({input})"),
    "Natural logarithm transformation, defined for positive input only",
);

parameterless_transformation!(
    exponential,
    |x: f64| Ok(x.exp()),
    |domain: Interval| Ok(domain.map_monotonic(f64::exp)),
    |input: &str| format!("exp({input})"),
    "Exponential transformation",
);

use absolute::AbsoluteTransformation;
use exponential::ExponentialTransformation;
use identity::IdentityTransformation;
use logarithm::LogarithmTransformation;

impl Transformation {
    pub fn identity() -> Self {
        IdentityTransformation::new().into()
    }

    pub fn affine(factor: f64, offset: f64) -> Result<Self, ConfigurationError> {
        Ok(AffineTransformation::new(factor, offset)?.into())
    }

    /// $x \mapsto -x$
    pub fn negation() -> Self {
        AffineTransformation::negation().into()
    }

    pub fn power(exponent: f64) -> Result<Self, ConfigurationError> {
        Ok(PowerTransformation::new(exponent)?.into())
    }

    pub fn logarithm() -> Self {
        LogarithmTransformation::new().into()
    }

    pub fn exponential() -> Self {
        ExponentialTransformation::new().into()
    }

    pub fn absolute() -> Self {
        AbsoluteTransformation::new().into()
    }

    pub fn clamp(min: Option<f64>, max: Option<f64>) -> Result<Self, ConfigurationError> {
        Ok(ClampTransformation::new(min, max)?.into())
    }

    pub fn bell_match(center: f64, sigma: f64) -> Result<Self, ConfigurationError> {
        Ok(BellMatchTransformation::new(center, sigma)?.into())
    }

    pub fn sigmoid(center: f64, steepness: f64) -> Result<Self, ConfigurationError> {
        Ok(SigmoidTransformation::new(center, steepness)?.into())
    }

    /// Sigmoid passing through two `(x, y)` anchor points with `y` within $(0, 1)$
    pub fn sigmoid_from_anchors(anchors: [(f64, f64); 2]) -> Result<Self, ConfigurationError> {
        Ok(SigmoidTransformation::from_anchors(anchors)?.into())
    }

    pub fn two_sided_affine(
        slope_left: f64,
        slope_right: f64,
        midpoint: f64,
    ) -> Result<Self, ConfigurationError> {
        Ok(TwoSidedAffineTransformation::new(slope_left, slope_right, midpoint)?.into())
    }

    /// Triangle peaking at `center`, exactly one of width, cutoffs or margins must be given
    pub fn match_triangular(
        center: f64,
        parameters: TriangularParameters,
    ) -> Result<Self, ConfigurationError> {
        Ok(TriangularMatchTransformation::new(center, parameters)?.into())
    }

    /// Shift by `-match_value` followed by a bell of width `sigma` centered at zero
    pub fn match_bell(match_value: f64, sigma: f64) -> Result<Self, ConfigurationError> {
        let shift = AffineTransformation::shift(-match_value)?;
        Ok(Self::from(shift).then(BellMatchTransformation::new(0.0, sigma)?))
    }

    /// Negated absolute distance to `match_value`
    pub fn match_absolute(match_value: f64) -> Result<Self, ConfigurationError> {
        let shift = AffineTransformation::shift(-match_value)?;
        Ok(Self::from(shift)
            .then(Self::absolute())
            .then(Self::negation()))
    }

    /// Chain `self` followed by `next`
    pub fn then(self, next: impl Into<Transformation>) -> Self {
        chain::chain(self, next)
    }

    /// Transform a single value, NaN input is rejected
    pub fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        if x.is_nan() {
            return Err(DomainError::NotANumber);
        }
        self.apply(x)
    }

    /// Steps in order of application, a single node is a chain of itself
    pub fn steps(&self) -> &[Transformation] {
        match self {
            Self::Chain(chain) => chain.steps(),
            _ => std::slice::from_ref(self),
        }
    }

    pub fn into_steps(self) -> Vec<Transformation> {
        match self {
            Self::Chain(chain) => chain.into_steps(),
            _ => vec![self],
        }
    }

    pub fn is_identity(&self) -> bool {
        self.steps().iter().all(|step| match step {
            Self::Identity(_) => true,
            Self::Affine(affine) => affine.is_identity(),
            Self::Power(power) => power.is_identity(),
            _ => false,
        })
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Neg for Transformation {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.then(Self::negation())
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("x"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_absolute_peaks_at_match_value() {
        let t = Transformation::match_absolute(3.0).unwrap();
        assert_eq!(t.evaluate(3.0).unwrap(), 0.0);
        assert_eq!(t.evaluate(1.0).unwrap(), -2.0);
        assert_eq!(t.evaluate(5.0).unwrap(), -2.0);
        assert_eq!(t.to_string(), "-(|x - 3|)");
    }

    #[test]
    fn match_bell_peaks_at_match_value() {
        let t = Transformation::match_bell(3.0, 0.5).unwrap();
        assert_eq!(t.evaluate(3.0).unwrap(), 1.0);
        assert!(t.evaluate(3.5).unwrap() < 1.0);
        assert_eq!(t.steps().len(), 2);
    }

    #[test]
    fn sigmoid_from_anchors() {
        let t = Transformation::sigmoid_from_anchors([(0.0, 0.5), (2.0, 0.75)]).unwrap();
        assert_eq!(t.evaluate(0.0).unwrap(), 0.5);
        assert!(t.evaluate(3.0).unwrap() > 0.75);
        assert!(Transformation::sigmoid_from_anchors([(0.0, 0.5), (2.0, 1.5)]).is_err());
    }

    #[test]
    fn two_sided_absolute_equals_absolute() {
        let two_sided = Transformation::two_sided_affine(-1.0, 1.0, 0.0).unwrap();
        assert_eq!(two_sided, Transformation::absolute());
        let shifted = Transformation::two_sided_affine(-1.0, 1.0, 3.0).unwrap();
        assert_eq!(shifted.evaluate(1.0).unwrap(), 2.0);
        assert_eq!(shifted.evaluate(5.0).unwrap(), 2.0);
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(
            Transformation::identity().evaluate(f64::NAN),
            Err(DomainError::NotANumber)
        );
    }

    #[test]
    fn negation_operator() {
        let t = -Transformation::power(2.0).unwrap();
        assert_eq!(t.evaluate(3.0).unwrap(), -9.0);
    }

    #[test]
    fn logarithm_domain() {
        let t = Transformation::logarithm();
        assert_eq!(
            t.evaluate(0.0),
            Err(DomainError::NonPositiveLogarithm(0.0))
        );
        assert!(t.image(Interval::new(0.0, 1.0).unwrap()).is_err());
        let open_at_zero = Interval::new(0.0, 1.0)
            .unwrap()
            .with_open_ends(true, false)
            .unwrap();
        assert_eq!(
            t.image(open_at_zero).unwrap(),
            Interval::from_options(None, Some(0.0)).unwrap()
        );
        assert_eq!(
            t.image(Interval::from_options(Some(1.0), None).unwrap())
                .unwrap(),
            Interval::from_options(Some(0.0), None).unwrap()
        );
    }

    #[test]
    fn exponential_image() {
        let t = Transformation::exponential();
        let image = t.image(Interval::unbounded()).unwrap();
        assert_eq!(image.lower(), 0.0);
        assert!(image.is_lower_open());
        assert!(!image.contains(0.0));
        let closed = t.image(Interval::new(0.0, 1.0).unwrap()).unwrap();
        assert_eq!(closed.lower(), 1.0);
        assert!(!closed.is_lower_open());
    }

    #[test]
    fn absolute_image() {
        let t = Transformation::absolute();
        assert_eq!(
            t.image(Interval::new(-4.0, 3.0).unwrap()).unwrap(),
            Interval::new(0.0, 4.0).unwrap()
        );
        assert_eq!(
            t.image(Interval::new(-4.0, -3.0).unwrap()).unwrap(),
            Interval::new(3.0, 4.0).unwrap()
        );
        let below_zero = Interval::new(-4.0, 0.0)
            .unwrap()
            .with_open_ends(false, true)
            .unwrap();
        assert_eq!(
            t.image(below_zero).unwrap(),
            Interval::new(0.0, 4.0)
                .unwrap()
                .with_open_ends(true, false)
                .unwrap()
        );
    }

    #[test]
    fn identity_detection() {
        assert!(Transformation::identity().is_identity());
        assert!(Transformation::affine(1.0, 0.0).unwrap().is_identity());
        assert!(!Transformation::negation().is_identity());
    }
}
