use crate::bounds::unit_rescaling;
use crate::canonical::canonicalize;
use crate::error::{ConfigurationError, DomainError, ElementDomainError, NormalizationError};
use crate::float_trait::Float;
use crate::interval::Interval;
use crate::target::legacy::{BoundsTransform, LegacyTargetParameters, TargetMode};
use crate::target::parameters::NumericalTargetParameters;
use crate::transformations::affine::AffineTransformation;
use crate::transformations::triangular_match::TriangularParameters;
use crate::transformations::{Transformation, TransformationTrait};

use ndarray::{Array1, ArrayView1};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// Parameters of the modern target interface
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ModernTargetParameters {
    #[serde(default)]
    pub transformation: Transformation,
    #[serde(default)]
    pub minimize: bool,
}

/// Named observable together with the transformation mapping it onto a value to maximize
///
/// Minimization is not stored: it is resolved on construction by appending a negation to the
/// transformation. Every method deriving a new target returns a new value, the transformation is
/// always kept in canonical form.
///
/// Two targets are equal if their names and transformations are, the assumed input domain is not
/// compared.
///
/// ### Example
/// ```
/// use numerical_target::*;
///
/// let target = NumericalTarget::maximize("Yield")
///     .unwrap()
///     .power(2.0)
///     .unwrap()
///     .clamp(None, Some(100.0))
///     .unwrap()
///     .normalize()
///     .unwrap();
/// assert_eq!(target.evaluate(5.0).unwrap(), 0.25);
/// assert_eq!(target.evaluate(0.0).unwrap(), 0.0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(
    try_from = "NumericalTargetParameters",
    into = "NumericalTargetParameters"
)]
pub struct NumericalTarget {
    name: String,
    transformation: Transformation,
    domain: Interval,
}

impl NumericalTarget {
    /// Primary constructor, all other constructors route through it
    pub fn new(
        name: impl Into<String>,
        transformation: impl Into<Transformation>,
        minimize: bool,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyName);
        }
        let transformation = if minimize {
            transformation.into().then(Transformation::negation())
        } else {
            transformation.into()
        };
        Ok(Self {
            name,
            transformation: canonicalize(&transformation),
            domain: Interval::unbounded(),
        })
    }

    /// Maximize the raw value
    pub fn maximize(name: impl Into<String>) -> Result<Self, ConfigurationError> {
        Self::new(name, Transformation::identity(), false)
    }

    /// Minimize the raw value
    pub fn minimize(name: impl Into<String>) -> Result<Self, ConfigurationError> {
        Self::new(name, Transformation::identity(), true)
    }

    pub fn from_modern_interface(
        name: impl Into<String>,
        parameters: ModernTargetParameters,
    ) -> Result<Self, ConfigurationError> {
        Self::new(name, parameters.transformation, parameters.minimize)
    }

    pub fn from_legacy_interface(
        name: impl Into<String>,
        parameters: &LegacyTargetParameters,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        log::debug!("building target {name} from legacy parameters {parameters:?}");
        let mode = parameters.mode;
        let transform = parameters
            .transform
            .unwrap_or_else(|| mode.default_bounds_transform());
        let Some((lower, upper)) = parameters.bounds else {
            return match mode {
                TargetMode::Match => Err(ConfigurationError::MissingBounds(mode.as_str())),
                _ if parameters.transform.is_some() => {
                    Err(ConfigurationError::TransformWithoutBounds)
                }
                TargetMode::Max => Self::maximize(name),
                TargetMode::Min => Self::minimize(name),
            };
        };
        let bounds = Interval::new(lower, upper)?;
        if !bounds.is_bounded() {
            return Err(ConfigurationError::MissingBounds(mode.as_str()));
        }
        match (mode, transform) {
            (TargetMode::Max, BoundsTransform::Linear) => Self::normalized_ramp(name, bounds, false),
            (TargetMode::Min, BoundsTransform::Linear) => Self::normalized_ramp(name, bounds, true),
            (TargetMode::Match, BoundsTransform::Triangular) => Self::match_triangular(
                name,
                bounds.center(),
                TriangularParameters::cutoffs(lower, upper),
            ),
            (TargetMode::Match, BoundsTransform::Bell) => {
                Self::match_bell(name, bounds.center(), 0.5 * bounds.width())
            }
            (mode, transform) => Err(ConfigurationError::IncompatibleBoundsTransform {
                mode: mode.as_str(),
                transform: transform.as_str(),
            }),
        }
    }

    /// Clamp to `cutoffs` and map them linearly onto $[0, 1]$, reversed if `descending`
    pub fn normalized_ramp(
        name: impl Into<String>,
        cutoffs: Interval,
        descending: bool,
    ) -> Result<Self, ConfigurationError> {
        let (lower, upper) = (cutoffs.lower(), cutoffs.upper());
        let clamp = Transformation::clamp(Some(lower), Some(upper))?;
        let ramp = if descending {
            AffineTransformation::from_points_mapped_to_unit_interval_bounds(upper, lower)?
        } else {
            AffineTransformation::from_points_mapped_to_unit_interval_bounds(lower, upper)?
        };
        Self::new(name, clamp.then(ramp), false)
    }

    /// Sigmoid passing through two `(x, y)` anchor points, `y` must lie within $(0, 1)$
    ///
    /// The image is always a subset of $(0, 1)$, so the target is normalized by construction.
    pub fn normalized_sigmoid(
        name: impl Into<String>,
        anchors: [(f64, f64); 2],
    ) -> Result<Self, ConfigurationError> {
        Self::new(name, Transformation::sigmoid_from_anchors(anchors)?, false)
    }

    /// Triangle peaking at `center`, exactly one of width, cutoffs or margins must be given
    pub fn match_triangular(
        name: impl Into<String>,
        center: f64,
        parameters: TriangularParameters,
    ) -> Result<Self, ConfigurationError> {
        Self::new(
            name,
            Transformation::match_triangular(center, parameters)?,
            false,
        )
    }

    pub fn match_bell(
        name: impl Into<String>,
        match_value: f64,
        sigma: f64,
    ) -> Result<Self, ConfigurationError> {
        Self::new(name, Transformation::match_bell(match_value, sigma)?, false)
    }

    pub fn match_absolute(
        name: impl Into<String>,
        match_value: f64,
    ) -> Result<Self, ConfigurationError> {
        Self::new(name, Transformation::match_absolute(match_value)?, false)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical transformation of the target
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// Assumed input domain, unbounded unless set with [NumericalTarget::with_domain]
    pub fn domain(&self) -> Interval {
        self.domain
    }

    pub fn with_domain(&self, domain: Interval) -> Self {
        Self {
            domain,
            ..self.clone()
        }
    }

    /// Target with `step` appended to the transformation
    pub fn then(&self, step: impl Into<Transformation>) -> Self {
        let transformation = self.transformation.clone().then(step);
        Self {
            name: self.name.clone(),
            transformation: canonicalize(&transformation),
            domain: self.domain,
        }
    }

    pub fn add(&self, offset: f64) -> Result<Self, ConfigurationError> {
        Ok(self.then(AffineTransformation::shift(offset)?))
    }

    pub fn subtract(&self, offset: f64) -> Result<Self, ConfigurationError> {
        Ok(self.then(AffineTransformation::shift(-offset)?))
    }

    pub fn multiply(&self, factor: f64) -> Result<Self, ConfigurationError> {
        Ok(self.then(AffineTransformation::scale(factor)?))
    }

    pub fn divide(&self, divisor: f64) -> Result<Self, ConfigurationError> {
        if divisor == 0.0 {
            return Err(ConfigurationError::ZeroDivision);
        }
        Ok(self.then(AffineTransformation::scale(divisor.recip())?))
    }

    pub fn negate(&self) -> Self {
        self.then(AffineTransformation::negation())
    }

    pub fn abs(&self) -> Self {
        self.then(Transformation::absolute())
    }

    pub fn log(&self) -> Self {
        self.then(Transformation::logarithm())
    }

    pub fn exp(&self) -> Self {
        self.then(Transformation::exponential())
    }

    pub fn power(&self, exponent: f64) -> Result<Self, ConfigurationError> {
        Ok(self.then(Transformation::power(exponent)?))
    }

    pub fn clamp(&self, min: Option<f64>, max: Option<f64>) -> Result<Self, ConfigurationError> {
        Ok(self.then(Transformation::clamp(min, max)?))
    }

    /// Image of the assumed input domain
    pub fn image(&self) -> Result<Interval, DomainError> {
        self.transformation.image(self.domain)
    }

    /// Does the image of the assumed input domain lie within $[0, 1]$, up to the comparison
    /// tolerance?
    pub fn is_normalized(&self) -> bool {
        self.image()
            .map(|image| image.approx_subset_of(&Interval::unit()))
            .unwrap_or(false)
    }

    /// Rescale the image of the assumed input domain onto exactly $[0, 1]$
    ///
    /// Fails if the image is not finite or collapses to a single value. Normalizing an already
    /// normalized target returns an equal target.
    pub fn normalize(&self) -> Result<Self, NormalizationError> {
        let image = self.image()?;
        let rescaling = unit_rescaling(image)?;
        log::debug!(
            "normalizing target {}: image {image} rescaled with factor {} and offset {}",
            self.name,
            rescaling.factor(),
            rescaling.offset(),
        );
        Ok(self.then(rescaling))
    }

    /// Transform a single raw value into a value to maximize
    pub fn evaluate<T: Float>(&self, x: T) -> Result<T, DomainError> {
        self.transformation
            .evaluate(x.into_f64())
            .map(T::from_f64_lossy)
    }

    /// Transform all values, failing on the first element outside of the domain
    pub fn evaluate_array<T: Float>(
        &self,
        values: ArrayView1<'_, T>,
    ) -> Result<Array1<T>, ElementDomainError> {
        values
            .iter()
            .enumerate()
            .map(|(index, &x)| {
                self.evaluate(x)
                    .map_err(|source| ElementDomainError { index, source })
            })
            .collect()
    }

    /// Transform all values, reporting a result per element
    pub fn evaluate_each<T: Float>(&self, values: ArrayView1<'_, T>) -> Vec<Result<T, DomainError>> {
        values.iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl PartialEq for NumericalTarget {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.transformation == other.transformation
    }
}

impl Eq for NumericalTarget {}

impl Hash for NumericalTarget {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.transformation.hash(state);
    }
}

impl Neg for &NumericalTarget {
    type Output = NumericalTarget;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for NumericalTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.name,
            self.transformation.describe(&self.name)
        )
    }
}

impl From<NumericalTarget> for NumericalTargetParameters {
    fn from(target: NumericalTarget) -> Self {
        Self::modern(target.name, target.transformation, target.domain)
    }
}

impl TryFrom<NumericalTargetParameters> for NumericalTarget {
    type Error = ConfigurationError;

    fn try_from(p: NumericalTargetParameters) -> Result<Self, Self::Error> {
        p.build()
    }
}

impl JsonSchema for NumericalTarget {
    json_schema!(NumericalTargetParameters, false);
}
