use crate::canonical::approx_eq;
use crate::transformations::affine::AffineTransformation;
use crate::transformations::transformation::*;

use std::cmp::Ordering;

macro_const! {
    const DOC: &str = r"
Gaussian proximity to a set point

$$
f(x) = \exp\left(-\frac{(x - c)^2}{2\sigma^2}\right),
$$
where $c$ is the center and $\sigma$ the width of the bell. The maximum value of 1 is reached at
the center, the image over any domain is a subset of $(0, 1]$.
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "BellMatchParameters", into = "BellMatchParameters")]
pub struct BellMatchTransformation {
    center: f64,
    sigma: f64,
}

impl BellMatchTransformation {
    pub fn new(center: f64, sigma: f64) -> Result<Self, ConfigurationError> {
        ensure_finite!(center, sigma);
        if sigma <= 0.0 {
            return Err(ConfigurationError::NonPositiveSigma(sigma));
        }
        Ok(Self { center, sigma })
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Bell equivalent to applying `affine` first and then `self`
    ///
    /// The bell is symmetric, so a negative factor only moves the center.
    pub fn after(&self, affine: &AffineTransformation) -> Option<Self> {
        let factor = affine.factor();
        if factor == 0.0 {
            return None;
        }
        Self::new(
            (self.center - affine.offset()) / factor,
            self.sigma / factor.abs(),
        )
        .ok()
    }

    #[inline]
    fn transform_one(&self, x: f64) -> f64 {
        let z = (x - self.center) / self.sigma;
        (-0.5 * z * z).exp()
    }
}

impl PartialEq for BellMatchTransformation {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.center, other.center) && approx_eq(self.sigma, other.sigma)
    }
}

impl TransformationTrait for BellMatchTransformation {
    fn apply(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self.transform_one(x))
    }

    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
        let at_ends = domain.map_monotonic(|x| self.transform_one(x));
        if !domain.contains(self.center) {
            return Ok(at_ends);
        }
        // The lowest value is reached at the end farther from the center
        let to_lower = (domain.lower() - self.center).abs();
        let to_upper = (domain.upper() - self.center).abs();
        let lower_open = match to_lower.total_cmp(&to_upper) {
            Ordering::Greater => domain.is_lower_open(),
            Ordering::Less => domain.is_upper_open(),
            Ordering::Equal => domain.is_lower_open() && domain.is_upper_open(),
        };
        Ok(Interval::with_ends(at_ends.lower(), lower_open, 1.0, false))
    }

    fn describe(&self, input: &str) -> String {
        format!(
            "bell({input}; center={}, sigma={})",
            self.center, self.sigma
        )
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "BellMatch")]
struct BellMatchParameters {
    center: f64,
    sigma: f64,
}

impl From<BellMatchTransformation> for BellMatchParameters {
    fn from(t: BellMatchTransformation) -> Self {
        Self {
            center: t.center,
            sigma: t.sigma,
        }
    }
}

impl TryFrom<BellMatchParameters> for BellMatchTransformation {
    type Error = ConfigurationError;

    fn try_from(p: BellMatchParameters) -> Result<Self, Self::Error> {
        Self::new(p.center, p.sigma)
    }
}

impl JsonSchema for BellMatchTransformation {
    json_schema!(BellMatchParameters, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    check_transformation!(
        BellMatchTransformation,
        BellMatchTransformation::new(3.0, 0.5).unwrap()
    );

    #[test]
    fn rejects_non_positive_sigma() {
        assert_eq!(
            BellMatchTransformation::new(0.0, 0.0),
            Err(ConfigurationError::NonPositiveSigma(0.0))
        );
        assert_eq!(
            BellMatchTransformation::new(0.0, -1.0),
            Err(ConfigurationError::NonPositiveSigma(-1.0))
        );
    }

    #[test]
    fn maximum_at_center() {
        let t = BellMatchTransformation::new(2.0, 1.0).unwrap();
        assert_eq!(t.apply(2.0).unwrap(), 1.0);
        assert_relative_eq!(t.apply(3.0).unwrap(), (-0.5f64).exp());
        assert_eq!(t.apply(f64::NEG_INFINITY).unwrap(), 0.0);
    }

    #[test]
    fn image() {
        let t = BellMatchTransformation::new(0.0, 1.0).unwrap();
        let around_center = t.image(Interval::new(-1.0, 2.0).unwrap()).unwrap();
        assert_relative_eq!(around_center.lower(), (-2.0f64).exp());
        assert_eq!(around_center.upper(), 1.0);

        let one_side = t.image(Interval::new(1.0, 2.0).unwrap()).unwrap();
        assert_relative_eq!(one_side.lower(), (-2.0f64).exp());
        assert_relative_eq!(one_side.upper(), (-0.5f64).exp());

        let unbounded = t.image(Interval::unbounded()).unwrap();
        assert_eq!(
            unbounded,
            Interval::unit().with_open_ends(true, false).unwrap()
        );
        assert!(!unbounded.contains(0.0));

        let half_line = t
            .image(Interval::from_options(Some(-1.0), None).unwrap())
            .unwrap();
        assert!(half_line.is_lower_open());
        assert_eq!(half_line.lower(), 0.0);
    }

    #[test]
    fn absorbs_affine() {
        let bell = BellMatchTransformation::new(1.0, 2.0).unwrap();
        let affine = AffineTransformation::new(-4.0, 3.0).unwrap();
        let merged = bell.after(&affine).unwrap();
        for x in [-2.0, -0.5, 0.0, 0.5, 1.5] {
            let expected = bell.apply(affine.apply(x).unwrap()).unwrap();
            assert_relative_eq!(merged.apply(x).unwrap(), expected, max_relative = 1e-12);
        }
        assert!(bell.after(&AffineTransformation::scale(0.0).unwrap()).is_none());
    }
}
