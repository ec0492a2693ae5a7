use crate::canonical::approx_eq;
use crate::transformations::transformation::*;

macro_const! {
    const DOC: &str = r"
Affine map $x \mapsto a x + b$

Negation, shifting, scaling and rescaling onto the unit interval are all expressed with this
node. Two adjacent affine maps are merged into one during canonicalization.
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "AffineParameters", into = "AffineParameters")]
pub struct AffineTransformation {
    factor: f64,
    offset: f64,
}

impl AffineTransformation {
    pub fn new(factor: f64, offset: f64) -> Result<Self, ConfigurationError> {
        ensure_finite!(factor, offset);
        Ok(Self { factor, offset })
    }

    /// $x \mapsto -x$, the inversion appended to minimized targets
    pub const fn negation() -> Self {
        Self {
            factor: -1.0,
            offset: 0.0,
        }
    }

    pub fn shift(offset: f64) -> Result<Self, ConfigurationError> {
        Self::new(1.0, offset)
    }

    pub fn scale(factor: f64) -> Result<Self, ConfigurationError> {
        Self::new(factor, 0.0)
    }

    /// Affine map sending `mapped_to_zero` to 0 and `mapped_to_one` to 1
    pub fn from_points_mapped_to_unit_interval_bounds(
        mapped_to_zero: f64,
        mapped_to_one: f64,
    ) -> Result<Self, ConfigurationError> {
        ensure_finite!(mapped_to_zero, mapped_to_one);
        if mapped_to_zero == mapped_to_one {
            return Err(ConfigurationError::ZeroDivision);
        }
        let factor = 1.0 / (mapped_to_one - mapped_to_zero);
        Self::new(factor, -mapped_to_zero * factor)
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_identity(&self) -> bool {
        approx_eq(self.factor, 1.0) && approx_eq(self.offset, 0.0)
    }

    /// Single affine map equivalent to applying `self` and then `next`
    ///
    /// Returns `None` if the merged parameters overflow.
    pub fn then(&self, next: &Self) -> Option<Self> {
        Self::new(
            next.factor * self.factor,
            next.factor * self.offset + next.offset,
        )
        .ok()
    }

    #[inline]
    fn transform_one(&self, x: f64) -> f64 {
        // Avoids 0 * inf
        if self.factor == 0.0 {
            self.offset
        } else {
            self.factor * x + self.offset
        }
    }
}

impl PartialEq for AffineTransformation {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.factor, other.factor) && approx_eq(self.offset, other.offset)
    }
}

impl TransformationTrait for AffineTransformation {
    fn apply(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self.transform_one(x))
    }

    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
        if self.factor == 0.0 {
            return Ok(Interval::point(self.offset));
        }
        Ok(domain.map_monotonic(|x| self.transform_one(x)))
    }

    fn describe(&self, input: &str) -> String {
        let scaled = if self.factor == 1.0 {
            input.to_string()
        } else if self.factor == -1.0 {
            format!("-{}", parenthesize(input))
        } else {
            format!("{} * {}", self.factor, parenthesize(input))
        };
        match self.offset {
            offset if offset == 0.0 => scaled,
            offset if offset < 0.0 => format!("{scaled} - {}", -offset),
            offset => format!("{scaled} + {offset}"),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Affine")]
struct AffineParameters {
    factor: f64,
    offset: f64,
}

impl From<AffineTransformation> for AffineParameters {
    fn from(t: AffineTransformation) -> Self {
        Self {
            factor: t.factor,
            offset: t.offset,
        }
    }
}

impl TryFrom<AffineParameters> for AffineTransformation {
    type Error = ConfigurationError;

    fn try_from(p: AffineParameters) -> Result<Self, Self::Error> {
        Self::new(p.factor, p.offset)
    }
}

impl JsonSchema for AffineTransformation {
    json_schema!(AffineParameters, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    check_transformation!(
        AffineTransformation,
        AffineTransformation::new(-2.5, 3.0).unwrap()
    );

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            AffineTransformation::new(f64::INFINITY, 0.0),
            Err(ConfigurationError::NonFiniteParameter {
                name: "factor",
                value: f64::INFINITY
            })
        );
        assert!(AffineTransformation::shift(f64::NAN).is_err());
    }

    #[test]
    fn negative_factor_flips_image() {
        let t = AffineTransformation::new(-2.0, 1.0).unwrap();
        let image = t.image(Interval::new(0.0, 3.0).unwrap()).unwrap();
        assert_eq!(image, Interval::new(-5.0, 1.0).unwrap());
    }

    #[test]
    fn zero_factor_maps_unbounded_domain_to_point() {
        let t = AffineTransformation::new(0.0, 4.0).unwrap();
        assert_eq!(
            t.image(Interval::unbounded()).unwrap(),
            Interval::new(4.0, 4.0).unwrap()
        );
        assert_eq!(t.apply(f64::INFINITY).unwrap(), 4.0);
    }

    #[test]
    fn then_composes() {
        let first = AffineTransformation::new(2.0, 1.0).unwrap();
        let second = AffineTransformation::new(3.0, -4.0).unwrap();
        let merged = first.then(&second).unwrap();
        for x in [-3.0, 0.0, 0.5, 7.0] {
            let expected = second.apply(first.apply(x).unwrap()).unwrap();
            assert_abs_diff_eq!(merged.apply(x).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn unit_interval_points() {
        let t = AffineTransformation::from_points_mapped_to_unit_interval_bounds(3.0, 7.0).unwrap();
        assert_eq!(t.apply(3.0).unwrap(), 0.0);
        assert_abs_diff_eq!(t.apply(7.0).unwrap(), 1.0, epsilon = 1e-15);

        let reversed =
            AffineTransformation::from_points_mapped_to_unit_interval_bounds(7.0, 3.0).unwrap();
        assert_abs_diff_eq!(reversed.apply(3.0).unwrap(), 1.0, epsilon = 1e-15);
        assert_eq!(reversed.apply(7.0).unwrap(), 0.0);

        assert_eq!(
            AffineTransformation::from_points_mapped_to_unit_interval_bounds(1.0, 1.0),
            Err(ConfigurationError::ZeroDivision)
        );
    }

    #[test]
    fn describe() {
        assert_eq!(AffineTransformation::negation().describe("x"), "-x");
        assert_eq!(
            AffineTransformation::new(2.0, -1.0).unwrap().describe("x"),
            "2 * x - 1"
        );
        assert_eq!(
            AffineTransformation::shift(3.0).unwrap().describe("|x|"),
            "|x| + 3"
        );
    }

    #[test]
    fn tolerance_equality() {
        let a = AffineTransformation::new(1.0 / 3.0, 0.1 + 0.2).unwrap();
        let b = AffineTransformation::new(1.0 / 3.0, 0.3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, AffineTransformation::new(1.0 / 3.0, 0.3001).unwrap());
    }
}
