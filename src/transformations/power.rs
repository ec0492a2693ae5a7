use crate::canonical::approx_eq;
use crate::transformations::transformation::*;

macro_const! {
    const DOC: &str = r"
Power $x \mapsto x^p$

Integer exponents accept any real input, fractional exponents require non-negative input and
negative exponents require non-zero input. Violations are reported as
[DomainError](crate::DomainError) both when evaluating a value and when propagating a domain.
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "PowerParameters", into = "PowerParameters")]
pub struct PowerTransformation {
    exponent: f64,
}

impl PowerTransformation {
    pub fn new(exponent: f64) -> Result<Self, ConfigurationError> {
        ensure_finite!(exponent);
        Ok(Self { exponent })
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    #[inline]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn is_integer(&self) -> bool {
        self.exponent.fract() == 0.0
    }

    pub fn is_even(&self) -> bool {
        self.is_integer() && (0.5 * self.exponent).fract() == 0.0
    }

    pub fn is_identity(&self) -> bool {
        approx_eq(self.exponent, 1.0)
    }
}

impl PartialEq for PowerTransformation {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.exponent, other.exponent)
    }
}

impl TransformationTrait for PowerTransformation {
    fn apply(&self, x: f64) -> Result<f64, DomainError> {
        let exponent = self.exponent;
        if x < 0.0 && !self.is_integer() {
            return Err(DomainError::NegativeFractionalPower { value: x, exponent });
        }
        if x == 0.0 && exponent < 0.0 {
            return Err(DomainError::ZeroNegativePower(exponent));
        }
        Ok(x.powf(exponent))
    }

    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
        let (lower, upper, exponent) = (domain.lower(), domain.upper(), self.exponent);
        if lower < 0.0 && !self.is_integer() {
            return Err(DomainError::NegativeFractionalPowerDomain {
                lower,
                upper,
                exponent,
            });
        }
        // An excluded zero end is allowed and maps to an unbounded one
        if exponent < 0.0 && domain.contains(0.0) {
            return Err(DomainError::ZeroInNegativePowerDomain {
                lower,
                upper,
                exponent,
            });
        }
        if exponent == 0.0 {
            return Ok(Interval::point(1.0));
        }
        // Even powers fold the negative half onto the positive one
        if exponent > 0.0 && self.is_even() && domain.contains(0.0) {
            let max = f64::max(lower.powf(exponent), upper.powf(exponent));
            return Ok(Interval::spanning(0.0, max));
        }
        // Zero approached from below keeps the sign of odd negative powers
        let end = |x: f64| {
            if x == 0.0 && lower < 0.0 {
                (-0.0f64).powf(exponent)
            } else {
                x.powf(exponent)
            }
        };
        Ok(domain.map_monotonic(end))
    }

    fn describe(&self, input: &str) -> String {
        format!("{}^{}", parenthesize(input), self.exponent)
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Power")]
struct PowerParameters {
    exponent: f64,
}

impl From<PowerTransformation> for PowerParameters {
    fn from(t: PowerTransformation) -> Self {
        Self {
            exponent: t.exponent,
        }
    }
}

impl TryFrom<PowerParameters> for PowerTransformation {
    type Error = ConfigurationError;

    fn try_from(p: PowerParameters) -> Result<Self, Self::Error> {
        Self::new(p.exponent)
    }
}

impl JsonSchema for PowerTransformation {
    json_schema!(PowerParameters, false);
}
