use crate::canonical::approx_eq;
use crate::transformations::transformation::*;

macro_const! {
    const DOC: &str = r"
Clamping of values to $[\mathrm{min}, \mathrm{max}]$

Either bound may be omitted, but not both.
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "ClampParameters", into = "ClampParameters")]
pub struct ClampTransformation {
    min: Option<f64>,
    max: Option<f64>,
}

impl ClampTransformation {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, ConfigurationError> {
        if min.is_none() && max.is_none() {
            return Err(ConfigurationError::EmptyClamp);
        }
        if let Some(min) = min {
            ensure_finite!(min);
        }
        if let Some(max) = max {
            ensure_finite!(max);
        }
        if let (Some(lower), Some(upper)) = (min, max) {
            if lower > upper {
                return Err(ConfigurationError::InvertedBounds { lower, upper });
            }
        }
        Ok(Self { min, max })
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    #[inline]
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Interval the values are clamped to
    pub fn bounds(&self) -> Interval {
        Interval::spanning(
            self.min.unwrap_or(f64::NEG_INFINITY),
            self.max.unwrap_or(f64::INFINITY),
        )
    }

    #[inline]
    fn transform_one(&self, x: f64) -> f64 {
        let bounds = self.bounds();
        x.clamp(bounds.lower(), bounds.upper())
    }
}

fn option_approx_eq(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => approx_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for ClampTransformation {
    fn eq(&self, other: &Self) -> bool {
        option_approx_eq(self.min, other.min) && option_approx_eq(self.max, other.max)
    }
}

impl TransformationTrait for ClampTransformation {
    fn apply(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self.transform_one(x))
    }

    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
        let bounds = self.bounds();
        let (lower, upper) = (domain.lower(), domain.upper());
        let (clamped_lower, clamped_upper) = (self.transform_one(lower), self.transform_one(upper));
        // An excluded end stays excluded only if values next to it are not clamped
        let lower_open = domain.is_lower_open() && clamped_lower == lower && lower < bounds.upper();
        let upper_open = domain.is_upper_open() && clamped_upper == upper && upper > bounds.lower();
        Ok(Interval::with_ends(
            clamped_lower,
            lower_open,
            clamped_upper,
            upper_open,
        ))
    }

    fn describe(&self, input: &str) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("clamp({input}, {min}, {max})"),
            (Some(min), None) => format!("max({input}, {min})"),
            (None, Some(max)) => format!("min({input}, {max})"),
            (None, None) => input.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Clamp")]
struct ClampParameters {
    min: Option<f64>,
    max: Option<f64>,
}

impl From<ClampTransformation> for ClampParameters {
    fn from(t: ClampTransformation) -> Self {
        Self {
            min: t.min,
            max: t.max,
        }
    }
}

impl TryFrom<ClampParameters> for ClampTransformation {
    type Error = ConfigurationError;

    fn try_from(p: ClampParameters) -> Result<Self, Self::Error> {
        Self::new(p.min, p.max)
    }
}

impl JsonSchema for ClampTransformation {
    json_schema!(ClampParameters, false);
}
