use crate::canonical::approx_eq;
use crate::transformations::affine::AffineTransformation;
use crate::transformations::transformation::*;

macro_const! {
    const DOC: &str = r"
Triangular proximity to a set point

$$
f(x) =
\begin{cases}
    0 & \text{if } x < c - l, \\
    1 - (c - x) / l & \text{if } c - l \leq x < c, \\
    1 - (x - c) / r & \text{if } c \leq x < c + r, \\
    0 & \text{if } c + r \leq x,
\end{cases}
$$
where $c$ is the center and $l$, $r$ are the left and right margins. The node may be specified by
a symmetric width, by explicit cutoffs $(c - l, c + r)$ or by the margins themselves, all three
forms are stored as margins.
";
}

/// Parameters of a triangular match, exactly one field must be set
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TriangularParameters {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub cutoffs: Option<(f64, f64)>,
    #[serde(default)]
    pub margins: Option<(f64, f64)>,
}

impl TriangularParameters {
    pub fn width(width: f64) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn cutoffs(lower: f64, upper: f64) -> Self {
        Self {
            cutoffs: Some((lower, upper)),
            ..Self::default()
        }
    }

    pub fn margins(left: f64, right: f64) -> Self {
        Self {
            margins: Some((left, right)),
            ..Self::default()
        }
    }

    /// Resolve the given form into `(left, right)` margins around `center`
    pub fn resolve_margins(&self, center: f64) -> Result<(f64, f64), ConfigurationError> {
        match (self.width, self.cutoffs, self.margins) {
            (Some(width), None, None) => Ok((0.5 * width, 0.5 * width)),
            (None, Some((lower, upper)), None) => Ok((center - lower, upper - center)),
            (None, None, Some(margins)) => Ok(margins),
            _ => Err(ConfigurationError::TriangularParameterCount {
                given: [
                    self.width.is_some(),
                    self.cutoffs.is_some(),
                    self.margins.is_some(),
                ]
                .into_iter()
                .filter(|&given| given)
                .count(),
            }),
        }
    }
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "TriangularMatchParameters", into = "TriangularMatchParameters")]
pub struct TriangularMatchTransformation {
    center: f64,
    left_margin: f64,
    right_margin: f64,
}

impl TriangularMatchTransformation {
    pub fn new(center: f64, parameters: TriangularParameters) -> Result<Self, ConfigurationError> {
        let (left, right) = parameters.resolve_margins(center)?;
        Self::from_margins(center, left, right)
    }

    pub fn from_margins(center: f64, left: f64, right: f64) -> Result<Self, ConfigurationError> {
        ensure_finite!(center, left, right);
        if left < 0.0 || right < 0.0 {
            return Err(ConfigurationError::NegativeMargins { left, right });
        }
        Ok(Self {
            center,
            left_margin: left,
            right_margin: right,
        })
    }

    pub fn from_width(center: f64, width: f64) -> Result<Self, ConfigurationError> {
        Self::new(center, TriangularParameters::width(width))
    }

    pub fn from_cutoffs(center: f64, lower: f64, upper: f64) -> Result<Self, ConfigurationError> {
        Self::new(center, TriangularParameters::cutoffs(lower, upper))
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[inline]
    pub fn margins(&self) -> (f64, f64) {
        (self.left_margin, self.right_margin)
    }

    /// Points where the triangle reaches zero
    pub fn cutoffs(&self) -> (f64, f64) {
        (
            self.center - self.left_margin,
            self.center + self.right_margin,
        )
    }

    /// Triangle equivalent to applying `affine` first and then `self`
    ///
    /// A negative factor mirrors the triangle, swapping its margins.
    pub fn after(&self, affine: &AffineTransformation) -> Option<Self> {
        let factor = affine.factor();
        if factor == 0.0 {
            return None;
        }
        let center = (self.center - affine.offset()) / factor;
        let (left, right) = if factor > 0.0 {
            (self.left_margin, self.right_margin)
        } else {
            (self.right_margin, self.left_margin)
        };
        Self::from_margins(center, left / factor.abs(), right / factor.abs()).ok()
    }

    #[inline]
    fn transform_one(&self, x: f64) -> f64 {
        let distance = x - self.center;
        let margin = if distance < 0.0 {
            self.left_margin
        } else {
            self.right_margin
        };
        if distance == 0.0 {
            1.0
        } else if margin == 0.0 {
            0.0
        } else {
            f64::max(1.0 - distance.abs() / margin, 0.0)
        }
    }
}

impl PartialEq for TriangularMatchTransformation {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.center, other.center)
            && approx_eq(self.left_margin, other.left_margin)
            && approx_eq(self.right_margin, other.right_margin)
    }
}

impl TransformationTrait for TriangularMatchTransformation {
    fn apply(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self.transform_one(x))
    }

    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
        // Zero is reached at finite input, so the ends are never excluded
        let at_ends = Interval::spanning(
            self.transform_one(domain.lower()),
            self.transform_one(domain.upper()),
        );
        if domain.contains(self.center) {
            Ok(Interval::spanning(at_ends.lower(), 1.0))
        } else {
            Ok(at_ends)
        }
    }

    fn describe(&self, input: &str) -> String {
        format!(
            "triangle({input}; center={}, margins=({}, {}))",
            self.center, self.left_margin, self.right_margin
        )
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "TriangularMatch")]
struct TriangularMatchParameters {
    center: f64,
    left_margin: f64,
    right_margin: f64,
}

impl From<TriangularMatchTransformation> for TriangularMatchParameters {
    fn from(t: TriangularMatchTransformation) -> Self {
        Self {
            center: t.center,
            left_margin: t.left_margin,
            right_margin: t.right_margin,
        }
    }
}

impl TryFrom<TriangularMatchParameters> for TriangularMatchTransformation {
    type Error = ConfigurationError;

    fn try_from(p: TriangularMatchParameters) -> Result<Self, Self::Error> {
        Self::from_margins(p.center, p.left_margin, p.right_margin)
    }
}

impl JsonSchema for TriangularMatchTransformation {
    json_schema!(TriangularMatchParameters, false);
}
