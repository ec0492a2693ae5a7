use crate::canonical::approx_eq;
use crate::transformations::affine::AffineTransformation;
use crate::transformations::transformation::*;

macro_const! {
    const DOC: &str = r"
Two affine segments meeting at a midpoint

$$
f(x) =
\begin{cases}
    s_l (x - m) & \text{if } x < m, \\
    s_r (x - m) & \text{if } m \leq x,
\end{cases}
$$
where $m$ is the midpoint and $s_l$, $s_r$ are the slopes left and right of it. The function is
continuous and vanishes at the midpoint. Slopes $(-1, 1)$ with a zero midpoint give the absolute
value, equal slopes give an affine map.
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "TwoSidedAffineParameters", into = "TwoSidedAffineParameters")]
pub struct TwoSidedAffineTransformation {
    slope_left: f64,
    slope_right: f64,
    midpoint: f64,
}

impl TwoSidedAffineTransformation {
    pub fn new(slope_left: f64, slope_right: f64, midpoint: f64) -> Result<Self, ConfigurationError> {
        ensure_finite!(slope_left, slope_right, midpoint);
        Ok(Self {
            slope_left,
            slope_right,
            midpoint,
        })
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    #[inline]
    pub fn slopes(&self) -> (f64, f64) {
        (self.slope_left, self.slope_right)
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    /// Single affine map equal to `self` if both slopes are
    pub fn as_affine(&self) -> Option<AffineTransformation> {
        if !approx_eq(self.slope_left, self.slope_right) {
            return None;
        }
        AffineTransformation::new(self.slope_right, -self.slope_right * self.midpoint).ok()
    }

    /// Is this the absolute value, up to the comparison tolerance?
    pub fn is_absolute(&self) -> bool {
        approx_eq(self.slope_left, -1.0)
            && approx_eq(self.slope_right, 1.0)
            && approx_eq(self.midpoint, 0.0)
    }

    /// Segments equivalent to applying `affine` first and then `self`
    ///
    /// A negative factor mirrors the segments, swapping their slopes.
    pub fn after(&self, affine: &AffineTransformation) -> Option<Self> {
        let factor = affine.factor();
        if factor == 0.0 {
            return None;
        }
        let midpoint = (self.midpoint - affine.offset()) / factor;
        let (left, right) = if factor > 0.0 {
            (self.slope_left, self.slope_right)
        } else {
            (self.slope_right, self.slope_left)
        };
        Self::new(left * factor, right * factor, midpoint).ok()
    }

    #[inline]
    fn slope_at(&self, x: f64) -> f64 {
        if x < self.midpoint {
            self.slope_left
        } else {
            self.slope_right
        }
    }

    #[inline]
    fn transform_one(&self, x: f64) -> f64 {
        let slope = self.slope_at(x);
        // Avoids 0 * inf
        if slope == 0.0 {
            0.0
        } else {
            slope * (x - self.midpoint)
        }
    }
}

impl PartialEq for TwoSidedAffineTransformation {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.slope_left, other.slope_left)
            && approx_eq(self.slope_right, other.slope_right)
            && approx_eq(self.midpoint, other.midpoint)
    }
}

impl TransformationTrait for TwoSidedAffineTransformation {
    fn apply(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self.transform_one(x))
    }

    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
        let lower = self.transform_one(domain.lower());
        let upper = self.transform_one(domain.upper());
        if domain.contains(self.midpoint) {
            return Ok(Interval::spanning(
                lower.min(upper).min(0.0),
                lower.max(upper).max(0.0),
            ));
        }
        // A single segment is covered, a flat one maps onto zero
        let slope = if domain.upper() <= self.midpoint {
            self.slope_left
        } else {
            self.slope_right
        };
        if slope == 0.0 {
            return Ok(Interval::point(0.0));
        }
        Ok(domain.map_monotonic(|x| self.transform_one(x)))
    }

    fn describe(&self, input: &str) -> String {
        format!(
            "two_sided({input}; slopes=({}, {}), midpoint={})",
            self.slope_left, self.slope_right, self.midpoint
        )
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "TwoSidedAffine")]
struct TwoSidedAffineParameters {
    slope_left: f64,
    slope_right: f64,
    #[serde(default)]
    midpoint: f64,
}

impl From<TwoSidedAffineTransformation> for TwoSidedAffineParameters {
    fn from(t: TwoSidedAffineTransformation) -> Self {
        Self {
            slope_left: t.slope_left,
            slope_right: t.slope_right,
            midpoint: t.midpoint,
        }
    }
}

impl TryFrom<TwoSidedAffineParameters> for TwoSidedAffineTransformation {
    type Error = ConfigurationError;

    fn try_from(p: TwoSidedAffineParameters) -> Result<Self, Self::Error> {
        Self::new(p.slope_left, p.slope_right, p.midpoint)
    }
}

impl JsonSchema for TwoSidedAffineTransformation {
    json_schema!(TwoSidedAffineParameters, false);
}
