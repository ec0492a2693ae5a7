use crate::canonical::approx_eq;
use crate::transformations::affine::AffineTransformation;
use crate::transformations::transformation::*;

macro_const! {
    const DOC: &str = r"
Logistic sigmoid

$$
f(x) = \frac{1}{1 + e^{s (x - c)}},
$$
where $c$ is the center, at which the curve crosses $1/2$, and $s$ is the steepness. A negative
steepness gives an increasing curve, a positive one a decreasing curve. The image over any
domain is a subset of $(0, 1)$.

The node is usually built from two anchor points $(x_1, y_1)$ and $(x_2, y_2)$ the curve passes
through, with ordinates within $(0, 1)$.
";
}

#[doc = DOC!()]
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "SigmoidParameters", into = "SigmoidParameters")]
pub struct SigmoidTransformation {
    center: f64,
    steepness: f64,
}

impl SigmoidTransformation {
    pub fn new(center: f64, steepness: f64) -> Result<Self, ConfigurationError> {
        ensure_finite!(center, steepness);
        Ok(Self { center, steepness })
    }

    /// Sigmoid passing through both anchor points
    pub fn from_anchors(anchors: [(f64, f64); 2]) -> Result<Self, ConfigurationError> {
        let [(x1, y1), (x2, y2)] = anchors;
        ensure_finite!(x1, x2);
        for y in [y1, y2] {
            if !(y > 0.0 && y < 1.0) {
                return Err(ConfigurationError::AnchorOutOfRange(y));
            }
        }
        if x1 == x2 || y1 == y2 {
            return Err(ConfigurationError::DegenerateAnchors { x1, y1, x2, y2 });
        }
        let k1 = (1.0 / y1 - 1.0).ln();
        let k2 = (1.0 / y2 - 1.0).ln();
        Self::new((k2 * x1 - k1 * x2) / (k2 - k1), (k2 - k1) / (x2 - x1))
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    #[inline]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[inline]
    pub fn steepness(&self) -> f64 {
        self.steepness
    }

    /// Zero steepness gives the constant $1/2$
    pub fn is_constant(&self) -> bool {
        self.steepness == 0.0
    }

    /// Sigmoid equivalent to applying `affine` first and then `self`
    pub fn after(&self, affine: &AffineTransformation) -> Option<Self> {
        let factor = affine.factor();
        if factor == 0.0 {
            return None;
        }
        Self::new(
            (self.center - affine.offset()) / factor,
            self.steepness * factor,
        )
        .ok()
    }

    #[inline]
    fn transform_one(&self, x: f64) -> f64 {
        // Avoids 0 * inf
        if self.is_constant() {
            0.5
        } else {
            1.0 / (1.0 + (self.steepness * (x - self.center)).exp())
        }
    }
}

impl PartialEq for SigmoidTransformation {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.center, other.center) && approx_eq(self.steepness, other.steepness)
    }
}

impl TransformationTrait for SigmoidTransformation {
    fn apply(&self, x: f64) -> Result<f64, DomainError> {
        Ok(self.transform_one(x))
    }

    fn image(&self, domain: Interval) -> Result<Interval, DomainError> {
        if self.is_constant() {
            return Ok(Interval::point(0.5));
        }
        Ok(domain.map_monotonic(|x| self.transform_one(x)))
    }

    fn describe(&self, input: &str) -> String {
        format!(
            "sigmoid({input}; center={}, steepness={})",
            self.center, self.steepness
        )
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Sigmoid")]
struct SigmoidParameters {
    center: f64,
    steepness: f64,
}

impl From<SigmoidTransformation> for SigmoidParameters {
    fn from(t: SigmoidTransformation) -> Self {
        Self {
            center: t.center,
            steepness: t.steepness,
        }
    }
}

impl TryFrom<SigmoidParameters> for SigmoidTransformation {
    type Error = ConfigurationError;

    fn try_from(p: SigmoidParameters) -> Result<Self, Self::Error> {
        Self::new(p.center, p.steepness)
    }
}

impl JsonSchema for SigmoidTransformation {
    json_schema!(SigmoidParameters, false);
}
