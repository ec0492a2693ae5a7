/// Error returned when a transformation or target is built from invalid parameters
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ConfigurationError {
    #[error("exactly one of width, cutoffs or margins must be given, {given} given")]
    TriangularParameterCount { given: usize },

    #[error("triangular margins must be non-negative, given ({left}, {right})")]
    NegativeMargins { left: f64, right: f64 },

    #[error("sigma must be positive, given {0}")]
    NonPositiveSigma(f64),

    #[error("parameter {name} must be finite, given {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("at least one clamping bound must be given")]
    EmptyClamp,

    #[error("lower bound {lower} exceeds upper bound {upper}")]
    InvertedBounds { lower: f64, upper: f64 },

    #[error("bound must not be NaN")]
    NanBound,

    #[error("interval excluding its only point {0} is empty")]
    EmptyInterval(f64),

    #[error("sigmoid anchor ordinate must lie within (0, 1), given {0}")]
    AnchorOutOfRange(f64),

    #[error("sigmoid anchors ({x1}, {y1}) and ({x2}, {y2}) must differ in both coordinates")]
    DegenerateAnchors { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("target name must not be empty")]
    EmptyName,

    #[error("division by zero")]
    ZeroDivision,

    #[error("mode {mode} cannot be combined with the {transform} bounds transform")]
    IncompatibleBoundsTransform {
        mode: &'static str,
        transform: &'static str,
    },

    #[error("mode {0} requires finite bounds")]
    MissingBounds(&'static str),

    #[error("a bounds transform was given without bounds")]
    TransformWithoutBounds,
}

/// Error returned when a value or an input domain lies outside of where a transformation is defined
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum DomainError {
    #[error("logarithm is undefined for non-positive value {0}")]
    NonPositiveLogarithm(f64),

    #[error("fractional power {exponent} is undefined for negative value {value}")]
    NegativeFractionalPower { value: f64, exponent: f64 },

    #[error("zero cannot be raised to the negative power {0}")]
    ZeroNegativePower(f64),

    #[error("input value is NaN")]
    NotANumber,

    #[error("logarithm requires a positive domain, given [{lower}, {upper}]")]
    NonPositiveLogarithmDomain { lower: f64, upper: f64 },

    #[error("fractional power {exponent} requires a non-negative domain, given [{lower}, {upper}]")]
    NegativeFractionalPowerDomain {
        lower: f64,
        upper: f64,
        exponent: f64,
    },

    #[error("negative power {exponent} is undefined on a domain [{lower}, {upper}] containing zero")]
    ZeroInNegativePowerDomain {
        lower: f64,
        upper: f64,
        exponent: f64,
    },
}

/// Error returned from [crate::NumericalTarget::normalize]
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum NormalizationError {
    #[error("image [{lower}, {upper}] is not finite and cannot be normalized")]
    UnboundedDomain { lower: f64, upper: f64 },

    #[error("image collapses to the single value {value} and cannot be normalized")]
    DegenerateRange { value: f64 },

    #[error("image cannot be computed: {0}")]
    Domain(#[from] DomainError),
}

/// Error returned from all-or-nothing batch evaluation
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
#[error("element {index} cannot be transformed: {source}")]
pub struct ElementDomainError {
    pub index: usize,
    pub source: DomainError,
}
