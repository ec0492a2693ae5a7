use crate::canonical::approx_eq;
use crate::error::ConfigurationError;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Interval of real numbers, either end may be infinite or excluded
///
/// Used both as the declared input domain of a target and as the image computed by
/// [crate::propagate]. Infinite ends are always excluded. A finite end is excluded when it is
/// only approached but never attained, as $0$ in the image of $e^x$ over the real line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntervalParameters", into = "IntervalParameters")]
pub struct Interval {
    lower: f64,
    upper: f64,
    lower_open: bool,
    upper_open: bool,
}

impl Interval {
    /// Create a new closed interval, `lower` must not exceed `upper`
    pub fn new(lower: f64, upper: f64) -> Result<Self, ConfigurationError> {
        if lower.is_nan() || upper.is_nan() {
            return Err(ConfigurationError::NanBound);
        }
        if lower > upper {
            return Err(ConfigurationError::InvertedBounds { lower, upper });
        }
        Ok(Self::with_ends(lower, false, upper, false))
    }

    /// Create a new interval, a missing bound means the interval is unbounded on that side
    pub fn from_options(lower: Option<f64>, upper: Option<f64>) -> Result<Self, ConfigurationError> {
        Self::new(
            lower.unwrap_or(f64::NEG_INFINITY),
            upper.unwrap_or(f64::INFINITY),
        )
    }

    /// Exclude the given ends, fails if nothing would be left
    pub fn with_open_ends(
        &self,
        lower_open: bool,
        upper_open: bool,
    ) -> Result<Self, ConfigurationError> {
        if self.lower == self.upper && (lower_open || upper_open) {
            return Err(ConfigurationError::EmptyInterval(self.lower));
        }
        Ok(Self::with_ends(
            self.lower,
            self.lower_open || lower_open,
            self.upper,
            self.upper_open || upper_open,
        ))
    }

    pub const fn unbounded() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            lower_open: true,
            upper_open: true,
        }
    }

    pub const fn unit() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
            lower_open: false,
            upper_open: false,
        }
    }

    pub(crate) fn point(value: f64) -> Self {
        Self::with_ends(value, false, value, false)
    }

    /// Closed interval spanned by two values given in any order
    pub(crate) fn spanning(a: f64, b: f64) -> Self {
        Self::with_ends(a.min(b), false, a.max(b), false)
    }

    /// Interval with ordered ends, infinite ends are excluded and a single point is kept closed
    pub(crate) fn with_ends(lower: f64, lower_open: bool, upper: f64, upper_open: bool) -> Self {
        let single = lower == upper;
        Self {
            lower,
            upper,
            lower_open: lower.is_infinite() || (lower_open && !single),
            upper_open: upper.is_infinite() || (upper_open && !single),
        }
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[inline]
    pub fn is_lower_open(&self) -> bool {
        self.lower_open
    }

    #[inline]
    pub fn is_upper_open(&self) -> bool {
        self.upper_open
    }

    /// Lower bound, `None` if the interval is unbounded from below
    pub fn lower_bound(&self) -> Option<f64> {
        self.lower.is_finite().then_some(self.lower)
    }

    /// Upper bound, `None` if the interval is unbounded from above
    pub fn upper_bound(&self) -> Option<f64> {
        self.upper.is_finite().then_some(self.upper)
    }

    pub fn is_bounded(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Is the interval a single point?
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    pub fn contains(&self, x: f64) -> bool {
        let above_lower = self.lower < x || (self.lower == x && !self.lower_open);
        let below_upper = x < self.upper || (x == self.upper && !self.upper_open);
        above_lower && below_upper
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        let lower = other.lower < self.lower
            || (other.lower == self.lower && (self.lower_open || !other.lower_open));
        let upper = self.upper < other.upper
            || (self.upper == other.upper && (self.upper_open || !other.upper_open));
        lower && upper
    }

    /// Is this interval a subset of `other` with ends compared up to the comparison tolerance?
    pub fn approx_subset_of(&self, other: &Self) -> bool {
        (other.lower <= self.lower || approx_eq(self.lower, other.lower))
            && (self.upper <= other.upper || approx_eq(self.upper, other.upper))
    }

    /// Are the ends equal to the ends of `other` up to the comparison tolerance?
    ///
    /// Open and closed ends are not distinguished.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(self.lower, other.lower) && approx_eq(self.upper, other.upper)
    }

    /// Image of the interval under a function strictly monotonic on it, excluded ends stay
    /// excluded
    pub(crate) fn map_monotonic(&self, f: impl Fn(f64) -> f64) -> Self {
        let (a, b) = (f(self.lower), f(self.upper));
        if a <= b {
            Self::with_ends(a, self.lower_open, b, self.upper_open)
        } else {
            Self::with_ends(b, self.upper_open, a, self.lower_open)
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = ConfigurationError;

    fn try_from((lower, upper): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let left = if self.lower_open { '(' } else { '[' };
        let right = if self.upper_open { ')' } else { ']' };
        write!(f, "{left}{}, {}{right}", self.lower, self.upper)
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Interval")]
struct IntervalParameters {
    lower: Option<f64>,
    upper: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    lower_open: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    upper_open: bool,
}

impl From<Interval> for IntervalParameters {
    fn from(interval: Interval) -> Self {
        Self {
            lower: interval.lower_bound(),
            upper: interval.upper_bound(),
            lower_open: interval.lower_open && interval.lower.is_finite(),
            upper_open: interval.upper_open && interval.upper.is_finite(),
        }
    }
}

impl TryFrom<IntervalParameters> for Interval {
    type Error = ConfigurationError;

    fn try_from(p: IntervalParameters) -> Result<Self, Self::Error> {
        Self::from_options(p.lower, p.upper)?.with_open_ends(p.lower_open, p.upper_open)
    }
}

impl JsonSchema for Interval {
    json_schema!(IntervalParameters, false);
}
