use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Optimization mode of the legacy target interface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetMode {
    Max,
    Min,
    Match,
}

impl TargetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Max => "MAX",
            Self::Min => "MIN",
            Self::Match => "MATCH",
        }
    }

    /// Bounds transform used when none is given explicitly
    pub fn default_bounds_transform(&self) -> BoundsTransform {
        match self {
            Self::Max | Self::Min => BoundsTransform::Linear,
            Self::Match => BoundsTransform::Triangular,
        }
    }
}

/// Shape of the map from the legacy target bounds onto the unit interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoundsTransform {
    Linear,
    Triangular,
    Bell,
}

impl BoundsTransform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "LINEAR",
            Self::Triangular => "TRIANGULAR",
            Self::Bell => "BELL",
        }
    }
}

/// Parameters of the legacy target interface
///
/// - `MAX`/`MIN` without bounds maximize or minimize the raw value,
/// - `MAX`/`MIN` with bounds map the bounds linearly onto $[0, 1]$, clamping values outside,
/// - `MATCH` requires bounds and peaks at their midpoint, either with a triangle reaching zero at
///   the bounds or with a bell whose sigma is half of the bound width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LegacyTargetParameters {
    pub mode: TargetMode,
    #[serde(default)]
    pub bounds: Option<(f64, f64)>,
    #[serde(default)]
    pub transform: Option<BoundsTransform>,
}

impl LegacyTargetParameters {
    pub fn new(mode: TargetMode) -> Self {
        Self {
            mode,
            bounds: None,
            transform: None,
        }
    }

    pub fn with_bounds(self, lower: f64, upper: f64) -> Self {
        Self {
            bounds: Some((lower, upper)),
            ..self
        }
    }

    pub fn with_transform(self, transform: BoundsTransform) -> Self {
        Self {
            transform: Some(transform),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_uppercase() {
        let p: LegacyTargetParameters =
            serde_json::from_str(r#"{"mode": "MATCH", "bounds": [0, 100], "transform": "BELL"}"#)
                .unwrap();
        assert_eq!(
            p,
            LegacyTargetParameters::new(TargetMode::Match)
                .with_bounds(0.0, 100.0)
                .with_transform(BoundsTransform::Bell)
        );
    }

    #[test]
    fn default_transforms() {
        assert_eq!(
            TargetMode::Min.default_bounds_transform(),
            BoundsTransform::Linear
        );
        assert_eq!(
            TargetMode::Match.default_bounds_transform(),
            BoundsTransform::Triangular
        );
    }
}
