use crate::error::ConfigurationError;
use crate::interval::Interval;
use crate::target::legacy::{BoundsTransform, LegacyTargetParameters, TargetMode};
use crate::target::numerical::{ModernTargetParameters, NumericalTarget};
use crate::transformations::Transformation;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Serialized form of [NumericalTarget]
///
/// Both interfaces are accepted on input, the legacy one is recognized by its `mode` field.
/// Targets are always written in the modern form with the canonical transformation.
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(untagged, rename = "NumericalTarget")]
pub(crate) enum NumericalTargetParameters {
    Modern(ModernConfig),
    Legacy(LegacyConfig),
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct ModernConfig {
    name: String,
    #[serde(default)]
    transformation: Transformation,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    minimize: bool,
    #[serde(default)]
    domain: Interval,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct LegacyConfig {
    name: String,
    mode: TargetMode,
    #[serde(default)]
    bounds: Option<(f64, f64)>,
    #[serde(default)]
    transform: Option<BoundsTransform>,
}

impl NumericalTargetParameters {
    pub(crate) fn modern(name: String, transformation: Transformation, domain: Interval) -> Self {
        Self::Modern(ModernConfig {
            name,
            transformation,
            minimize: false,
            domain,
        })
    }

    pub(crate) fn build(self) -> Result<NumericalTarget, ConfigurationError> {
        match self {
            Self::Modern(config) => {
                let parameters = ModernTargetParameters {
                    transformation: config.transformation,
                    minimize: config.minimize,
                };
                Ok(NumericalTarget::from_modern_interface(config.name, parameters)?
                    .with_domain(config.domain))
            }
            Self::Legacy(config) => {
                let parameters = LegacyTargetParameters {
                    mode: config.mode,
                    bounds: config.bounds,
                    transform: config.transform,
                };
                NumericalTarget::from_legacy_interface(config.name, &parameters)
            }
        }
    }
}
