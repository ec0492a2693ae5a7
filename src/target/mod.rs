pub mod legacy;
pub use legacy::{BoundsTransform, LegacyTargetParameters, TargetMode};

mod numerical;
pub use numerical::{ModernTargetParameters, NumericalTarget};

mod parameters;
