use ndarray::ScalarOperand;
use std::fmt::{Debug, Display, LowerExp};

/// Floating-point element type accepted by target evaluation
///
/// Transformation parameters are kept in `f64` and evaluation is carried out in `f64`, the
/// element type only defines the shape of the caller's data.
pub trait Float:
    num_traits::Float
    + Debug
    + Display
    + LowerExp
    + ScalarOperand
    + Default
    + Send
    + Sync
    + 'static
{
    fn into_f64(self) -> f64;

    fn from_f64_lossy(value: f64) -> Self;
}

macro_rules! impl_float {
    ($t: ty) => {
        impl Float for $t {
            #[inline]
            fn into_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64_lossy(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
