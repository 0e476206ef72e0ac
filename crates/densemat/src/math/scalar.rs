use std::fmt;
use std::iter::Sum;
use std::ops::{AddAssign, MulAssign, SubAssign};

use num_traits::Float;
use rand::distributions::uniform::SampleUniform;

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Real floating-point element type of a [`crate::Matrix`].
///
/// Implemented for `f32` and `f64` only, so a non-real element type is
/// rejected at compile time.
pub trait Scalar:
    Float
    + AddAssign
    + SubAssign
    + MulAssign
    + Sum
    + SampleUniform
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + private::Sealed
    + 'static
{
    /// Convert a double-precision factor, rounding for `f32`.
    fn from_f64_lossy(value: f64) -> Self;

    fn into_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn from_f64_lossy(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn into_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(f32, f64);
