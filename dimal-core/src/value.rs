//! Numeric storage types for quantities, absolutes and units.

use core::fmt::{Debug, Display};
use num_traits::{ConstOne, ConstZero, Float, FromPrimitive, NumAssign, Signed};

/// Numeric type a [`Quantity`](crate::Quantity) can store its standard value in.
///
/// Implemented for the signed primitive integers and for `f32`/`f64`. Arithmetic, `abs` and the `ZERO`/`ONE`
/// constants come from `num-traits`.
pub trait Value:
    NumAssign + Signed + ConstZero + ConstOne + Copy + Default + PartialOrd + Debug + Display + 'static
{
    /// `self` raised to an integer power, or `None` when the result is not representable in `Self`.
    ///
    /// Integers reject negative exponents and overflow. Floats always succeed and follow IEEE-754.
    fn checked_powi(self, exponent: i32) -> Option<Self>;
}

/// Floating-point [`Value`], needed for unit prefixes, roots and fractional powers.
pub trait Real: Value + Float + FromPrimitive {
    /// Converts an `f64` constant, yielding NaN if it has no representation.
    #[inline]
    fn approx_from_f64(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }
}

macro_rules! impl_integer_value {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Value for $t {
                #[inline]
                fn checked_powi(self, exponent: i32) -> Option<Self> {
                    let exponent = usize::try_from(exponent).ok()?;
                    num_traits::checked_pow(self, exponent)
                }
            }
        )+
    };
}

impl_integer_value!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_value {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Value for $t {
                #[inline]
                fn checked_powi(self, exponent: i32) -> Option<Self> {
                    Some(Float::powi(self, exponent))
                }
            }

            impl Real for $t {}
        )+
    };
}

impl_float_value!(f32, f64);
