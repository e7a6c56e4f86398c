//! Linear units: the boundary between raw user numbers and standard values.

use crate::absolute::Absolute;
use crate::dimension::{DimDiv, DimMul, DimPow, Dimension, Power, Product, Quotient};
use crate::error::{Error, Result};
use crate::quantity::Quantity;
use crate::value::{Real, Value};
use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Div, Mul};
use typenum::{Integer, P1};

/// A unit of dimension `D`, defined by its conversion factor to the standard unit.
///
/// `standard = user * factor`. Units compose by multiplying and dividing factors, so `METERS / SECONDS` is the unit
/// of velocity whose factor is `1.0`:
///
/// ```rust
/// use dimal_core::catalog::units::{METERS, SECONDS};
/// use dimal_core::catalog::{Length, Time};
/// use dimal_core::{Quantity, Quotient};
///
/// let speed: Quantity<Quotient<Length, Time>> = (METERS / SECONDS).apply(5.0);
/// assert_eq!(speed.standard(), 5.0);
/// ```
///
/// # Invariants
///
/// - The factor is non-zero. [`from_factor`](Self::from_factor) trusts its argument so it can be used in `const`
///   items; [`try_from_factor`](Self::try_from_factor) checks it.
pub struct LinearUnit<D: Dimension, V: Value = f64> {
    factor: V,
    dimension: PhantomData<D>,
}

impl<D: Dimension, V: Value> LinearUnit<D, V> {
    /// Creates a unit from its factor to the standard unit.
    #[inline]
    pub const fn from_factor(factor: V) -> Self {
        Self {
            factor,
            dimension: PhantomData,
        }
    }

    /// The standard unit of `D` (factor one).
    #[inline]
    pub const fn standard() -> Self {
        Self::from_factor(V::ONE)
    }

    /// Conversion factor to the standard unit.
    #[inline]
    pub const fn factor(&self) -> V {
        self.factor
    }

    /// Wraps a user value in this unit as a [`Quantity`].
    #[inline]
    pub fn apply(&self, value: V) -> Quantity<D, V> {
        Quantity::from_standard(self.to_standard(value))
    }

    /// Wraps a user value in this unit as an [`Absolute`].
    #[inline]
    pub fn absolute(&self, value: V) -> Absolute<D, V> {
        Absolute::from_standard(self.to_standard(value))
    }

    /// User value to standard value.
    #[inline]
    pub fn to_standard(&self, value: V) -> V {
        value * self.factor
    }

    /// Standard value to user value.
    #[inline]
    pub fn from_standard(&self, standard: V) -> V {
        standard / self.factor
    }

    /// Reads a quantity in this unit.
    #[inline]
    pub fn extract(&self, quantity: Quantity<D, V>) -> V {
        self.from_standard(quantity.standard())
    }

    /// Reads an absolute in this unit.
    #[inline]
    pub fn extract_absolute(&self, absolute: Absolute<D, V>) -> V {
        self.from_standard(absolute.standard())
    }

    /// A unit `k` times larger.
    #[inline]
    pub fn scaled_up(&self, k: V) -> Self {
        Self::from_factor(self.factor * k)
    }

    /// A unit `k` times smaller.
    #[inline]
    pub fn scaled_down(&self, k: V) -> Self {
        Self::from_factor(self.factor / k)
    }

    /// The unit raised to the integer power `N`, checked against the storage type.
    ///
    /// Fails with [`Error::InvalidExponent`] when the factor cannot be raised to `N` (a negative power of an integer
    /// factor, or overflow) and with [`Error::DivisionByZero`] when the result underflows to zero.
    ///
    /// ```rust
    /// use dimal_core::catalog::Length;
    /// use dimal_core::typenum::{N1, P2};
    /// use dimal_core::LinearUnit;
    ///
    /// let double = LinearUnit::<Length, i32>::from_factor(2);
    /// assert_eq!(double.checked_powi::<P2>().unwrap().factor(), 4);
    /// assert!(double.checked_powi::<N1>().is_err());
    /// ```
    pub fn checked_powi<N: Integer>(&self) -> Result<LinearUnit<Power<D, N>, V>>
    where
        D: DimPow<N, P1>,
    {
        let Some(factor) = self.factor.checked_powi(N::I32) else {
            log::warn!("unit factor {} has no power {} in its storage type", self.factor, N::I32);
            return Err(Error::InvalidExponent {
                dimension: D::signature(),
                numerator: N::I32,
                denominator: 1,
            });
        };
        if factor == V::ZERO {
            log::warn!("power {} of unit factor {} underflows to zero", N::I32, self.factor);
            return Err(Error::DivisionByZero {
                context: "unit power",
            });
        }
        Ok(LinearUnit::from_factor(factor))
    }
}

impl<D: Dimension, V: Real> LinearUnit<D, V> {
    /// The unit raised to the integer power `N`.
    ///
    /// ```rust
    /// use dimal_core::catalog::units::CENTIMETERS;
    /// use dimal_core::typenum::P2;
    ///
    /// let square_cm = CENTIMETERS.powi::<P2>();
    /// assert!((square_cm.factor() - 1e-4).abs() < 1e-18);
    /// ```
    #[inline]
    pub fn powi<N: Integer>(&self) -> LinearUnit<Power<D, N>, V>
    where
        D: DimPow<N, P1>,
    {
        LinearUnit::from_factor(self.factor.powi(N::I32))
    }

    /// Creates a unit after checking the factor.
    ///
    /// Zero yields [`Error::DivisionByZero`]; infinities and NaN yield [`Error::UnsupportedOperation`].
    ///
    /// ```rust
    /// use dimal_core::catalog::Length;
    /// use dimal_core::{Error, LinearUnit};
    ///
    /// assert!(LinearUnit::<Length>::try_from_factor(0.3048).is_ok());
    /// assert!(matches!(
    ///     LinearUnit::<Length>::try_from_factor(0.0),
    ///     Err(Error::DivisionByZero { .. })
    /// ));
    /// ```
    pub fn try_from_factor(factor: V) -> Result<Self> {
        if factor == V::ZERO {
            log::warn!("rejecting zero factor for a unit of {}", D::signature());
            return Err(Error::DivisionByZero {
                context: "unit factor",
            });
        }
        if !factor.is_finite() {
            log::warn!("rejecting factor {} for a unit of {}", factor, D::signature());
            return Err(Error::UnsupportedOperation {
                operation: "non-finite unit factor",
                dimension: D::signature(),
            });
        }
        Ok(Self::from_factor(factor))
    }
}

impl<D: Dimension, V: Value> Clone for LinearUnit<D, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension, V: Value> Copy for LinearUnit<D, V> {}

impl<D: Dimension, V: Value> Default for LinearUnit<D, V> {
    #[inline]
    fn default() -> Self {
        Self::standard()
    }
}

impl<D: Dimension, V: Value> PartialEq for LinearUnit<D, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.factor == other.factor
    }
}

impl<D: Dimension, V: Value> Debug for LinearUnit<D, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearUnit")
            .field("factor", &self.factor)
            .field("dimension", &format_args!("{}", D::signature()))
            .finish()
    }
}

impl<L, R, V> Mul<LinearUnit<R, V>> for LinearUnit<L, V>
where
    L: DimMul<R>,
    R: Dimension,
    V: Value,
{
    type Output = LinearUnit<Product<L, R>, V>;
    #[inline]
    fn mul(self, rhs: LinearUnit<R, V>) -> Self::Output {
        LinearUnit::from_factor(self.factor * rhs.factor)
    }
}

impl<L, R, V> Div<LinearUnit<R, V>> for LinearUnit<L, V>
where
    L: DimDiv<R>,
    R: Dimension,
    V: Value,
{
    type Output = LinearUnit<Quotient<L, R>, V>;
    #[inline]
    fn div(self, rhs: LinearUnit<R, V>) -> Self::Output {
        LinearUnit::from_factor(self.factor / rhs.factor)
    }
}
