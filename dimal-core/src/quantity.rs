//! Quantity type and its implementations.

use crate::absolute::Absolute;
use crate::dimension::{DimDiv, DimMul, DimPow, Dimension, Dimensionless, Power, Product, Quotient};
use crate::error::{Error, Result};
use crate::unit::LinearUnit;
use crate::value::{Real, Value};
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use typenum::{Integer, NonZero, P1, P2, P3};

/// A relative measurement (a displacement) with dimension `D`.
///
/// `Quantity<D, V>` stores one value of type `V` expressed in the *standard units* of `D`, together with phantom
/// type information about `D`. Adding, subtracting and comparing require the same dimension; multiplying and
/// dividing combine dimensions through the type-level algebra.
///
/// # Examples
///
/// ```rust
/// use dimal_core::catalog::units::{METERS, SECONDS};
/// use dimal_core::catalog::{Length, Velocity};
/// use dimal_core::Quantity;
///
/// let d: Quantity<Length> = METERS.apply(100.0);
/// let t = SECONDS.apply(20.0);
/// let v: Quantity<Velocity> = d / t;
/// assert_eq!(v.standard(), 5.0);
/// ```
///
/// Mixing dimensions in a sum does not compile:
///
/// ```compile_fail
/// use dimal_core::catalog::units::{METERS, SECONDS};
///
/// let _ = METERS.apply(1.0) + SECONDS.apply(1.0);
/// ```
///
/// Nor does reading a raw number out of a non-scalar quantity without a unit:
///
/// ```compile_fail
/// use dimal_core::catalog::units::METERS;
///
/// let raw: f64 = METERS.apply(1.0).into();
/// ```
pub struct Quantity<D: Dimension, V: Value = f64> {
    standard: V,
    dimension: PhantomData<D>,
}

impl<D: Dimension, V: Value> Quantity<D, V> {
    /// Creates a quantity from a value already expressed in standard units.
    ///
    /// ```rust
    /// use dimal_core::catalog::Length;
    /// use dimal_core::Quantity;
    ///
    /// let d = Quantity::<Length>::from_standard(3.0);
    /// assert_eq!(d.standard(), 3.0);
    /// ```
    #[inline]
    pub const fn from_standard(standard: V) -> Self {
        Self {
            standard,
            dimension: PhantomData,
        }
    }

    /// The value in standard units.
    ///
    /// Prefer [`get`](Self::get) with an explicit unit when the number leaves the typed world.
    #[inline]
    pub const fn standard(&self) -> V {
        self.standard
    }

    /// Overwrites the value in standard units.
    #[inline]
    pub fn set_standard(&mut self, standard: V) {
        self.standard = standard;
    }

    /// The value expressed in `unit`.
    ///
    /// ```rust
    /// use dimal_core::catalog::units::{FEET, METERS};
    ///
    /// let d = FEET.apply(10.0);
    /// assert!((d.get(METERS) - 3.048).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn get(&self, unit: LinearUnit<D, V>) -> V {
        unit.extract(*self)
    }

    /// Returns the raw value when `D` is scalar and [`Error::UnsupportedOperation`] otherwise.
    ///
    /// For code that already knows `D` is dimensionless, [`value`](Self::value) and `From` are infallible.
    pub fn try_into_raw(self) -> Result<V> {
        if !D::IS_SCALAR {
            D::signature().ensure_scalar("conversion to a raw number")?;
        }
        Ok(self.standard)
    }

    /// Explicit conversion to another storage type.
    #[inline]
    pub fn cast<W: Value + From<V>>(self) -> Quantity<D, W> {
        Quantity::from_standard(W::from(self.standard))
    }

    /// Reinterprets this displacement as a point on the same scale.
    #[inline]
    pub fn to_absolute(self) -> Absolute<D, V> {
        Absolute::from_standard(self.standard)
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_standard(self.standard.abs())
    }

    /// The smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.standard < self.standard {
            other
        } else {
            self
        }
    }

    /// The larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.standard > self.standard {
            other
        } else {
            self
        }
    }

    /// Raises the quantity to the integer power `N`, failing when the result does not fit the storage type.
    ///
    /// Integer storage rejects negative powers and overflow with [`Error::InvalidExponent`]. Float storage always
    /// succeeds; [`powi`](Self::powi) is the infallible form.
    ///
    /// ```rust
    /// use dimal_core::catalog::{Area, Length};
    /// use dimal_core::typenum::{N1, P2};
    /// use dimal_core::Quantity;
    ///
    /// let side = Quantity::<Length, i32>::from_standard(3);
    /// let area: Quantity<Area, i32> = side.checked_powi::<P2>().unwrap();
    /// assert_eq!(area.standard(), 9);
    /// assert!(side.checked_powi::<N1>().is_err());
    /// ```
    pub fn checked_powi<N: Integer>(self) -> Result<Quantity<Power<D, N>, V>>
    where
        D: DimPow<N, P1>,
    {
        match self.standard.checked_powi(N::I32) {
            Some(value) => Ok(Quantity::from_standard(value)),
            None => {
                log::debug!("{} does not fit the power {} of {}", self.standard, N::I32, D::signature());
                Err(Error::InvalidExponent {
                    dimension: D::signature(),
                    numerator: N::I32,
                    denominator: 1,
                })
            }
        }
    }

    /// Division that reports a zero divisor instead of propagating it.
    ///
    /// ```rust
    /// use dimal_core::catalog::units::{METERS, SECONDS};
    ///
    /// assert!(METERS.apply(1.0).checked_div(SECONDS.apply(0.0)).is_err());
    /// ```
    pub fn checked_div<R: Dimension>(self, rhs: Quantity<R, V>) -> Result<Quantity<Quotient<D, R>, V>>
    where
        D: DimDiv<R>,
    {
        if rhs.standard == V::ZERO {
            log::debug!("checked division of {} by a zero {}", D::signature(), R::signature());
            return Err(Error::DivisionByZero {
                context: "quantity division",
            });
        }
        Ok(Quantity::from_standard(self.standard / rhs.standard))
    }
}

impl<D: Dimensionless, V: Value> Quantity<D, V> {
    /// The raw value of a dimensionless quantity.
    ///
    /// ```rust
    /// use dimal_core::catalog::units::METERS;
    ///
    /// let ratio = METERS.apply(3.0) / METERS.apply(2.0);
    /// assert_eq!(ratio.value(), 1.5);
    /// ```
    #[inline]
    pub const fn value(&self) -> V {
        self.standard
    }
}

impl<D: Dimension, V: Real> Quantity<D, V> {
    /// Raises the quantity to the integer power `N`; the dimension is raised along with it.
    ///
    /// ```rust
    /// use dimal_core::catalog::units::METERS;
    /// use dimal_core::catalog::Volume;
    /// use dimal_core::typenum::P3;
    /// use dimal_core::Quantity;
    ///
    /// let v: Quantity<Volume> = METERS.apply(2.0).powi::<P3>();
    /// assert_eq!(v.standard(), 8.0);
    /// ```
    ///
    /// Integer storage goes through [`checked_powi`](Self::checked_powi) instead:
    ///
    /// ```compile_fail
    /// use dimal_core::catalog::Length;
    /// use dimal_core::typenum::N1;
    /// use dimal_core::Quantity;
    ///
    /// let _ = Quantity::<Length, i32>::from_standard(2).powi::<N1>();
    /// ```
    #[inline]
    pub fn powi<N: Integer>(self) -> Quantity<Power<D, N>, V>
    where
        D: DimPow<N, P1>,
    {
        Quantity::from_standard(self.standard.powi(N::I32))
    }

    /// Square root; every exponent of `D` is halved.
    ///
    /// ```rust
    /// use dimal_core::catalog::units::METERS;
    /// use dimal_core::catalog::Length;
    /// use dimal_core::Quantity;
    ///
    /// let area = METERS.apply(3.0) * METERS.apply(12.0);
    /// let side: Quantity<Length> = area.sqrt();
    /// assert!((side.standard() - 6.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<Power<D, P1, P2>, V>
    where
        D: DimPow<P1, P2>,
    {
        Quantity::from_standard(self.standard.sqrt())
    }

    /// Cube root; every exponent of `D` is divided by three.
    #[inline]
    pub fn cbrt(self) -> Quantity<Power<D, P1, P3>, V>
    where
        D: DimPow<P1, P3>,
    {
        Quantity::from_standard(self.standard.cbrt())
    }

    /// Raises the quantity to the rational power `N / Den`.
    #[inline]
    pub fn powf<N: Integer, Den: Integer + NonZero>(self) -> Quantity<Power<D, N, Den>, V>
    where
        D: DimPow<N, Den>,
    {
        let exponent = V::approx_from_f64(N::I32 as f64) / V::approx_from_f64(Den::I32 as f64);
        Quantity::from_standard(self.standard.powf(exponent))
    }
}

/// Converts a quantity into an absolute with the same standard value.
#[inline]
pub fn to_absolute<D: Dimension, V: Value>(quantity: Quantity<D, V>) -> Absolute<D, V> {
    quantity.to_absolute()
}

// ─────────────────────────────────────────────────────────────────────────────
// Value semantics
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, V: Value> Clone for Quantity<D, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension, V: Value> Copy for Quantity<D, V> {}

impl<D: Dimension, V: Value> Default for Quantity<D, V> {
    #[inline]
    fn default() -> Self {
        Self::from_standard(V::ZERO)
    }
}

impl<D: Dimension, V: Value> Debug for Quantity<D, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quantity")
            .field("standard", &self.standard)
            .field("dimension", &format_args!("{}", D::signature()))
            .finish()
    }
}

impl<D: Dimension, V: Value> Display for Quantity<D, V> {
    /// `<standard value> <signature>`, or just the value when dimensionless.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if D::IS_SCALAR {
            write!(f, "{}", self.standard)
        } else {
            write!(f, "{} {}", self.standard, D::signature())
        }
    }
}

impl<D: Dimensionless, V: Value> From<V> for Quantity<D, V> {
    #[inline]
    fn from(value: V) -> Self {
        Self::from_standard(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, V: Value> PartialEq for Quantity<D, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.standard == other.standard
    }
}

impl<D: Dimension, V: Value> PartialOrd for Quantity<D, V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.standard.partial_cmp(&other.standard)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, V: Value> Add for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.standard + rhs.standard)
    }
}

impl<D: Dimension, V: Value> AddAssign for Quantity<D, V> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.standard += rhs.standard;
    }
}

impl<D: Dimension, V: Value> Sub for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.standard - rhs.standard)
    }
}

impl<D: Dimension, V: Value> SubAssign for Quantity<D, V> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.standard -= rhs.standard;
    }
}

impl<D: Dimension, V: Value> Neg for Quantity<D, V> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_standard(-self.standard)
    }
}

impl<L, R, V> Mul<Quantity<R, V>> for Quantity<L, V>
where
    L: DimMul<R>,
    R: Dimension,
    V: Value,
{
    type Output = Quantity<Product<L, R>, V>;
    #[inline]
    fn mul(self, rhs: Quantity<R, V>) -> Self::Output {
        Quantity::from_standard(self.standard * rhs.standard)
    }
}

impl<L, R, V> Div<Quantity<R, V>> for Quantity<L, V>
where
    L: DimDiv<R>,
    R: Dimension,
    V: Value,
{
    type Output = Quantity<Quotient<L, R>, V>;
    #[inline]
    fn div(self, rhs: Quantity<R, V>) -> Self::Output {
        Quantity::from_standard(self.standard / rhs.standard)
    }
}

impl<D: Dimension, V: Value> MulAssign<Quantity<D::Scalar, V>> for Quantity<D, V> {
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity<D::Scalar, V>) {
        self.standard *= rhs.standard;
    }
}

impl<D: Dimension, V: Value> DivAssign<Quantity<D::Scalar, V>> for Quantity<D, V> {
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<D::Scalar, V>) {
        self.standard /= rhs.standard;
    }
}

impl<D: Dimension, V: Value> Sum for Quantity<D, V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| acc + q)
    }
}

impl_quantity_primitive_ops!(f32, f64, i8, i16, i32, i64, i128, isize);
