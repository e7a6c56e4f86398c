//! Points on a dimension's scale.
//!
//! An [`Absolute`] is a position (an absolute temperature, an instant, a location on an axis) as opposed to the
//! displacement a [`Quantity`] represents. Positions can be shifted by displacements and subtracted from each other;
//! they cannot be scaled, negated or summed together.
//!
//! ```compile_fail
//! use dimal_core::catalog::units::KELVIN;
//!
//! let _ = KELVIN.absolute(1.0) * KELVIN.absolute(2.0);
//! ```
//!
//! ```compile_fail
//! use dimal_core::catalog::units::KELVIN;
//!
//! let _ = KELVIN.absolute(1.0) / 2.0;
//! ```
//!
//! ```compile_fail
//! use dimal_core::catalog::units::UNITLESS;
//!
//! let raw: f64 = UNITLESS.absolute(1.0).into();
//! ```

use crate::dimension::{Dimension, Dimensionless};
use crate::quantity::Quantity;
use crate::unit::LinearUnit;
use crate::value::Value;
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// A point with dimension `D`, stored in standard units.
///
/// ```rust
/// use dimal_core::catalog::units::KELVIN;
///
/// let freezing = KELVIN.absolute(273.15);
/// let warmer = freezing + KELVIN.apply(10.0);
/// assert!((warmer.get(KELVIN) - 283.15).abs() < 1e-9);
/// assert!(((warmer - freezing).get(KELVIN) - 10.0).abs() < 1e-9);
/// ```
pub struct Absolute<D: Dimension, V: Value = f64> {
    standard: V,
    dimension: PhantomData<D>,
}

impl<D: Dimension, V: Value> Absolute<D, V> {
    /// Creates a point from a value in standard units.
    #[inline]
    pub const fn from_standard(standard: V) -> Self {
        Self {
            standard,
            dimension: PhantomData,
        }
    }

    /// The position in standard units.
    #[inline]
    pub const fn standard(&self) -> V {
        self.standard
    }

    /// Moves the point to a new position given in standard units.
    #[inline]
    pub fn set_standard(&mut self, standard: V) {
        self.standard = standard;
    }

    /// The position expressed in `unit`.
    #[inline]
    pub fn get(&self, unit: LinearUnit<D, V>) -> V {
        unit.extract_absolute(*self)
    }

    /// The displacement from the origin of the scale to this point.
    #[inline]
    pub fn to_quantity(self) -> Quantity<D, V> {
        Quantity::from_standard(self.standard)
    }

    /// Explicit conversion to another storage type.
    #[inline]
    pub fn cast<W: Value + From<V>>(self) -> Absolute<D, W> {
        Absolute::from_standard(W::from(self.standard))
    }
}

/// Converts an absolute into the quantity measured from the origin.
#[inline]
pub fn to_quantity<D: Dimension, V: Value>(absolute: Absolute<D, V>) -> Quantity<D, V> {
    absolute.to_quantity()
}

impl<D: Dimension, V: Value> Clone for Absolute<D, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension, V: Value> Copy for Absolute<D, V> {}

impl<D: Dimension, V: Value> Debug for Absolute<D, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Absolute")
            .field("standard", &self.standard)
            .field("dimension", &format_args!("{}", D::signature()))
            .finish()
    }
}

impl<D: Dimension, V: Value> Display for Absolute<D, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if D::IS_SCALAR {
            write!(f, "@{}", self.standard)
        } else {
            write!(f, "@{} {}", self.standard, D::signature())
        }
    }
}

impl<D: Dimension, V: Value> PartialEq for Absolute<D, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.standard == other.standard
    }
}

impl<D: Dimension, V: Value> PartialOrd for Absolute<D, V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.standard.partial_cmp(&other.standard)
    }
}

impl<D: Dimension, V: Value> Add<Quantity<D, V>> for Absolute<D, V> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<D, V>) -> Self {
        Self::from_standard(self.standard + rhs.standard())
    }
}

impl<D: Dimensionless, V: Value> Add<Absolute<D, V>> for Quantity<D, V> {
    type Output = Absolute<D, V>;
    #[inline]
    fn add(self, rhs: Absolute<D, V>) -> Absolute<D, V> {
        Absolute::from_standard(self.standard() + rhs.standard)
    }
}

impl<D: Dimension, V: Value> AddAssign<Quantity<D, V>> for Absolute<D, V> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<D, V>) {
        self.standard += rhs.standard();
    }
}

impl<D: Dimension, V: Value> Sub for Absolute<D, V> {
    type Output = Quantity<D, V>;
    #[inline]
    fn sub(self, rhs: Self) -> Quantity<D, V> {
        Quantity::from_standard(self.standard - rhs.standard)
    }
}

impl<D: Dimension, V: Value> Sub<Quantity<D, V>> for Absolute<D, V> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<D, V>) -> Self {
        Self::from_standard(self.standard - rhs.standard())
    }
}

impl<D: Dimension, V: Value> SubAssign<Quantity<D, V>> for Absolute<D, V> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<D, V>) {
        self.standard -= rhs.standard();
    }
}

impl_absolute_primitive_ops!(f32, f64, i8, i16, i32, i64, i128, isize);
