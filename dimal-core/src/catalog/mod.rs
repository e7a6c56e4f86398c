//! Predefined axes, dimensions, prefixes and units.
//!
//! Every catalog dimension is a [`Dims`] list over the same seven axes in the same order, so any two of them can be
//! multiplied, divided and compared. Dimensions built over a different axis list (for example with a custom
//! [`BaseDimension`](crate::BaseDimension)) do not mix with these.
//!
//! ```rust
//! use dimal_core::catalog::units::{KILOGRAMS, METERS, SECONDS};
//! use dimal_core::catalog::{Acceleration, Force};
//! use dimal_core::Quantity;
//!
//! let a: Quantity<Acceleration> = METERS.apply(9.81) / (SECONDS.apply(1.0) * SECONDS.apply(1.0));
//! let f: Quantity<Force> = KILOGRAMS.apply(2.0) * a;
//! assert!((f.standard() - 19.62).abs() < 1e-12);
//! ```
//!
//! The [`Power`] alias here is the physical dimension (energy per time). The exponent operator of the same name lives
//! at the crate root.

pub mod axis;
mod prefix;
pub mod units;

pub use prefix::Prefix;

use crate::dimension::{Factor, Product, Quotient, Unity};
use typenum::{N1, P1, Z0};

/// A dimension over the catalog axes with the given exponents.
pub type Dims<L, T, M, A, D, C, K> = Factor<
    axis::Length,
    L,
    Factor<
        axis::Time,
        T,
        Factor<
            axis::Mass,
            M,
            Factor<axis::Angle, A, Factor<axis::Data, D, Factor<axis::Charge, C, Factor<axis::Temperature, K, Unity>>>>,
        >,
    >,
>;

/// Pure number.
pub type Scalar = Dims<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Length.
pub type Length = Dims<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Time.
pub type Time = Dims<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Mass.
pub type Mass = Dims<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Plane angle.
pub type Angle = Dims<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Information.
pub type Data = Dims<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Electric charge.
pub type Charge = Dims<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Temperature.
pub type Temperature = Dims<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

/// L².
pub type Area = Product<Length, Length>;
/// L³.
pub type Volume = Product<Area, Length>;
/// T⁻¹.
pub type Frequency = Dims<Z0, N1, Z0, Z0, Z0, Z0, Z0>;
/// L·T⁻¹.
pub type Velocity = Quotient<Length, Time>;
/// L·T⁻².
pub type Acceleration = Quotient<Velocity, Time>;
/// L·T⁻³.
pub type Jerk = Quotient<Acceleration, Time>;
/// M·L·T⁻¹.
pub type Momentum = Product<Mass, Velocity>;
/// M·L·T⁻².
pub type Force = Product<Mass, Acceleration>;
/// M·L²·T⁻².
pub type Energy = Product<Force, Length>;
/// M·L²·T⁻³.
pub type Power = Quotient<Energy, Time>;
/// M·L⁻³.
pub type Density = Quotient<Mass, Volume>;
/// M·L⁻¹·T⁻².
pub type Pressure = Quotient<Force, Area>;
/// Q·T⁻¹.
pub type Current = Quotient<Charge, Time>;
