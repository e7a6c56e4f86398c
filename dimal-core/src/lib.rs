//! Core types for compile-time checked dimensional analysis.
//!
//! `dimal-core` models physical values by their *dimension* rather than by a particular unit:
//!
//! - A *dimension* is a type-level list of base axes with integer exponents ([`Factor`] / [`Unity`]). Products,
//!   quotients and rational powers of dimensions are computed by the compiler ([`Product`], [`Quotient`],
//!   [`Power`]).
//! - A [`Quantity<D, V>`] is a displacement, stored as one number in the *standard units* of `D`.
//! - An [`Absolute<D, V>`] is a point on the scale of `D`. It only supports the operations that make sense for
//!   positions.
//! - A [`LinearUnit<D, V>`] is the way in and out: `standard = user * factor`.
//! - [`Signature`] is the runtime image of a dimension, used for display, diagnostics and code that only learns the
//!   dimension at runtime.
//!
//! Most users should depend on `dimal` (the facade crate) unless they need direct access to these primitives.
//!
//! # Quick start
//!
//! ```rust
//! use dimal_core::catalog::units::{FEET, METERS, SECONDS};
//! use dimal_core::catalog::Velocity;
//! use dimal_core::Quantity;
//!
//! let d = FEET.apply(10.0);
//! assert!((d.get(METERS) - 3.048).abs() < 1e-12);
//!
//! let v: Quantity<Velocity> = METERS.apply(100.0) / SECONDS.apply(20.0);
//! assert_eq!(v.get(METERS / SECONDS), 5.0);
//! ```
//!
//! Invalid expressions are rejected at compile time:
//!
//! ```compile_fail
//! use dimal_core::catalog::units::{METERS, SECONDS};
//!
//! let _ = METERS.apply(1.0) < SECONDS.apply(1.0);
//! ```
//!
//! # What this crate does not try to solve
//!
//! - Offset units (degrees Celsius, gauge pressure). Linear factors only; use [`Absolute`] for points.
//! - Uncertainty or precision tracking.
//! - Parsing or serializing quantities.
//!
//! # `no_std`
//!
//! Disable default features to build `dimal-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimal-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! The crate still needs `alloc` for [`Signature`]. Floating-point math that isn't available in `core` comes from
//! `num-traits` and its `libm` backend.
//!
//! # Panics and errors
//!
//! Arithmetic operators never return `Result` and follow IEEE-754 behavior: dividing by a zero quantity yields
//! infinities or NaN. [`Quantity::checked_div`] and [`LinearUnit::try_from_factor`] report [`Error::DivisionByZero`]
//! instead. Integer storage has no infallible `powi`; [`Quantity::checked_powi`] and [`LinearUnit::checked_powi`]
//! reject negative or overflowing powers. The runtime [`Signature`] algebra returns [`Error`] for mismatched bases and non-integral exponents.
//!
//! Failures are reported through the `log` facade at `debug` (signature algebra) or `warn` (rejected unit factors).
//! No logger is installed by this crate.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod absolute;
mod dimension;
mod error;
mod quantity;
mod signature;
mod unit;
mod value;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use absolute::{to_quantity, Absolute};
pub use dimension::{
    is_scalar, BaseDimension, DimDiv, DimInv, DimMul, DimPow, Dimension, Dimensionless, Factor, Inverse, Power, Product,
    Quotient, Unity,
};
pub use error::{Error, Result};
pub use quantity::{to_absolute, Quantity};
pub use signature::{Axis, Signature};
pub use unit::LinearUnit;
pub use value::{Real, Value};

pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined axes, dimensions and units
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined axes, dimensions, prefixes and units.
///
/// Defined in `dimal-core` so the `BaseDimension` derive can name `crate::BaseDimension`.
pub mod catalog;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::units::{FEET, KELVIN, METERS, SECONDS};
    use crate::catalog::{Area, Length, Scalar, Temperature, Time, Velocity};
    use alloc::string::ToString;
    use approx::assert_relative_eq;
    use typenum::{N1, P1, P2, Z0};

    // ─────────────────────────────────────────────────────────────────────────
    // Test axes, independent from the catalog
    // ─────────────────────────────────────────────────────────────────────────

    pub enum Apples {}
    impl BaseDimension for Apples {
        const NAME: &'static str = "apples";
        const SYMBOL: &'static str = "Ap";
    }

    pub enum Pears {}
    impl BaseDimension for Pears {
        const NAME: &'static str = "pears";
        const SYMBOL: &'static str = "Pe";
    }

    type Fruit<A, P> = Factor<Apples, A, Factor<Pears, P, Unity>>;
    type ApplesPerPear = Fruit<P1, N1>;

    #[test]
    fn custom_axes_work_end_to_end() {
        let unit = LinearUnit::<Fruit<P1, Z0>>::standard();
        let per_pear = LinearUnit::<Fruit<Z0, P1>>::standard();
        let ratio: Quantity<ApplesPerPear> = unit.apply(6.0) / per_pear.apply(3.0);
        assert_eq!(ratio.standard(), 2.0);
        assert_eq!(ApplesPerPear::signature().to_string(), "Ap·Pe^-1");
    }

    #[test]
    fn ten_feet_in_meters() {
        assert_relative_eq!(FEET.apply(10.0).get(METERS), 3.048, max_relative = 1e-12);
    }

    #[test]
    fn meters_per_second_applied() {
        let speed: Quantity<Quotient<Length, Time>> = (METERS / SECONDS).apply(5.0);
        assert_eq!(speed.standard(), 5.0);
        assert_eq!(
            Signature::of::<Quotient<Length, Time>>(),
            Signature::of::<Velocity>()
        );
    }

    #[test]
    fn temperature_points_and_differences() {
        let a = KELVIN.absolute(273.15);
        let b = a + KELVIN.apply(10.0);
        assert_relative_eq!(b.get(KELVIN), 283.15, max_relative = 1e-12);
        let diff: Quantity<Temperature> = b - a;
        assert_relative_eq!(diff.get(KELVIN), 10.0, max_relative = 1e-12);
    }

    #[test]
    fn runtime_algebra_mirrors_types() {
        let l = Signature::of::<Length>();
        let t = Signature::of::<Time>();
        assert_eq!(l.quotient(&t).unwrap(), Signature::of::<Velocity>());
        assert_eq!(l.product(&l).unwrap(), Signature::of::<Area>());
        assert_eq!(Signature::of::<Area>().power(1, 2).unwrap(), l);
        assert!(Signature::of::<Length>().power(1, 2).is_err());
        assert!(Signature::of::<Scalar>().is_scalar());
    }

    #[test]
    fn runtime_rejects_mismatched_bases() {
        let fruit = ApplesPerPear::signature();
        let length = Signature::of::<Length>();
        assert!(matches!(
            fruit.product(&length),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(fruit.ensure_same(&length).is_err());
    }

    #[test]
    fn area_root_is_length() {
        let side: Quantity<Power<Area, P1, P2>> = (METERS.apply(4.0) * METERS.apply(4.0)).sqrt();
        let side: Quantity<Length> = side;
        assert_relative_eq!(side.get(METERS), 4.0, max_relative = 1e-12);
    }

    #[test]
    fn scalar_detection() {
        assert!(is_scalar::<Scalar>());
        assert!(is_scalar::<Quotient<Velocity, Velocity>>());
        assert!(!is_scalar::<Velocity>());
    }
}
