//! Dimension-checked physical quantities.
//!
//! `dimal` is the user-facing crate. It re-exports the core types from `dimal-core` together with the predefined
//! catalog of axes, dimensions and units.
//!
//! - [`Quantity<D>`] is a displacement with dimension `D` (a length, a duration, a temperature difference).
//! - [`Absolute<D>`] is a point on the scale of `D` (a position, an instant, an absolute temperature).
//! - [`LinearUnit<D>`] converts user numbers to and from the shared standard representation.
//!
//! # Quick start
//!
//! ```rust
//! use dimal::catalog::{Length, Velocity};
//! use dimal::{Quantity, FEET, HOURS, KILOMETERS, METERS, SECONDS};
//!
//! let d: Quantity<Length> = FEET.apply(10.0);
//! assert!((d.get(METERS) - 3.048).abs() < 1e-12);
//!
//! let v: Quantity<Velocity> = KILOMETERS.apply(36.0) / HOURS.apply(1.0);
//! assert!((v.get(METERS / SECONDS) - 10.0).abs() < 1e-12);
//! ```
//!
//! Points and displacements:
//!
//! ```rust
//! use dimal::KELVIN;
//!
//! let freezing = KELVIN.absolute(273.15);
//! let warmer = freezing + KELVIN.apply(10.0);
//! assert!(((warmer - freezing).get(KELVIN) - 10.0).abs() < 1e-12);
//! ```
//!
//! Adding two points is rejected at compile time:
//!
//! ```compile_fail
//! use dimal::KELVIN;
//!
//! let _ = KELVIN.absolute(1.0) + KELVIN.absolute(2.0);
//! ```
//!
//! # Dimensions at runtime
//!
//! Every dimension lowers to a [`Signature`], which supports the same algebra with checked results:
//!
//! ```rust
//! use dimal::catalog::{Length, Time, Velocity};
//! use dimal::Signature;
//!
//! let v = Signature::of::<Length>().quotient(&Signature::of::<Time>()).unwrap();
//! assert_eq!(v, Signature::of::<Velocity>());
//! assert_eq!(v.to_string(), "L·T^-1");
//! ```
//!
//! # Naming
//!
//! [`Power`] at the crate root is the exponent operator on dimensions; `catalog::Power` is the physical dimension
//! (energy per time).
//!
//! # Feature flags
//!
//! - `std` (default): use `std` float math. Without it the crate is `no_std` + `alloc` and float math comes from the
//!   `libm` backend of `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimal_core::*;

/// Derive macro used by `dimal-core` to declare base axes.
///
/// This macro expands in terms of `crate::BaseDimension`, so it is intended for use inside `dimal-core` (or crates
/// exposing the same crate-root API). Downstream crates implement the trait by hand.
pub use dimal_derive::BaseDimension;

pub use dimal_core::catalog::units;
pub use dimal_core::catalog::units::*;
pub use dimal_core::catalog::Prefix;
