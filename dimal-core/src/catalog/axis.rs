//! The base axes every catalog dimension is built over.
//!
//! Order matters: [`Dims`](super::Dims) lists them as length, time, mass, angle, data, charge, temperature.

use dimal_derive::BaseDimension;

/// Spatial extent.
#[derive(BaseDimension)]
#[base(symbol = "L")]
pub enum Length {}

/// Duration.
#[derive(BaseDimension)]
#[base(symbol = "T")]
pub enum Time {}

/// Mass, with the kilogram as standard unit.
#[derive(BaseDimension)]
#[base(symbol = "M")]
pub enum Mass {}

/// Plane angle. Kept as its own axis so radians do not collapse into plain numbers.
#[derive(BaseDimension)]
#[base(symbol = "A")]
pub enum Angle {}

/// Amount of information.
#[derive(BaseDimension)]
#[base(symbol = "D")]
pub enum Data {}

/// Electric charge.
#[derive(BaseDimension)]
#[base(symbol = "Q")]
pub enum Charge {}

/// Thermodynamic temperature.
#[derive(BaseDimension)]
#[base(symbol = "K")]
pub enum Temperature {}
