//! Named units over the catalog dimensions.
//!
//! The standard unit of each dimension is SI-like: metre, second, kilogram, radian, byte, coulomb, kelvin. Every
//! other unit is its factor to that standard.
//!
//! ```rust
//! use dimal_core::catalog::units::{DAYS, HOURS, MONTHS, YEARS};
//!
//! assert_eq!(DAYS.apply(1.0).get(HOURS), 24.0);
//! assert_eq!(MONTHS.apply(12.0), YEARS.apply(1.0));
//! ```

use super::{
    Acceleration, Angle, Area, Charge, Current, Data, Energy, Force, Frequency, Length, Mass, Power, Prefix,
    Pressure, Scalar, Temperature, Time, Velocity, Volume,
};
use crate::unit::LinearUnit;
use core::f64::consts::PI;

/// Factor one over the pure numbers.
pub const UNITLESS: LinearUnit<Scalar> = LinearUnit::from_factor(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Length
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (standard).
pub const METERS: LinearUnit<Length> = LinearUnit::from_factor(1.0);
/// Kilometre.
pub const KILOMETERS: LinearUnit<Length> = LinearUnit::from_factor(Prefix::Kilo.factor());
/// Decimetre.
pub const DECIMETERS: LinearUnit<Length> = LinearUnit::from_factor(Prefix::Deci.factor());
/// Centimetre.
pub const CENTIMETERS: LinearUnit<Length> = LinearUnit::from_factor(Prefix::Centi.factor());
/// Millimetre.
pub const MILLIMETERS: LinearUnit<Length> = LinearUnit::from_factor(Prefix::Milli.factor());
/// Micrometre.
pub const MICROMETERS: LinearUnit<Length> = LinearUnit::from_factor(Prefix::Micro.factor());
/// Nanometre.
pub const NANOMETERS: LinearUnit<Length> = LinearUnit::from_factor(Prefix::Nano.factor());
/// International inch, exactly 0.0254 m.
pub const INCHES: LinearUnit<Length> = LinearUnit::from_factor(0.0254);
/// International foot, 12 in.
pub const FEET: LinearUnit<Length> = LinearUnit::from_factor(0.3048);
/// Yard, 3 ft.
pub const YARDS: LinearUnit<Length> = LinearUnit::from_factor(0.9144);
/// Statute mile, 5280 ft.
pub const MILES: LinearUnit<Length> = LinearUnit::from_factor(1609.344);

/// Square metre.
pub const SQUARE_METERS: LinearUnit<Area> = LinearUnit::from_factor(1.0);
/// Cubic metre.
pub const CUBIC_METERS: LinearUnit<Volume> = LinearUnit::from_factor(1.0);
/// Litre, 10⁻³ m³.
pub const LITERS: LinearUnit<Volume> = LinearUnit::from_factor(1e-3);

// ─────────────────────────────────────────────────────────────────────────────
// Time
// ─────────────────────────────────────────────────────────────────────────────

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// Second (standard).
pub const SECONDS: LinearUnit<Time> = LinearUnit::from_factor(1.0);
/// Millisecond.
pub const MILLISECONDS: LinearUnit<Time> = LinearUnit::from_factor(Prefix::Milli.factor());
/// Microsecond.
pub const MICROSECONDS: LinearUnit<Time> = LinearUnit::from_factor(Prefix::Micro.factor());
/// Nanosecond.
pub const NANOSECONDS: LinearUnit<Time> = LinearUnit::from_factor(Prefix::Nano.factor());
/// Minute.
pub const MINUTES: LinearUnit<Time> = LinearUnit::from_factor(60.0);
/// Hour.
pub const HOURS: LinearUnit<Time> = LinearUnit::from_factor(3_600.0);
/// Day of 86 400 s.
pub const DAYS: LinearUnit<Time> = LinearUnit::from_factor(SECONDS_PER_DAY);
/// Week of 7 days.
pub const WEEKS: LinearUnit<Time> = LinearUnit::from_factor(7.0 * SECONDS_PER_DAY);
/// Julian year of 365.25 days.
pub const YEARS: LinearUnit<Time> = LinearUnit::from_factor(SECONDS_PER_YEAR);
/// A twelfth of a Julian year.
pub const MONTHS: LinearUnit<Time> = LinearUnit::from_factor(SECONDS_PER_YEAR / 12.0);

/// Hertz, one per second.
pub const HERTZ: LinearUnit<Frequency> = LinearUnit::from_factor(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Mass
// ─────────────────────────────────────────────────────────────────────────────

const KILOGRAMS_PER_GRAM: f64 = 1e-3;

/// Gram.
pub const GRAMS: LinearUnit<Mass> = LinearUnit::from_factor(KILOGRAMS_PER_GRAM);
/// Kilogram (standard).
pub const KILOGRAMS: LinearUnit<Mass> = LinearUnit::from_factor(1.0);
/// Milligram.
pub const MILLIGRAMS: LinearUnit<Mass> = LinearUnit::from_factor(Prefix::Milli.factor() * KILOGRAMS_PER_GRAM);
/// Microgram.
pub const MICROGRAMS: LinearUnit<Mass> = LinearUnit::from_factor(Prefix::Micro.factor() * KILOGRAMS_PER_GRAM);
/// Tonne, 1000 kg.
pub const TONNES: LinearUnit<Mass> = LinearUnit::from_factor(1_000.0);

// ─────────────────────────────────────────────────────────────────────────────
// Angle, data, charge, temperature
// ─────────────────────────────────────────────────────────────────────────────

/// Radian (standard).
pub const RADIANS: LinearUnit<Angle> = LinearUnit::from_factor(1.0);
/// Degree, π/180 rad.
pub const DEGREES: LinearUnit<Angle> = LinearUnit::from_factor(PI / 180.0);

/// Byte (standard).
pub const BYTES: LinearUnit<Data> = LinearUnit::from_factor(1.0);
/// Bit, an eighth of a byte.
pub const BITS: LinearUnit<Data> = LinearUnit::from_factor(0.125);
/// Kilobyte (decimal).
pub const KILOBYTES: LinearUnit<Data> = LinearUnit::from_factor(Prefix::Kilo.factor());
/// Megabyte (decimal).
pub const MEGABYTES: LinearUnit<Data> = LinearUnit::from_factor(Prefix::Mega.factor());
/// Gigabyte (decimal).
pub const GIGABYTES: LinearUnit<Data> = LinearUnit::from_factor(Prefix::Giga.factor());

/// Coulomb (standard).
pub const COULOMBS: LinearUnit<Charge> = LinearUnit::from_factor(1.0);
/// Ampere, one coulomb per second.
pub const AMPERES: LinearUnit<Current> = LinearUnit::from_factor(1.0);

/// Kelvin (standard).
pub const KELVIN: LinearUnit<Temperature> = LinearUnit::from_factor(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Mechanics
// ─────────────────────────────────────────────────────────────────────────────

/// Metres per second.
pub const METERS_PER_SECOND: LinearUnit<Velocity> = LinearUnit::from_factor(1.0);
/// Kilometres per hour.
pub const KILOMETERS_PER_HOUR: LinearUnit<Velocity> = LinearUnit::from_factor(1_000.0 / 3_600.0);
/// Standard gravity, 9.806 65 m/s².
pub const STANDARD_GRAVITY: LinearUnit<Acceleration> = LinearUnit::from_factor(9.806_65);
/// Newton.
pub const NEWTONS: LinearUnit<Force> = LinearUnit::from_factor(1.0);
/// Joule.
pub const JOULES: LinearUnit<Energy> = LinearUnit::from_factor(1.0);
/// Kilowatt-hour.
pub const KILOWATT_HOURS: LinearUnit<Energy> = LinearUnit::from_factor(3.6e6);
/// Watt.
pub const WATTS: LinearUnit<Power> = LinearUnit::from_factor(1.0);
/// Pascal.
pub const PASCALS: LinearUnit<Pressure> = LinearUnit::from_factor(1.0);
