//! Decimal prefixes.

use crate::dimension::Dimension;
use crate::unit::LinearUnit;
use crate::value::Real;
use core::fmt::{Display, Formatter};

/// A decimal prefix that scales a unit up or down.
///
/// ```rust
/// use dimal_core::catalog::units::METERS;
/// use dimal_core::catalog::Prefix;
///
/// let km = METERS.prefixed(Prefix::Kilo);
/// assert_eq!(km.factor(), 1000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// 10¹
    Deca,
    /// 10²
    Hecto,
    /// 10³
    Kilo,
    /// 10⁶
    Mega,
    /// 10⁹
    Giga,
    /// 10⁻¹
    Deci,
    /// 10⁻²
    Centi,
    /// 10⁻³
    Milli,
    /// 10⁻⁶
    Micro,
    /// 10⁻⁹
    Nano,
}

impl Prefix {
    /// Every prefix, large ones first.
    pub const ALL: [Prefix; 10] = [
        Prefix::Deca,
        Prefix::Hecto,
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Deci,
        Prefix::Centi,
        Prefix::Milli,
        Prefix::Micro,
        Prefix::Nano,
    ];

    /// Multiplier applied to the unit's factor.
    pub const fn factor(&self) -> f64 {
        match self {
            Prefix::Deca => 1e1,
            Prefix::Hecto => 1e2,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
            Prefix::Deci => 1e-1,
            Prefix::Centi => 1e-2,
            Prefix::Milli => 1e-3,
            Prefix::Micro => 1e-6,
            Prefix::Nano => 1e-9,
        }
    }

    /// `true` for prefixes that make the unit larger.
    pub const fn scales_up(&self) -> bool {
        matches!(
            self,
            Prefix::Deca | Prefix::Hecto | Prefix::Kilo | Prefix::Mega | Prefix::Giga
        )
    }

    /// Lowercase prefix name, e.g. `"kilo"`.
    pub const fn name(&self) -> &'static str {
        match self {
            Prefix::Deca => "deca",
            Prefix::Hecto => "hecto",
            Prefix::Kilo => "kilo",
            Prefix::Mega => "mega",
            Prefix::Giga => "giga",
            Prefix::Deci => "deci",
            Prefix::Centi => "centi",
            Prefix::Milli => "milli",
            Prefix::Micro => "micro",
            Prefix::Nano => "nano",
        }
    }

    /// SI symbol, e.g. `"k"`.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Prefix::Deca => "da",
            Prefix::Hecto => "h",
            Prefix::Kilo => "k",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Deci => "d",
            Prefix::Centi => "c",
            Prefix::Milli => "m",
            Prefix::Micro => "µ",
            Prefix::Nano => "n",
        }
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl<D: Dimension, V: Real> LinearUnit<D, V> {
    /// The unit scaled by `prefix`.
    #[inline]
    pub fn prefixed(&self, prefix: Prefix) -> Self {
        self.scaled_up(V::approx_from_f64(prefix.factor()))
    }
}
