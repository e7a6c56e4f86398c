//! Runtime view of a dimension: the ordered exponent vector.
//!
//! A [`Signature`] is what a [`Dimension`](crate::Dimension) type looks like once it is lowered to data. The
//! type-level algebra never needs it, but it is handy for display, diagnostics and for checking the algebra's
//! laws on values. Unlike the type-level operations, combining signatures can fail and does so with an
//! [`Error`](crate::Error).

use crate::dimension::BaseDimension;
use crate::error::{Error, Result};
use alloc::vec::Vec;
use core::fmt::{Display, Formatter};

/// One base axis of a [`Signature`] together with its exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Axis {
    /// Axis name, e.g. `"length"`.
    pub name: &'static str,
    /// Display symbol, e.g. `"L"`.
    pub symbol: &'static str,
    /// Integer exponent.
    pub exponent: i32,
}

impl Axis {
    /// Creates an axis entry.
    pub const fn new(name: &'static str, symbol: &'static str, exponent: i32) -> Self {
        Self {
            name,
            symbol,
            exponent,
        }
    }

    /// Creates the entry for base dimension `B`.
    ///
    /// ```rust
    /// use dimal_core::catalog::axis;
    /// use dimal_core::Axis;
    ///
    /// let a = Axis::of::<axis::Length>(2);
    /// assert_eq!((a.name, a.symbol, a.exponent), ("length", "L", 2));
    /// ```
    pub const fn of<B: BaseDimension>(exponent: i32) -> Self {
        Self::new(B::NAME, B::SYMBOL, exponent)
    }

    fn same_base(&self, other: &Axis) -> bool {
        self.name == other.name && self.symbol == other.symbol
    }

    fn with_exponent(self, exponent: i32) -> Self {
        Self { exponent, ..self }
    }
}

/// Ordered exponent vector over a list of base dimensions.
///
/// Two signatures are equal iff they list the same bases in the same order with the same exponents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    axes: Vec<Axis>,
}

impl Signature {
    /// Wraps an ordered list of axes.
    pub fn from_axes(axes: Vec<Axis>) -> Self {
        Self { axes }
    }

    /// Signature of the dimension type `D`.
    ///
    /// ```rust
    /// use dimal_core::catalog::Velocity;
    /// use dimal_core::Signature;
    ///
    /// let v = Signature::of::<Velocity>();
    /// assert_eq!(v.exponent_of("length"), Some(1));
    /// assert_eq!(v.exponent_of("time"), Some(-1));
    /// ```
    pub fn of<D: crate::Dimension>() -> Self {
        D::signature()
    }

    /// The axes in declaration order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of base dimensions.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// `true` when no base dimension is declared at all.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Exponent of the axis called `name`, if it is part of this signature.
    pub fn exponent_of(&self, name: &str) -> Option<i32> {
        self.axes
            .iter()
            .find(|axis| axis.name == name)
            .map(|axis| axis.exponent)
    }

    /// `true` iff every exponent is zero.
    pub fn is_scalar(&self) -> bool {
        self.axes.iter().all(|axis| axis.exponent == 0)
    }

    /// The all-zero signature over the same bases.
    pub fn scalar(&self) -> Signature {
        self.map_exponents(|_| 0)
    }

    /// `true` iff both signatures list the same bases in the same order.
    pub fn same_bases(&self, other: &Signature) -> bool {
        self.axes.len() == other.axes.len()
            && self
                .axes
                .iter()
                .zip(other.axes.iter())
                .all(|(l, r)| l.same_base(r))
    }

    /// Fails unless `other` is exactly the same dimension.
    pub fn ensure_same(&self, other: &Signature) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(self.mismatch(other))
        }
    }

    /// Fails with [`Error::UnsupportedOperation`] unless this signature is scalar.
    pub fn ensure_scalar(&self, operation: &'static str) -> Result<()> {
        if self.is_scalar() {
            Ok(())
        } else {
            log::debug!("rejecting {} on non-scalar dimension {}", operation, self);
            Err(Error::UnsupportedOperation {
                operation,
                dimension: self.clone(),
            })
        }
    }

    /// Pointwise sum of exponents.
    ///
    /// Fails with [`Error::DimensionMismatch`] for different bases and [`Error::ExponentOverflow`] when an exponent
    /// leaves the `i32` range.
    ///
    /// ```rust
    /// use dimal_core::catalog::{Length, Time};
    /// use dimal_core::Signature;
    ///
    /// let lt = Signature::of::<Length>().product(&Signature::of::<Time>()).unwrap();
    /// assert_eq!(lt.to_string(), "L·T");
    /// ```
    pub fn product(&self, other: &Signature) -> Result<Signature> {
        if !self.same_bases(other) {
            return Err(self.mismatch(other));
        }

        let mut axes = Vec::with_capacity(self.axes.len());
        for (l, r) in self.axes.iter().zip(other.axes.iter()) {
            let exponent = l.exponent.checked_add(r.exponent).ok_or_else(|| {
                log::debug!("exponent overflow multiplying {} by {}", self, other);
                Error::ExponentOverflow {
                    left: self.clone(),
                    right: other.clone(),
                }
            })?;
            axes.push(l.with_exponent(exponent));
        }
        Ok(Signature { axes })
    }

    /// Negates every exponent.
    pub fn inverse(&self) -> Result<Signature> {
        self.power(-1, 1)
    }

    /// `self * other⁻¹`.
    pub fn quotient(&self, other: &Signature) -> Result<Signature> {
        self.product(&other.inverse()?)
    }

    /// Raises the dimension to the rational power `numerator / denominator`.
    ///
    /// Every scaled exponent must be an exact integer; nothing is truncated.
    ///
    /// ```rust
    /// use dimal_core::catalog::Area;
    /// use dimal_core::{Error, Signature};
    ///
    /// let area = Signature::of::<Area>();
    /// assert_eq!(area.power(1, 2).unwrap().exponent_of("length"), Some(1));
    /// assert!(matches!(area.power(1, 3), Err(Error::InvalidExponent { .. })));
    /// ```
    pub fn power(&self, numerator: i32, denominator: i32) -> Result<Signature> {
        let invalid = || {
            log::debug!(
                "cannot raise {} to the power {}/{}",
                self,
                numerator,
                denominator
            );
            Error::InvalidExponent {
                dimension: self.clone(),
                numerator,
                denominator,
            }
        };

        if denominator == 0 {
            return Err(invalid());
        }

        let mut axes = Vec::with_capacity(self.axes.len());
        for axis in &self.axes {
            let scaled = axis.exponent.checked_mul(numerator).ok_or_else(invalid)?;
            if scaled.checked_rem(denominator).ok_or_else(invalid)? != 0 {
                return Err(invalid());
            }
            let exponent = scaled.checked_div(denominator).ok_or_else(invalid)?;
            axes.push(axis.with_exponent(exponent));
        }
        Ok(Signature { axes })
    }

    fn map_exponents(&self, f: impl Fn(i32) -> i32) -> Signature {
        Signature {
            axes: self
                .axes
                .iter()
                .map(|axis| axis.with_exponent(f(axis.exponent)))
                .collect(),
        }
    }

    fn mismatch(&self, other: &Signature) -> Error {
        log::debug!("dimension mismatch between {} and {}", self, other);
        Error::DimensionMismatch {
            left: self.clone(),
            right: other.clone(),
        }
    }
}

impl Display for Signature {
    /// Formats non-zero exponents as `L·T^-1`; a scalar signature prints as `1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for axis in self.axes.iter().filter(|axis| axis.exponent != 0) {
            if !first {
                f.write_str("·")?;
            }
            first = false;
            if axis.exponent == 1 {
                write!(f, "{}", axis.symbol)?;
            } else {
                write!(f, "{}^{}", axis.symbol, axis.exponent)?;
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use proptest::prelude::*;

    fn sig(exponents: &[i32]) -> Signature {
        const BASES: [(&str, &str); 3] = [("length", "L"), ("time", "T"), ("mass", "M")];
        Signature::from_axes(
            BASES
                .iter()
                .zip(exponents)
                .map(|(&(name, symbol), &e)| Axis::new(name, symbol, e))
                .collect(),
        )
    }

    #[test]
    fn display_formats() {
        assert_eq!(sig(&[1, -1, 0]).to_string(), "L·T^-1");
        assert_eq!(sig(&[0, 0, 0]).to_string(), "1");
        assert_eq!(sig(&[2, 0, 1]).to_string(), "L^2·M");
    }

    #[test]
    fn scalar_checks() {
        assert!(sig(&[0, 0, 0]).is_scalar());
        assert!(!sig(&[0, 1, 0]).is_scalar());
        assert_eq!(sig(&[3, -2, 1]).scalar(), sig(&[0, 0, 0]));
        assert!(sig(&[0, 0, 0]).ensure_scalar("conversion").is_ok());
        assert!(matches!(
            sig(&[1, 0, 0]).ensure_scalar("conversion"),
            Err(Error::UnsupportedOperation {
                operation: "conversion",
                ..
            })
        ));
    }

    #[test]
    fn product_rejects_different_orderings() {
        let ordered = Signature::from_axes(vec![
            Axis::new("length", "L", 1),
            Axis::new("time", "T", 0),
        ]);
        let swapped = Signature::from_axes(vec![
            Axis::new("time", "T", 1),
            Axis::new("length", "L", 0),
        ]);
        let err = ordered.product(&swapped).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
        assert!(err.to_string().contains("dimension mismatch"));
    }

    #[test]
    fn product_rejects_different_arity() {
        let short = Signature::from_axes(vec![Axis::new("length", "L", 1)]);
        assert!(short.product(&sig(&[1, 0, 0])).is_err());
    }

    #[test]
    fn ensure_same_distinguishes_exponents() {
        assert!(sig(&[1, -1, 0]).ensure_same(&sig(&[1, -1, 0])).is_ok());
        assert!(sig(&[1, -1, 0]).ensure_same(&sig(&[1, -2, 0])).is_err());
    }

    #[test]
    fn power_requires_integral_result() {
        assert_eq!(sig(&[2, -4, 0]).power(1, 2).unwrap(), sig(&[1, -2, 0]));
        assert_eq!(sig(&[3, 0, 0]).power(2, 3).unwrap(), sig(&[2, 0, 0]));
        assert!(sig(&[1, 0, 0]).power(1, 2).is_err());
        assert!(sig(&[1, 0, 0]).power(1, 0).is_err());
        assert_eq!(sig(&[1, 2, 3]).power(0, 1).unwrap(), sig(&[0, 0, 0]));
    }

    #[test]
    fn overflow_is_reported() {
        let big = sig(&[i32::MAX, 0, 0]);
        assert_eq!(
            big.product(&sig(&[1, 0, 0])).unwrap_err(),
            Error::ExponentOverflow {
                left: big.clone(),
                right: sig(&[1, 0, 0]),
            }
        );
        assert!(matches!(
            big.quotient(&sig(&[-1, 0, 0])),
            Err(Error::ExponentOverflow { .. })
        ));
        assert!(sig(&[i32::MIN, 0, 0]).inverse().is_err());
    }

    #[test]
    fn exponent_lookup() {
        let s = sig(&[1, -2, 0]);
        assert_eq!(s.exponent_of("time"), Some(-2));
        assert_eq!(s.exponent_of("charge"), None);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert!(Signature::default().is_empty());
    }

    fn exponents() -> impl Strategy<Value = [i32; 3]> {
        prop::array::uniform3(-12_i32..=12)
    }

    proptest! {
        #[test]
        fn product_commutes(a in exponents(), b in exponents()) {
            let (a, b) = (sig(&a), sig(&b));
            prop_assert_eq!(a.product(&b).unwrap(), b.product(&a).unwrap());
        }

        #[test]
        fn product_associates(a in exponents(), b in exponents(), c in exponents()) {
            let (a, b, c) = (sig(&a), sig(&b), sig(&c));
            let left = a.product(&b.product(&c).unwrap()).unwrap();
            let right = a.product(&b).unwrap().product(&c).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn inverse_cancels(a in exponents()) {
            let a = sig(&a);
            let unit = a.product(&a.inverse().unwrap()).unwrap();
            prop_assert!(unit.is_scalar());
            prop_assert_eq!(a.quotient(&a).unwrap(), a.scalar());
        }

        #[test]
        fn scalar_is_identity(a in exponents()) {
            let a = sig(&a);
            prop_assert_eq!(a.product(&a.scalar()).unwrap(), a);
        }

        #[test]
        fn powers_compose(
            a in exponents(),
            n1 in -3_i32..=3, d1 in 1_i32..=3,
            n2 in -3_i32..=3, d2 in 1_i32..=3,
        ) {
            let a = sig(&a);
            if let Ok(first) = a.power(n1, d1) {
                if let Ok(second) = first.power(n2, d2) {
                    prop_assert_eq!(second, a.power(n1 * n2, d1 * d2).unwrap());
                }
            }
        }

        #[test]
        fn invalid_power_never_truncates(a in exponents(), n in 1_i32..=5, d in 2_i32..=5) {
            let s = sig(&a);
            let integral = a.iter().all(|e| (e * n) % d == 0);
            prop_assert_eq!(s.power(n, d).is_ok(), integral);
        }
    }
}
