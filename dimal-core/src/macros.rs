//! Macros generating the operators that mix typed values with raw primitives.
//!
//! Operators between two typed values are generic over [`Value`](crate::Value). Operators with a bare number on
//! either side have to name the primitive, so they are stamped out once per storage type here.

/// Scaling by raw numbers for every dimension, plus raw-number mixing for dimensionless quantities.
macro_rules! impl_quantity_primitive_ops {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<D: $crate::Dimension> ::core::ops::Mul<$t> for $crate::Quantity<D, $t> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Self::from_standard(self.standard() * rhs)
                }
            }

            impl<D: $crate::Dimension> ::core::ops::Mul<$crate::Quantity<D, $t>> for $t {
                type Output = $crate::Quantity<D, $t>;
                #[inline]
                fn mul(self, rhs: $crate::Quantity<D, $t>) -> Self::Output {
                    $crate::Quantity::from_standard(self * rhs.standard())
                }
            }

            impl<D: $crate::Dimension> ::core::ops::Div<$t> for $crate::Quantity<D, $t> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Self::from_standard(self.standard() / rhs)
                }
            }

            impl<D: $crate::DimInv> ::core::ops::Div<$crate::Quantity<D, $t>> for $t {
                type Output = $crate::Quantity<$crate::Inverse<D>, $t>;
                #[inline]
                fn div(self, rhs: $crate::Quantity<D, $t>) -> Self::Output {
                    $crate::Quantity::from_standard(self / rhs.standard())
                }
            }

            impl<D: $crate::Dimension> ::core::ops::MulAssign<$t> for $crate::Quantity<D, $t> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    self.set_standard(self.standard() * rhs);
                }
            }

            impl<D: $crate::Dimension> ::core::ops::DivAssign<$t> for $crate::Quantity<D, $t> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    self.set_standard(self.standard() / rhs);
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::Add<$t> for $crate::Quantity<D, $t> {
                type Output = Self;
                #[inline]
                fn add(self, rhs: $t) -> Self {
                    Self::from_standard(self.standard() + rhs)
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::Add<$crate::Quantity<D, $t>> for $t {
                type Output = $crate::Quantity<D, $t>;
                #[inline]
                fn add(self, rhs: $crate::Quantity<D, $t>) -> Self::Output {
                    $crate::Quantity::from_standard(self + rhs.standard())
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::Sub<$t> for $crate::Quantity<D, $t> {
                type Output = Self;
                #[inline]
                fn sub(self, rhs: $t) -> Self {
                    Self::from_standard(self.standard() - rhs)
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::Sub<$crate::Quantity<D, $t>> for $t {
                type Output = $crate::Quantity<D, $t>;
                #[inline]
                fn sub(self, rhs: $crate::Quantity<D, $t>) -> Self::Output {
                    $crate::Quantity::from_standard(self - rhs.standard())
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::AddAssign<$t> for $crate::Quantity<D, $t> {
                #[inline]
                fn add_assign(&mut self, rhs: $t) {
                    self.set_standard(self.standard() + rhs);
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::SubAssign<$t> for $crate::Quantity<D, $t> {
                #[inline]
                fn sub_assign(&mut self, rhs: $t) {
                    self.set_standard(self.standard() - rhs);
                }
            }

            impl<D: $crate::Dimensionless> PartialEq<$t> for $crate::Quantity<D, $t> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.standard() == *other
                }
            }

            impl<D: $crate::Dimensionless> PartialEq<$crate::Quantity<D, $t>> for $t {
                #[inline]
                fn eq(&self, other: &$crate::Quantity<D, $t>) -> bool {
                    *self == other.standard()
                }
            }

            impl<D: $crate::Dimensionless> PartialOrd<$t> for $crate::Quantity<D, $t> {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<::core::cmp::Ordering> {
                    <$t as PartialOrd>::partial_cmp(&self.standard(), other)
                }
            }

            impl<D: $crate::Dimensionless> PartialOrd<$crate::Quantity<D, $t>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &$crate::Quantity<D, $t>) -> Option<::core::cmp::Ordering> {
                    <$t as PartialOrd>::partial_cmp(self, &other.standard())
                }
            }

            impl<D: $crate::Dimensionless> From<$crate::Quantity<D, $t>> for $t {
                #[inline]
                fn from(value: $crate::Quantity<D, $t>) -> Self {
                    value.standard()
                }
            }
        )+
    };
}

/// Raw-number offsets for dimensionless absolutes.
macro_rules! impl_absolute_primitive_ops {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<D: $crate::Dimensionless> ::core::ops::Add<$t> for $crate::Absolute<D, $t> {
                type Output = Self;
                #[inline]
                fn add(self, rhs: $t) -> Self {
                    Self::from_standard(self.standard() + rhs)
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::Add<$crate::Absolute<D, $t>> for $t {
                type Output = $crate::Absolute<D, $t>;
                #[inline]
                fn add(self, rhs: $crate::Absolute<D, $t>) -> Self::Output {
                    $crate::Absolute::from_standard(self + rhs.standard())
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::Sub<$t> for $crate::Absolute<D, $t> {
                type Output = Self;
                #[inline]
                fn sub(self, rhs: $t) -> Self {
                    Self::from_standard(self.standard() - rhs)
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::AddAssign<$t> for $crate::Absolute<D, $t> {
                #[inline]
                fn add_assign(&mut self, rhs: $t) {
                    self.set_standard(self.standard() + rhs);
                }
            }

            impl<D: $crate::Dimensionless> ::core::ops::SubAssign<$t> for $crate::Absolute<D, $t> {
                #[inline]
                fn sub_assign(&mut self, rhs: $t) {
                    self.set_standard(self.standard() - rhs);
                }
            }
        )+
    };
}
