//! Dimension types and the type-level algebra over them.
//!
//! A dimension is an ordered list of base axes, each carrying a `typenum` integer exponent:
//!
//! ```text
//! Factor<Length, P1, Factor<Time, N1, Unity>>   // length¹ · time⁻¹
//! ```
//!
//! Multiplication, inversion, division and rational powers are traits whose impls only exist for valid inputs.
//! Two lists can only be combined when they name the same bases in the same order, and a power is only defined when
//! every resulting exponent is an integer. Anything else fails to compile:
//!
//! ```compile_fail
//! use dimal_core::typenum::{P1, Z0};
//! use dimal_core::{BaseDimension, Dimension, Factor, Product, Unity};
//!
//! pub enum A {}
//! impl BaseDimension for A {
//!     const NAME: &'static str = "a";
//!     const SYMBOL: &'static str = "A";
//! }
//! pub enum B {}
//! impl BaseDimension for B {
//!     const NAME: &'static str = "b";
//!     const SYMBOL: &'static str = "B";
//! }
//!
//! type AFirst = Factor<A, P1, Factor<B, Z0, Unity>>;
//! type BFirst = Factor<B, P1, Factor<A, Z0, Unity>>;
//!
//! fn dimension<D: Dimension>() {}
//! dimension::<Product<AFirst, BFirst>>(); // base orderings differ
//! ```
//!
//! ```compile_fail
//! use dimal_core::catalog::Length;
//! use dimal_core::typenum::{P1, P2};
//! use dimal_core::{Dimension, Power};
//!
//! fn dimension<D: Dimension>() {}
//! dimension::<Power<Length, P1, P2>>(); // length^(1/2) is not integral
//! ```

use crate::signature::{Axis, Signature};
use alloc::vec::Vec;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg};
use typenum::{Integer, Negate, NonZero, PartialDiv, PartialQuot, Prod, Sum, P1, Z0};

/// Marker trait for a **base dimension**: one independent axis of measurement (length, time, mass …).
///
/// Axes are usually empty enums. Inside this crate they are declared with the `BaseDimension` derive:
///
/// ```rust
/// use dimal_core::BaseDimension;
///
/// pub enum Luminosity {}
/// impl BaseDimension for Luminosity {
///     const NAME: &'static str = "luminosity";
///     const SYMBOL: &'static str = "J";
/// }
/// ```
pub trait BaseDimension: 'static {
    /// Human readable axis name.
    const NAME: &'static str;
    /// Symbol used when a [`Signature`] is displayed.
    const SYMBOL: &'static str;
}

/// Terminator of a dimension list. On its own it is the dimension over zero bases.
pub enum Unity {}

/// Base `B` raised to the exponent `E`, followed by the remaining bases `R`.
pub struct Factor<B, E, R>(PhantomData<(B, E, R)>);

/// Trait implemented by every **dimension** type.
///
/// Only [`Unity`] and [`Factor`] lists implement it; named dimensions are type aliases over those.
pub trait Dimension: 'static {
    /// The dimension over the same bases with every exponent zero.
    type Scalar: Dimensionless;

    /// `true` iff every exponent is zero.
    const IS_SCALAR: bool;

    /// Number of base axes.
    const RANK: usize;

    #[doc(hidden)]
    fn push_axes(axes: &mut Vec<Axis>);

    /// Lowers the dimension to its runtime exponent vector.
    fn signature() -> Signature {
        let mut axes = Vec::with_capacity(Self::RANK);
        Self::push_axes(&mut axes);
        Signature::from_axes(axes)
    }
}

/// Dimensions whose exponents are all zero.
///
/// Operations that only make sense for pure numbers (mixing with raw values, converting back to them) are gated
/// on this trait.
pub trait Dimensionless: Dimension {}

impl Dimension for Unity {
    type Scalar = Unity;
    const IS_SCALAR: bool = true;
    const RANK: usize = 0;

    #[inline]
    fn push_axes(_: &mut Vec<Axis>) {}
}

impl Dimensionless for Unity {}

impl<B, E, R> Dimension for Factor<B, E, R>
where
    B: BaseDimension,
    E: Integer,
    R: Dimension,
{
    type Scalar = Factor<B, Z0, R::Scalar>;
    const IS_SCALAR: bool = E::I32 == 0 && R::IS_SCALAR;
    const RANK: usize = 1 + R::RANK;

    fn push_axes(axes: &mut Vec<Axis>) {
        axes.push(Axis::of::<B>(E::I32));
        R::push_axes(axes);
    }
}

impl<B: BaseDimension, R: Dimensionless> Dimensionless for Factor<B, Z0, R> {}

/// `true` iff `D` has every exponent zero.
#[inline]
pub const fn is_scalar<D: Dimension>() -> bool {
    D::IS_SCALAR
}

// ─────────────────────────────────────────────────────────────────────────────
// Product
// ─────────────────────────────────────────────────────────────────────────────

/// Pointwise sum of exponents. Only implemented when both lists have the same bases in the same order.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

impl DimMul<Unity> for Unity {
    type Output = Unity;
}

impl<B, El, Er, Rl, Rr> DimMul<Factor<B, Er, Rr>> for Factor<B, El, Rl>
where
    B: BaseDimension,
    El: Integer + Add<Er>,
    Er: Integer,
    Sum<El, Er>: Integer,
    Rl: DimMul<Rr>,
    Rr: Dimension,
{
    type Output = Factor<B, Sum<El, Er>, <Rl as DimMul<Rr>>::Output>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Inverse and quotient
// ─────────────────────────────────────────────────────────────────────────────

/// Negates every exponent.
pub trait DimInv: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

impl DimInv for Unity {
    type Output = Unity;
}

impl<B, E, R> DimInv for Factor<B, E, R>
where
    B: BaseDimension,
    E: Integer + Neg,
    Negate<E>: Integer,
    R: DimInv,
{
    type Output = Factor<B, Negate<E>, <R as DimInv>::Output>;
}

/// `Self * Rhs⁻¹`.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

impl<L, R> DimDiv<R> for L
where
    R: DimInv,
    L: DimMul<<R as DimInv>::Output>,
{
    type Output = <L as DimMul<<R as DimInv>::Output>>::Output;
}

// ─────────────────────────────────────────────────────────────────────────────
// Rational powers
// ─────────────────────────────────────────────────────────────────────────────

/// Raises every exponent to `N / Den`.
///
/// Implemented only when `e * N` is exactly divisible by `Den` for every exponent `e` (and `Den != 0`); there is no
/// truncation.
pub trait DimPow<N: Integer, Den: Integer + NonZero>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

impl<N: Integer, Den: Integer + NonZero> DimPow<N, Den> for Unity {
    type Output = Unity;
}

impl<B, E, R, N, Den> DimPow<N, Den> for Factor<B, E, R>
where
    B: BaseDimension,
    E: Integer + Mul<N>,
    N: Integer,
    Den: Integer + NonZero,
    Prod<E, N>: PartialDiv<Den>,
    PartialQuot<Prod<E, N>, Den>: Integer,
    R: DimPow<N, Den>,
{
    type Output = Factor<B, PartialQuot<Prod<E, N>, Den>, <R as DimPow<N, Den>>::Output>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Aliases
// ─────────────────────────────────────────────────────────────────────────────

/// `A · B`.
pub type Product<A, B> = <A as DimMul<B>>::Output;

/// `A⁻¹`.
pub type Inverse<A> = <A as DimInv>::Output;

/// `A / B`.
pub type Quotient<A, B> = <A as DimDiv<B>>::Output;

/// `A^(N/Den)`.
pub type Power<A, N, Den = P1> = <A as DimPow<N, Den>>::Output;
