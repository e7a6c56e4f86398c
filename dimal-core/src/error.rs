//! Error type for the runtime side of the algebra.
//!
//! Most misuse never reaches this type: mismatched dimensions, invalid exponents and operations an [`Absolute`]
//! does not support are missing trait impls and fail to compile. What remains are the checks that only make sense
//! on runtime values, such as combining two [`Signature`]s or the opt-in zero-divisor guards.
//!
//! [`Absolute`]: crate::Absolute

use crate::signature::Signature;
use thiserror::Error;

/// Errors reported by runtime dimension checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operands are not expressed over the same ordered base dimensions, or differ where equality is required.
    #[error("dimension mismatch: `{left}` is not compatible with `{right}`")]
    DimensionMismatch {
        /// Left operand.
        left: Signature,
        /// Right operand.
        right: Signature,
    },

    /// A rational power would leave a non-integral exponent (or the denominator is zero).
    #[error("cannot raise `{dimension}` to the power {numerator}/{denominator}")]
    InvalidExponent {
        /// Dimension being raised.
        dimension: Signature,
        /// Numerator of the requested power.
        numerator: i32,
        /// Denominator of the requested power.
        denominator: i32,
    },

    /// Combining two signatures pushed an exponent outside the `i32` range.
    #[error("exponent overflow combining `{left}` with `{right}`")]
    ExponentOverflow {
        /// Left operand.
        left: Signature,
        /// Right operand.
        right: Signature,
    },

    /// The operation has no physical meaning for this dimension.
    #[error("{operation} is not supported for `{dimension}`")]
    UnsupportedOperation {
        /// Short description of the rejected operation.
        operation: &'static str,
        /// Dimension of the operand.
        dimension: Signature,
    },

    /// A checked division met a zero divisor.
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// Where the zero divisor was found.
        context: &'static str,
    },
}

/// Shorthand `Result` type used throughout dimal.
pub type Result<T, E = Error> = core::result::Result<T, E>;
