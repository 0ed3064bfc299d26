//! Error types reported by bignum operations.
//!
//! Capacity overflow is deliberately absent: it is a defined truncation,
//! reported through the `bool` returned by the arithmetic routines.

use thiserror::Error as ThisError;


/// Represents all the ways a bignum operation can refuse its inputs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum BignumError {
    /// More bytes were supplied than the bignum can hold.
    #[error("Buffer of {size} bytes exceeds bignum capacity of {capacity} bytes")]
    BufferTooLarge { size: usize, capacity: usize },

    /// The output buffer cannot hold the full limb storage.
    #[error("Buffer of {size} bytes is smaller than bignum capacity of {capacity} bytes")]
    BufferTooSmall { size: usize, capacity: usize },

    /// The divisor has zero magnitude.
    #[error("Division by zero")]
    DivisionByZero,

    /// The exponent passed to `power` is negative.
    #[error("Negative exponent")]
    NegativeExponent,
}
