//! Crate errors.

use thiserror::Error;

/// Division by zero.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("division by zero")]
pub struct DivByZero;

/// The value does not fit the fixed-width byte representation.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("value is too large")]
pub struct Overflow;

/// Failed interpolation error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum InterpolationError {
    /// Division by zero.
    #[error("division by zero")]
    DivByZero,

    /// Empty point sequence.
    #[error("empty point sequence")]
    EmptySequence,
}

impl From<DivByZero> for InterpolationError {
    fn from(_: DivByZero) -> Self {
        Self::DivByZero
    }
}
