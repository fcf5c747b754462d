//! Error types.

use core::fmt::{self, Display};

/// Errors raised while decoding curve data.
///
/// These never cross the verification boundary: [`crate::schnorr::verify`]
/// and the precompile fold every one of them into a rejected signature.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Encoded integer is not below the field modulus or the group order.
    OutOfRange,

    /// No curve point has the given x-coordinate.
    InvalidXCoordinate,

    /// Input slice has the wrong length.
    InvalidLength {
        /// Number of bytes the decoder requires.
        expected: usize,

        /// Number of bytes it was given.
        actual: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("value out of range"),
            Self::InvalidXCoordinate => f.write_str("x-coordinate is not on the curve"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
