//! Helpers shared by the analyzers and the tester: the error type, bit
//! sequence utilities and random reference vectors.

use thiserror::Error;

/// Errors raised by the signature analyzers, the mask generator and the
/// aliasing tester.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SigError {
    /// A value outside `{0, 1}` was fed where a bit was expected.
    #[error("Invalid input: expected a bit (0 or 1), got {value}")]
    InvalidBit { value: i64 },

    /// A bit sequence contains a value outside `{0, 1}`.
    #[error("Invalid input: element {index} of the sequence is {value}, expected 0 or 1")]
    InvalidSequence { index: usize, value: u8 },

    /// The requested error count is outside `0..=4`.
    #[error("Invalid argument: errors must be in range 0..=4, got {0}")]
    InvalidErrorCount(usize),

    /// The reference sequence cannot hold the mutable window.
    #[error("Invalid argument: sequence of length {len} is shorter than the {window} bit window")]
    ShortReference { len: usize, window: usize },

    /// A polynomial mask must have at least one position.
    #[error("Invalid argument: polynomial mask is empty")]
    EmptyPolynomial,
}

/// The two failure families callers discriminate on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    InvalidArgument,
}

impl SigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SigError::InvalidBit { .. } | SigError::InvalidSequence { .. } => {
                ErrorKind::InvalidInput
            }
            SigError::InvalidErrorCount(_)
            | SigError::ShortReference { .. }
            | SigError::EmptyPolynomial => ErrorKind::InvalidArgument,
        }
    }
}

/// Bit sequence helpers
pub mod bits;
/// Random reference vector generation
pub mod rand_bits;
