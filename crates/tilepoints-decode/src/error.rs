//! Error types for point decoding.

use std::fmt;

use crate::Axis;

/// Result alias used throughout the crate.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors produced while decoding a point batch.
///
/// Every failure is detected before any output is produced, so a returned
/// error always means the whole batch was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The input buffers do not describe a valid batch.
    MalformedInput(MalformedInput),
}

/// The specific way an input buffer is malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedInput {
    /// The packed header holds fewer values than its fixed layout requires.
    HeaderTooShort { expected: usize, actual: usize },
    /// The position buffer cannot be split into three equal axis arrays.
    PositionsNotDivisible { len: usize },
    /// A byte buffer is not a whole number of elements of `width` bytes.
    UnalignedBytes { len: usize, width: usize },
    /// A decoded running sum left the quantized range.
    QuantizedOutOfRange { axis: Axis, index: usize, value: i32 },
}

impl DecodeError {
    pub(crate) fn header_too_short(expected: usize, actual: usize) -> Self {
        Self::MalformedInput(MalformedInput::HeaderTooShort { expected, actual })
    }

    pub(crate) fn positions_not_divisible(len: usize) -> Self {
        Self::MalformedInput(MalformedInput::PositionsNotDivisible { len })
    }

    pub(crate) fn unaligned_bytes(len: usize, width: usize) -> Self {
        Self::MalformedInput(MalformedInput::UnalignedBytes { len, width })
    }

    pub(crate) fn quantized_out_of_range(axis: Axis, index: usize, value: i32) -> Self {
        Self::MalformedInput(MalformedInput::QuantizedOutOfRange { axis, index, value })
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput(detail) => write!(f, "malformed input: {detail}"),
        }
    }
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderTooShort { expected, actual } => write!(
                f,
                "packed header has {actual} values, expected at least {expected}"
            ),
            Self::PositionsNotDivisible { len } => {
                write!(f, "position buffer length {len} is not divisible by 3")
            }
            Self::UnalignedBytes { len, width } => {
                write!(f, "byte buffer length {len} is not a multiple of {width}")
            }
            Self::QuantizedOutOfRange { axis, index, value } => write!(
                f,
                "decoded {axis} code {value} at point {index} is outside [0, {}]",
                crate::MAX_QUANTIZED
            ),
        }
    }
}

impl std::error::Error for DecodeError {}
