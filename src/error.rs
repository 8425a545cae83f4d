//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error for a rotation request that cannot be applied. Rejected requests never modify the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRotationRequest {
    /// the rotation family was left as the undefined sentinel
    #[error("rotation family must be defined")]
    UndefinedFamily,
    /// the slice line was not one of 1, 2 or 3
    #[error("slice line must be between 1 and 3, got {0}")]
    LineOutOfRange(u8),
}

/// Error for parsing rotations written in text notation, e.g. `x1` or `y3'`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRotationError {
    /// there was nothing to parse
    #[error("empty rotation")]
    Empty,
    /// the rotation did not start with `x` or `y`
    #[error("unknown rotation axis '{0}'")]
    UnknownAxis(char),
    /// the slice line was missing or not a number
    #[error("could not read slice line from '{0}'")]
    BadLine(String),
    /// the rotation parsed, but does not describe a valid rotation
    #[error(transparent)]
    Invalid(#[from] InvalidRotationRequest),
}
