//! Error taxonomy shared by every fallible operation.
//!
//! - `InvalidInput`: empty collections, too few points, duplicate adjacent
//!   points, non-finite coordinates, malformed interval bounds.
//! - `OutOfRange`: index, position or fraction outside its domain, or a
//!   non-finite numeric argument.
//! - `DegenerateResult`: a hull with fewer than 3 vertices, or an extraction
//!   interval that collapses after rounding.
//!
//! Validation is eager: no operation produces partial output before failing.

/// Errors raised by geometry construction and queries.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeomError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("degenerate result: {0}")]
    DegenerateResult(String),
}

impl GeomError {
    #[inline]
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GeomError::InvalidInput(msg.into())
    }
    #[inline]
    pub(crate) fn out_of_range(msg: impl Into<String>) -> Self {
        GeomError::OutOfRange(msg.into())
    }
    #[inline]
    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        GeomError::DegenerateResult(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;
