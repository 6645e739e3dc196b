//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every failure here is a programming or configuration error detected eagerly
//! at construction or application time; none is transient and none is
//! retried.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when a sampling grid is constructed with a non-positive point
/// count or inverted bounds.
#[derive(Debug, Error)]
#[error("invalid sampling domain: require n > 0 and min < max; got n = {n} over [{min}, {max})")]
pub struct InvalidDomainError {
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl InvalidDomainError {
    pub(crate) fn check(min: f64, max: f64, n: usize) -> Result<(), Self> {
        (n > 0 && min < max).then_some(()).ok_or(Self { min, max, n })
    }
}

/// Returned when an operator of one dimension is applied to a state vector of
/// another, or when the terms of a composite disagree on dimension.
#[derive(Debug, Error)]
#[error("operator of dimension {0} applied to a state vector of length {1}")]
pub struct DimensionMismatchError(pub usize, pub usize);

impl DimensionMismatchError {
    pub(crate) fn check(expected: usize, got: usize) -> Result<(), Self> {
        (expected == got).then_some(()).ok_or(Self(expected, got))
    }
}

/// Returned when a sum composite is formed from, or applied with, zero terms.
///
/// Only sums are degenerate this way; an empty product is well-defined as the
/// identity.
#[derive(Debug, Error)]
#[error("sum composite requires at least one term")]
pub struct EmptyCompositeError;

/// Returned from operator construction and application.
#[derive(Debug, Error)]
pub enum OpError {
    /// [`InvalidDomainError`]
    #[error("domain error: {0}")]
    Domain(#[from] InvalidDomainError),

    /// [`DimensionMismatchError`]
    #[error("dimension error: {0}")]
    Dimension(#[from] DimensionMismatchError),

    /// [`EmptyCompositeError`]
    #[error("composite error: {0}")]
    EmptyComposite(#[from] EmptyCompositeError),
}

pub type OpResult<T> = Result<T, OpError>;
