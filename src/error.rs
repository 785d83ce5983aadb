//! Error types for fallible tuple construction and indexed access.
//!
//! Equality never fails: comparing against `None` or an unrelated type is
//! simply "not equal".

use thiserror::Error;

/// Result type alias for tuple operations
pub type TupleResult<T> = core::result::Result<T, TupleError>;

/// Errors raised by dimension-checked construction and indexed access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TupleError {
    /// A source reported a different component count than the target arity
    #[error("expected {expected} components, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Indexed access past the last component
    #[error("component index {index} out of range for {dimensions} dimensions")]
    IndexOutOfRange { index: usize, dimensions: usize },
}
