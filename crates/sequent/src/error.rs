//! Error types for the enumerable operation set.

use sequent_shorthand::ShorthandError;
use thiserror::Error;

/// Errors that can occur when invoking an enumerable operation.
///
/// Every error is local to the operation call: transforming operations only
/// commit their new slot contents after a full successful scan, so a failed
/// call leaves the host untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnumerableError {
    /// A string argument failed to compile into a predicate or accessor.
    #[error(transparent)]
    Shorthand(#[from] ShorthandError),

    /// `reduce` was invoked on an empty sequence with no initial value to
    /// seed the accumulator.
    #[error("reduce on an empty sequence has no initial accumulator")]
    EmptyReduce,

    /// `in_groups_of` requires a group size of at least 1.
    #[error("group size must be at least 1, got {0}")]
    InvalidGroupSize(usize),
}

/// Result type for enumerable operations.
pub type Result<T> = std::result::Result<T, EnumerableError>;
