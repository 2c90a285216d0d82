//! Stack-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during stack operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
    /// The allocator could not provide storage for a resizing operation.
    ///
    /// The operation that failed leaves the stack observably unchanged.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// Pop was called on an empty stack.
    Empty,
    /// A checked index was outside the stack's bounds.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Stack length at the time of access.
        len: usize,
    },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} bytes")
            }
            Self::Empty => write!(f, "stack is empty"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for stack of length {len}")
            }
        }
    }
}

impl Error for StackError {}
