//! Error taxonomy shared by the runtime sequence operations.
//!
//! Every variant is a precondition violation surfaced straight to the caller.
//! Nothing here is retried or recovered internally.

use thiserror::Error;

/// Errors returned by runtime sequence operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TupleError {
    /// `first` or `last` was asked for an element of an empty sequence.
    #[error("{operation} of an empty sequence")]
    EmptySequence {
        /// Name of the operation that needed an element.
        operation: &'static str,
    },

    /// Repeat count was negative, fractional, or not a finite number.
    #[error("invalid repeat count {count}: {reason}")]
    InvalidCount {
        /// The rejected count, rendered as the caller supplied it.
        count: String,
        /// Why the count was rejected.
        reason: &'static str,
    },

    /// Repeat count is valid but above the configured ceiling.
    #[error("repeat count {count} exceeds the configured limit of {limit}")]
    CountLimitExceeded {
        /// Requested number of copies.
        count: usize,
        /// Ceiling from [`crate::Limits::max_repeat`].
        limit: usize,
    },

    /// Indexed access past the end of a sequence.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        /// Requested position.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },
}

/// Result alias for fallible sequence operations.
pub type Result<T, E = TupleError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_message_names_operation() {
        let err = TupleError::EmptySequence { operation: "first" };
        assert_eq!(err.to_string(), "first of an empty sequence");
    }

    #[test]
    fn invalid_count_message_includes_reason() {
        let err = TupleError::InvalidCount {
            count: "-1".to_string(),
            reason: "must be >= 0",
        };
        assert_eq!(err.to_string(), "invalid repeat count -1: must be >= 0");
    }
}
