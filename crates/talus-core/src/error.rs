//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use crate::id::Generation;

/// Errors that can occur during arena operations.
///
/// Every failure is reported to the caller; nothing is swallowed or logged
/// internally. `OutOfMemory` is the only variant a well-behaved caller is
/// expected to see in normal operation — the others indicate a broken
/// caller contract that the arena detects instead of corrupting state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The backing region (at creation) or the remaining capacity
    /// (at allocation) cannot satisfy the request.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still available when the request was made.
        available: usize,
    },
    /// The alignment argument was zero or not a power of two.
    InvalidAlignment {
        /// The rejected alignment.
        align: usize,
    },
    /// `deallocate` was called more times than `allocate` succeeded.
    Underflow,
    /// A handle from a generation that has been reclaimed by a bulk reset.
    StaleHandle {
        /// The generation encoded in the handle.
        handle_generation: Generation,
        /// The arena's current generation.
        arena_generation: Generation,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                available,
            } => {
                write!(
                    f,
                    "out of memory: requested {requested} bytes, {available} bytes available"
                )
            }
            Self::InvalidAlignment { align } => {
                write!(f, "invalid alignment: {align} is not a power of two")
            }
            Self::Underflow => {
                write!(f, "deallocate called with no outstanding allocations")
            }
            Self::StaleHandle {
                handle_generation,
                arena_generation,
            } => {
                write!(
                    f,
                    "stale handle: generation {handle_generation}, arena is at {arena_generation}"
                )
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_memory_display_names_both_sizes() {
        let err = ArenaError::OutOfMemory {
            requested: 128,
            available: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("128"));
        assert!(msg.contains("64"));
    }

    #[test]
    fn stale_handle_display_names_both_generations() {
        let err = ArenaError::StaleHandle {
            handle_generation: Generation(3),
            arena_generation: Generation(5),
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(ArenaError::Underflow, ArenaError::Underflow);
        assert_ne!(
            ArenaError::Underflow,
            ArenaError::InvalidAlignment { align: 3 }
        );
    }
}
