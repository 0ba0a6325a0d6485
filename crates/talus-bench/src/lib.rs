//! Benchmark profiles and utilities for the Talus arena allocator.
//!
//! Provides pre-built arenas for benchmarking:
//!
//! - [`reference_arena`]: 16 MiB, the standard profile for allocation
//!   micro-benchmarks
//! - [`small_arena`]: 64 KiB, for create/destroy and churn measurements

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use talus_arena::Arena;

/// Capacity of the reference benchmark arena: 16 MiB.
pub const REFERENCE_CAPACITY: usize = 16 * 1024 * 1024;

/// Capacity of the small benchmark arena: 64 KiB.
pub const SMALL_CAPACITY: usize = 64 * 1024;

/// Build the reference benchmark arena.
pub fn reference_arena() -> Arena {
    Arena::new(REFERENCE_CAPACITY).unwrap()
}

/// Build the small benchmark arena.
pub fn small_arena() -> Arena {
    Arena::new(SMALL_CAPACITY).unwrap()
}
