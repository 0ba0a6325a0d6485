//! Test utilities and mock region sources for Talus development.
//!
//! Provides deterministic [`RegionSource`] doubles for exercising
//! acquisition failure and verifying the acquire-once/release-once
//! contract from outside an arena.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use talus_core::{ArenaError, RegionSource, SystemSource};

/// Refuses every acquisition with `OutOfMemory`.
///
/// Simulates a system allocator that cannot satisfy any request, making
/// the arena-creation failure path deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefusingSource;

impl RegionSource for RefusingSource {
    fn acquire(&self, len: usize) -> Result<Box<[u8]>, ArenaError> {
        Err(ArenaError::OutOfMemory {
            requested: len,
            available: 0,
        })
    }

    fn release(&self, region: Box<[u8]>) {
        drop(region);
    }
}

/// Satisfies a configurable number of acquisitions, then refuses.
///
/// Uses an `AtomicUsize` call counter shared across clones, so a budget
/// can span several arenas and the source satisfies `Send + Sync`.
#[derive(Clone, Debug)]
pub struct FailAfterSource {
    succeed_count: usize,
    call_count: Arc<AtomicUsize>,
}

impl FailAfterSource {
    /// Create a source that succeeds `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl RegionSource for FailAfterSource {
    fn acquire(&self, len: usize) -> Result<Box<[u8]>, ArenaError> {
        let calls = self.call_count.fetch_add(1, Ordering::SeqCst);
        if calls >= self.succeed_count {
            return Err(ArenaError::OutOfMemory {
                requested: len,
                available: 0,
            });
        }
        SystemSource.acquire(len)
    }

    fn release(&self, region: Box<[u8]>) {
        drop(region);
    }
}

/// Delegates to [`SystemSource`] while counting acquire and release calls.
///
/// Counters are shared across clones: keep a clone outside the arena and
/// inspect it after teardown to verify the region was acquired exactly
/// once and released exactly once.
#[derive(Clone, Debug, Default)]
pub struct CountingSource {
    acquired: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `acquire` calls observed so far.
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Number of `release` calls observed so far.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl RegionSource for CountingSource {
    fn acquire(&self, len: usize) -> Result<Box<[u8]>, ArenaError> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        SystemSource.acquire(len)
    }

    fn release(&self, region: Box<[u8]>) {
        self.released.fetch_add(1, Ordering::SeqCst);
        SystemSource.release(region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusing_source_always_fails() {
        assert!(RefusingSource.acquire(16).is_err());
        assert!(RefusingSource.acquire(0).is_err());
    }

    #[test]
    fn fail_after_budget_is_shared_across_clones() {
        let source = FailAfterSource::new(2);
        let clone = source.clone();
        assert!(source.acquire(8).is_ok());
        assert!(clone.acquire(8).is_ok());
        assert!(source.acquire(8).is_err());
        assert!(clone.acquire(8).is_err());
    }

    #[test]
    fn counting_source_tracks_both_directions() {
        let source = CountingSource::new();
        let probe = source.clone();
        let region = source.acquire(32).unwrap();
        assert_eq!(probe.acquired(), 1);
        assert_eq!(probe.released(), 0);
        source.release(region);
        assert_eq!(probe.released(), 1);
    }
}
