//! Backing-region acquisition and release.
//!
//! Arenas never reach into the global allocator directly; they go through a
//! [`RegionSource`] injected at construction. Production code uses
//! [`SystemSource`]; tests substitute deterministic mock sources (see the
//! `talus-test-utils` crate) to exercise acquisition failure and verify
//! exactly-once release.

use crate::error::ArenaError;

/// Provides backing storage for arenas.
///
/// An arena calls [`acquire`](RegionSource::acquire) exactly once at
/// creation and [`release`](RegionSource::release) exactly once at
/// destruction, passing back the buffer it was given. Implementations must
/// return a buffer of exactly the requested length.
pub trait RegionSource {
    /// Acquire a contiguous region of exactly `len` bytes.
    ///
    /// Returns [`ArenaError::OutOfMemory`] if the request cannot be
    /// satisfied, in which case no arena is constructed.
    fn acquire(&self, len: usize) -> Result<Box<[u8]>, ArenaError>;

    /// Release a region previously returned by
    /// [`acquire`](RegionSource::acquire).
    fn release(&self, region: Box<[u8]>);
}

/// The production source: zero-filled buffers from the global allocator.
///
/// Allocation failure is surfaced as [`ArenaError::OutOfMemory`] via
/// `try_reserve_exact` rather than aborting the process. The zero fill is
/// an implementation detail, not part of the arena contract — callers must
/// not rely on allocations being zeroed.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemSource;

impl RegionSource for SystemSource {
    fn acquire(&self, len: usize) -> Result<Box<[u8]>, ArenaError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| ArenaError::OutOfMemory {
                requested: len,
                available: 0,
            })?;
        buf.resize(len, 0);
        Ok(buf.into_boxed_slice())
    }

    fn release(&self, region: Box<[u8]>) {
        drop(region);
    }
}
