//! The thread-safe arena: bump allocation with live-count bulk reset.
//!
//! [`Arena`] is the top-level type. It owns a [`Region`] acquired from a
//! [`RegionSource`], guards all mutable state with a single mutex, and
//! tracks outstanding allocations with a coarse live count. When the count
//! returns to zero the cursor rewinds and the whole region is reclaimed at
//! once — there is no per-allocation free.
//!
//! The lifecycle per arena is:
//! 1. [`Arena::new`] / [`Arena::with_source`] — acquire the backing region
//! 2. [`Arena::allocate`] / [`Arena::deallocate`] — carve ranges, balance counts
//! 3. [`Arena::read`] / [`Arena::write`] — resolve handles to byte views
//! 4. [`Arena::destroy`] (or drop) — release the backing region

use std::alloc::Layout;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

use talus_core::{ArenaError, Generation, RegionSource, SystemSource};

use crate::handle::AllocHandle;
use crate::region::Region;

/// Mutable arena state, protected by the arena's single mutex.
#[derive(Debug)]
struct ArenaState {
    /// The backing region. Taken back by `Drop` for release.
    region: Region,
    /// Outstanding allocations. Reaching zero triggers a bulk reset.
    live: usize,
    /// Advanced on every bulk reset; handles are validated against it.
    generation: Generation,
}

impl ArenaState {
    /// O(1) staleness check for a handle against the current generation.
    fn check(&self, handle: &AllocHandle) -> Result<(), ArenaError> {
        if handle.generation != self.generation {
            return Err(ArenaError::StaleHandle {
                handle_generation: handle.generation,
                arena_generation: self.generation,
            });
        }
        Ok(())
    }

    /// Rewind the cursor, clear the live count, and stale all handles.
    fn bulk_reset(&mut self) {
        self.live = 0;
        self.region.reset();
        self.generation = self.generation.next();
    }
}

/// A fixed-capacity bump arena, safe for concurrent callers.
///
/// All mutable state (`cursor`, live count, generation) sits behind one
/// mutex. `allocate`, `deallocate`, and `reset` acquire it for a short,
/// arithmetic-only critical section and release it before returning,
/// including on every error path.
///
/// Implements [`Debug`] for any `S: RegionSource + Debug` — the backing
/// source and a snapshot of the mutex-guarded state.
///
/// # Handles, not pointers
///
/// [`Arena::allocate`] returns an [`AllocHandle`] — an offset tagged with
/// the generation it was minted in. [`Arena::read`] and [`Arena::write`]
/// resolve handles to byte views, failing with
/// [`ArenaError::StaleHandle`] for any handle minted before the most
/// recent bulk reset. Use after destruction is unrepresentable:
/// [`Arena::destroy`] consumes the arena by value.
///
/// # All-or-nothing reclaim
///
/// [`Arena::deallocate`] does not take a handle and frees nothing by
/// itself — it decrements the live count, and only when the count reaches
/// zero is the region reclaimed, all at once. Callers must pair each
/// successful `allocate` with exactly one `deallocate`, in any order.
/// Callers who want bulk reuse without balancing counts call
/// [`Arena::reset`] instead.
///
/// # Example
///
/// ```rust
/// use talus_arena::Arena;
///
/// let arena = Arena::new(1024)?;
/// let handle = arena.allocate_for::<u32>()?;
/// arena.write(&handle)?.copy_from_slice(&42u32.to_ne_bytes());
/// assert_eq!(&*arena.read(&handle)?, &42u32.to_ne_bytes());
/// arena.deallocate()?;
/// arena.destroy();
/// # Ok::<(), talus_arena::ArenaError>(())
/// ```
#[derive(Debug)]
pub struct Arena<S: RegionSource = SystemSource> {
    /// The single lock for all mutable state.
    state: Mutex<ArenaState>,
    /// Total capacity in bytes. Immutable after creation.
    capacity: usize,
    /// Where the backing region came from and where it goes back to.
    source: S,
}

impl Arena<SystemSource> {
    /// Create an arena backed by the global allocator.
    ///
    /// Acquires a contiguous region of exactly `capacity` bytes. Fails
    /// with [`ArenaError::OutOfMemory`] if the allocation cannot be
    /// satisfied, in which case no arena is produced.
    pub fn new(capacity: usize) -> Result<Self, ArenaError> {
        Self::with_source(capacity, SystemSource)
    }
}

impl<S: RegionSource> Arena<S> {
    /// Create an arena that acquires its backing region from `source`.
    ///
    /// The region is acquired exactly once here and released exactly once
    /// back to the same source when the arena is destroyed or dropped.
    /// Errors from the source are surfaced unchanged.
    pub fn with_source(capacity: usize, source: S) -> Result<Self, ArenaError> {
        let data = source.acquire(capacity)?;
        Ok(Self {
            state: Mutex::new(ArenaState {
                region: Region::new(data),
                live: 0,
                generation: Generation::ZERO,
            }),
            capacity,
            source,
        })
    }

    fn lock(&self) -> MutexGuard<'_, ArenaState> {
        self.state.lock().unwrap()
    }

    /// Allocate `size` bytes aligned to `align` (a power of two).
    ///
    /// On success the cursor advances, the live count increments, and the
    /// returned handle locates an uninitialized range of exactly `size`
    /// bytes — the arena makes no zeroing guarantee. On failure
    /// ([`ArenaError::OutOfMemory`], [`ArenaError::InvalidAlignment`])
    /// the arena state is completely unchanged.
    pub fn allocate(&self, size: usize, align: usize) -> Result<AllocHandle, ArenaError> {
        let mut state = self.lock();
        let offset = state.region.alloc(size, align)?;
        state.live += 1;
        Ok(AllocHandle::new(state.generation, offset, size))
    }

    /// Allocate room for one value of type `T`.
    ///
    /// Computes size and alignment from the type's layout. The handle
    /// still resolves to raw bytes — encode and decode the value with
    /// methods like `to_ne_bytes`.
    pub fn allocate_for<T>(&self) -> Result<AllocHandle, ArenaError> {
        self.allocate_layout(Layout::new::<T>())
    }

    /// Allocate per an explicit [`Layout`].
    pub fn allocate_layout(&self, layout: Layout) -> Result<AllocHandle, ArenaError> {
        self.allocate(layout.size(), layout.align())
    }

    /// Signal that one outstanding allocation is finished.
    ///
    /// This is a bulk-reset signal, not a per-handle free: it takes no
    /// handle and cannot free an individual range. When the live count
    /// reaches zero the entire region is reclaimed — the cursor rewinds
    /// and every handle issued so far goes stale. Fails with
    /// [`ArenaError::Underflow`] if there is no outstanding allocation
    /// to balance.
    pub fn deallocate(&self) -> Result<(), ArenaError> {
        let mut state = self.lock();
        if state.live == 0 {
            return Err(ArenaError::Underflow);
        }
        state.live -= 1;
        if state.live == 0 {
            state.bulk_reset();
        }
        Ok(())
    }

    /// Reclaim the entire region at once, regardless of the live count.
    ///
    /// Rewinds the cursor, zeroes the live count, and stales every handle
    /// issued so far. For callers who reuse the arena in phases and do not
    /// want to balance `deallocate` calls artificially.
    pub fn reset(&self) {
        self.lock().bulk_reset();
    }

    /// Resolve a handle to a shared byte view.
    ///
    /// Fails with [`ArenaError::StaleHandle`] if the handle was minted
    /// before the most recent bulk reset.
    ///
    /// The arena is locked while the view exists — drop it before calling
    /// any other arena operation from the same thread, and do no I/O
    /// while holding it.
    pub fn read(&self, handle: &AllocHandle) -> Result<AllocRef<'_>, ArenaError> {
        let state = self.lock();
        state.check(handle)?;
        Ok(AllocRef {
            state,
            offset: handle.offset,
            len: handle.len,
        })
    }

    /// Resolve a handle to a mutable byte view.
    ///
    /// Same staleness and locking contract as [`Arena::read`].
    pub fn write(&self, handle: &AllocHandle) -> Result<AllocMut<'_>, ArenaError> {
        let state = self.lock();
        state.check(handle)?;
        Ok(AllocMut {
            state,
            offset: handle.offset,
            len: handle.len,
        })
    }

    /// Consume the arena and release its backing region.
    ///
    /// Equivalent to dropping the arena; provided so teardown is explicit
    /// at call sites. The region goes back to the [`RegionSource`] it came
    /// from, exactly once, regardless of the live count — the type system
    /// guarantees no handle can be resolved afterwards.
    pub fn destroy(self) {
        drop(self);
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes currently allocated, including alignment padding.
    pub fn used(&self) -> usize {
        self.lock().region.used()
    }

    /// Bytes still free.
    pub fn remaining(&self) -> usize {
        self.lock().region.remaining()
    }

    /// Number of outstanding allocations.
    pub fn live_count(&self) -> usize {
        self.lock().live
    }

    /// The current generation. Advances on every bulk reset.
    pub fn generation(&self) -> Generation {
        self.lock().generation
    }
}

impl<S: RegionSource> Drop for Arena<S> {
    fn drop(&mut self) {
        let state = match self.state.get_mut() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        let region = std::mem::take(&mut state.region);
        self.source.release(region.into_inner());
    }
}

/// Shared view of one allocation. Derefs to `[u8]`.
///
/// Holds the arena lock for its lifetime; see [`Arena::read`].
pub struct AllocRef<'a> {
    state: MutexGuard<'a, ArenaState>,
    offset: usize,
    len: usize,
}

impl Deref for AllocRef<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.state.region.slice(self.offset, self.len)
    }
}

/// Mutable view of one allocation. Derefs to `[u8]`.
///
/// Holds the arena lock for its lifetime; see [`Arena::write`].
pub struct AllocMut<'a> {
    state: MutexGuard<'a, ArenaState>,
    offset: usize,
    len: usize,
}

impl Deref for AllocMut<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.state.region.slice(self.offset, self.len)
    }
}

impl DerefMut for AllocMut<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.state.region.slice_mut(self.offset, self.len)
    }
}
