//! Bump allocation over an owned backing region, safe for concurrent callers.
//!
//! # Architecture
//!
//! ```text
//! Arena<S: RegionSource> (thread-safe owner)
//! ├── Mutex<_> (single lock; every operation is a short critical section)
//! │   ├── Region (Box<[u8]> + bump cursor)
//! │   ├── live count (outstanding allocations; zero triggers bulk reset)
//! │   └── Generation (advanced on every reset; stales old handles)
//! └── S: RegionSource (backing storage, acquired once / released once)
//! ```
//!
//! # All-or-nothing reclaim
//!
//! This is a bump allocator: individual allocations cannot be freed. The
//! arena tracks only a coarse count of outstanding allocations — when it
//! returns to zero (or [`Arena::reset`] is called), the cursor rewinds and
//! the *entire* region is reclaimed at once. Callers must pair each
//! successful [`Arena::allocate`] with exactly one [`Arena::deallocate`],
//! in any order.
//!
//! Instead of raw pointers, allocations are [`AllocHandle`]s tagged with
//! the generation they were minted in. Resolving a handle after a reset
//! yields [`ArenaError::StaleHandle`] rather than a view of repurposed
//! bytes, and resolving one after destruction does not compile — the arena
//! is consumed by value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod handle;
pub mod region;

// Public re-exports for the primary API surface.
pub use arena::{AllocMut, AllocRef, Arena};
pub use handle::AllocHandle;
pub use region::Region;
pub use talus_core::{ArenaError, Generation, RegionSource, SystemSource};
