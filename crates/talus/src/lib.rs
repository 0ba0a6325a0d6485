//! Talus: fixed-capacity bump arena allocation with bulk reset.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Talus sub-crates. For most users, adding `talus` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use talus::prelude::*;
//!
//! // A 1 KiB arena backed by the global allocator.
//! let arena = Arena::new(1024)?;
//!
//! // Carve out room for a u32 and write through the handle.
//! let number = arena.allocate_for::<u32>()?;
//! arena.write(&number)?.copy_from_slice(&42u32.to_ne_bytes());
//! assert_eq!(&*arena.read(&number)?, &42u32.to_ne_bytes());
//!
//! // Balance the allocation; the live count hits zero and the whole
//! // region is reclaimed at once, staling `number`.
//! arena.deallocate()?;
//! assert!(matches!(arena.read(&number), Err(ArenaError::StaleHandle { .. })));
//!
//! arena.destroy();
//! # Ok::<(), talus::prelude::ArenaError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `talus-arena` | `Arena`, `Region`, handles, byte views |
//! | [`types`] | `talus-core` | `Generation`, `ArenaError`, `RegionSource` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena storage, handles, and byte views (`talus-arena`).
///
/// Most users only need [`arena::Arena`] and [`arena::AllocHandle`] from
/// this module — they are also available in the [`prelude`].
pub use talus_arena as arena;

/// Core types, traits, and errors (`talus-core`).
///
/// Contains the [`types::Generation`] counter, the [`types::ArenaError`]
/// taxonomy, and the [`types::RegionSource`] trait for injecting backing
/// storage.
pub use talus_core as types;

pub mod prelude {
    //! Single-import convenience for the common API surface.

    pub use talus_arena::{AllocHandle, AllocMut, AllocRef, Arena};
    pub use talus_core::{ArenaError, Generation, RegionSource, SystemSource};
}
