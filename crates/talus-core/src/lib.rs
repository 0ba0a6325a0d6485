//! Core types and traits for the Talus arena allocator.
//!
//! This is the leaf crate with zero third-party dependencies. It defines
//! the fundamental abstractions used throughout the Talus workspace: the
//! [`Generation`] counter, the [`ArenaError`] taxonomy, and the
//! [`RegionSource`] trait through which arenas acquire and release their
//! backing storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod source;

// Public re-exports for the primary API surface.
pub use error::ArenaError;
pub use id::Generation;
pub use source::{RegionSource, SystemSource};
