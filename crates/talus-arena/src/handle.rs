//! Generation-tagged allocation handles.
//!
//! An [`AllocHandle`] encodes the location of one allocation within an
//! arena as an offset, not a pointer. It is generation-scoped: the tag
//! allows an O(1) staleness check on every access without a lookup table.

use std::fmt;

use talus_core::Generation;

/// Location of one allocation within an [`Arena`](crate::Arena).
///
/// Handles are cheap to copy and carry no liveness of their own — they are
/// resolved to byte views through [`Arena::read`](crate::Arena::read) and
/// [`Arena::write`](crate::Arena::write), which validate the generation
/// tag. A handle that survives a bulk reset resolves to
/// [`ArenaError::StaleHandle`](talus_core::ArenaError::StaleHandle)
/// instead of a view of repurposed bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct AllocHandle {
    /// Arena generation when this allocation was made.
    pub(crate) generation: Generation,
    /// Byte offset within the arena's backing region.
    pub(crate) offset: usize,
    /// Length of the allocation in bytes.
    pub(crate) len: usize,
}

impl AllocHandle {
    /// Create a new handle.
    pub(crate) fn new(generation: Generation, offset: usize, len: usize) -> Self {
        Self {
            generation,
            offset,
            len,
        }
    }

    /// The generation this handle belongs to.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Byte offset of the allocation within the arena.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the allocation in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for AllocHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AllocHandle(gen={}, off={}, len={})",
            self.generation, self.offset, self.len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_round_trip() {
        let h = AllocHandle::new(Generation(42), 1024, 256);
        assert_eq!(h.generation(), Generation(42));
        assert_eq!(h.offset(), 1024);
        assert_eq!(h.len(), 256);
        assert!(!h.is_empty());
    }

    #[test]
    fn empty_handle() {
        let h = AllocHandle::new(Generation::ZERO, 0, 0);
        assert!(h.is_empty());
    }

    #[test]
    fn display_names_all_parts() {
        let h = AllocHandle::new(Generation(3), 16, 8);
        assert_eq!(h.to_string(), "AllocHandle(gen=3, off=16, len=8)");
    }
}
