//! Strongly-typed identifiers.

use std::fmt;

/// Counts how many bulk resets an arena has performed.
///
/// Every allocation handle records the generation it was minted in. A bulk
/// reset advances the arena's generation, so comparing a handle's tag
/// against the arena's current value is an O(1) staleness check without
/// any per-allocation bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation of a freshly created arena.
    pub const ZERO: Generation = Generation(0);

    /// The generation following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
