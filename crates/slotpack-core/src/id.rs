//! Strongly-typed slot identifiers and generation counters.

use std::fmt;

/// Identifies a slot in a pack's indirection table.
///
/// Slot ids are issued sequentially by a pack and reused after removal.
/// An id alone does not distinguish "the same slot, a different logical
/// element" — that is the job of [`Generation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u32);

impl SlotId {
    /// Reserved id that no pack ever issues.
    ///
    /// Carried by default-constructed handles so they fail every bounds
    /// check and compare unequal to every issued handle.
    pub const RESERVED: SlotId = SlotId(u32::MAX);

    /// The id as a table index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Per-slot reuse counter.
///
/// Starts at 0 when a slot id is first issued and increments exactly once
/// each time the id is reused after a removal. Monotonic for the lifetime
/// of the owning pack; 64 bits wide, so exhaustion is unreachable in
/// practice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The counter after one more reuse cycle.
    #[must_use]
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
