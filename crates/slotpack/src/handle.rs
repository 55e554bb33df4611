//! Generation-checked references into a pack.
//!
//! A [`Handle`] names a logical element without naming its physical
//! position. It is a plain value: copying, comparing, and hashing need no
//! access to the pack, only resolving does (see [`crate::Pack::get`]).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use slotpack_core::{hash, Generation, SlotId};

/// Opaque, copyable reference to an element in a [`crate::Pack`].
///
/// Two handles are equal iff both id and generation match, so a handle to
/// a removed element never equals the handle issued when its slot is
/// reused. The default handle carries [`SlotId::RESERVED`] and is invalid
/// against every pack.
///
/// The type parameter ties a handle to its element type; it carries no
/// data and imposes no bounds on `T` for `Copy`, `Eq`, or `Hash`.
#[must_use]
pub struct Handle<T> {
    id: SlotId,
    generation: Generation,
    marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(id: SlotId, generation: Generation) -> Self {
        Self {
            id,
            generation,
            marker: PhantomData,
        }
    }

    /// The slot this handle names.
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// The slot generation this handle was issued at.
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

// Manual impls: derives would add `T: Clone` etc. bounds that handles
// must not carry.

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mixed = hash::combine(hash::combine(0, u64::from(self.id.0)), self.generation.0);
        state.write_u64(mixed);
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::new(SlotId::RESERVED, Generation::default())
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .finish()
    }
}

impl<T> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(id={}, gen={})", self.id, self.generation)
    }
}
