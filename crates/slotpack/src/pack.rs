//! Dense element storage with id/generation indirection.
//!
//! [`Pack`] is the arena type. Elements live in a contiguous `Vec<T>`
//! that is compacted on every removal (swap-remove), so physical
//! positions are unstable. Stability is provided one level up:
//! the indirection table maps issued ids to current positions, and the
//! `owners` table maps positions back to ids so the swap fixup is O(1).
//!
//! The removal lifecycle for slot `s` holding the element at position `p`:
//! 1. swap-remove position `p` from `storage` and `owners`
//! 2. if something was moved into `p`, rewrite its slot's position
//! 3. vacate `s` (generation stays) and add `s` to the free set
//!
//! A later insert pops `s` from the free set and reoccupies it, bumping
//! the generation; handles issued before the removal stay stale forever.

use std::ops;

use indexmap::IndexSet;

use slotpack_core::{Slot, SlotId};

use crate::error::PackError;
use crate::handle::Handle;

/// Generational-index arena over elements of type `T`.
///
/// All operations are synchronous and assume a single logical owner per
/// pack; wrap the whole pack in a lock if it must cross threads. Handles
/// are issued by [`Pack::insert`] and re-validated on every use — see the
/// crate docs for the validity rules.
#[derive(Clone, Debug)]
pub struct Pack<T> {
    /// Dense element storage. Order changes across removals.
    storage: Vec<T>,
    /// Indirection table, indexed by slot id.
    slots: Vec<Slot>,
    /// Owning slot id for each storage position, lockstep with `storage`.
    owners: Vec<SlotId>,
    /// Ids whose slot is vacant and eligible for reuse.
    free: IndexSet<SlotId>,
}

impl<T> Pack<T> {
    /// Create an empty pack.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            slots: Vec::new(),
            owners: Vec::new(),
            free: IndexSet::new(),
        }
    }

    /// Create an empty pack with room for `capacity` elements before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            owners: Vec::with_capacity(capacity),
            free: IndexSet::new(),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the pack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of slot ids ever issued (occupied + vacant).
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of vacant ids available for reuse.
    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Insert an element and return its handle.
    ///
    /// Reuses a vacant slot id when one exists (its generation is bumped)
    /// and issues a fresh id at generation 0 otherwise. Never fails.
    pub fn insert(&mut self, value: T) -> Handle<T> {
        let position = self.storage.len() as u32;
        self.storage.push(value);

        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.index()].reoccupy(position);
                id
            }
            None => {
                // u32::MAX ids would exhaust memory long before this trips.
                debug_assert!(self.slots.len() < SlotId::RESERVED.index());
                let id = SlotId(self.slots.len() as u32);
                self.slots.push(Slot::new(position));
                id
            }
        };
        self.owners.push(id);

        Handle::new(id, self.slots[id.index()].generation)
    }

    /// Remove the element `handle` refers to and return it.
    ///
    /// O(1): the last element is swapped into the freed position and its
    /// slot entry rewritten. Every other valid handle keeps resolving to
    /// the same logical element; `handle` (and any copy of it) is stale
    /// from here on, including after the slot id is reused.
    ///
    /// Returns the error unchanged, mutating nothing, if `handle` is not
    /// currently valid. Misuse is never silently ignored.
    pub fn remove(&mut self, handle: Handle<T>) -> Result<T, PackError> {
        let position = self.locate(handle)?;

        let value = self.storage.swap_remove(position);
        self.owners.swap_remove(position);
        if position < self.owners.len() {
            // The old last element moved into `position`; point its slot there.
            let moved = self.owners[position];
            self.slots[moved.index()].position = Some(position as u32);
        }

        self.slots[handle.id().index()].vacate();
        self.free.insert(handle.id());
        Ok(value)
    }

    /// Resolve a handle to a shared reference.
    pub fn get(&self, handle: Handle<T>) -> Result<&T, PackError> {
        let position = self.locate(handle)?;
        Ok(&self.storage[position])
    }

    /// Resolve a handle to an exclusive reference.
    pub fn get_mut(&mut self, handle: Handle<T>) -> Result<&mut T, PackError> {
        let position = self.locate(handle)?;
        Ok(&mut self.storage[position])
    }

    /// Whether `handle` currently resolves to a live element.
    ///
    /// Pure and side-effect free: true iff the id is in bounds, its slot
    /// is occupied, and the generations match.
    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.locate(handle).is_ok()
    }

    /// Handle for the current occupant of slot `id`.
    ///
    /// Unlike [`Pack::contains`], no generation is needed up front: this
    /// answers "who lives at `id` right now". Returns `None` for ids that
    /// were never issued or are currently vacant; neither is an error.
    pub fn find(&self, id: SlotId) -> Option<Handle<T>> {
        let slot = self.slots.get(id.index())?;
        slot.position?;
        Some(Handle::new(id, slot.generation))
    }

    /// Insert a copy of the element `handle` refers to.
    ///
    /// The copy is an independent element with its own handle; mutating
    /// one never affects the other. Fails like [`Pack::get`] if `handle`
    /// is not currently valid.
    pub fn duplicate(&mut self, handle: Handle<T>) -> Result<Handle<T>, PackError>
    where
        T: Clone,
    {
        let position = self.locate(handle)?;
        let copy = self.storage[position].clone();
        Ok(self.insert(copy))
    }

    /// Iterate over live elements with their current handles.
    ///
    /// Walks dense storage in order; the order is not meaningful and
    /// changes across removals.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.owners
            .iter()
            .zip(self.storage.iter())
            .map(|(&id, value)| (Handle::new(id, self.slots[id.index()].generation), value))
    }

    /// Iterate over live elements mutably with their current handles.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle<T>, &mut T)> {
        let slots = &self.slots;
        self.owners
            .iter()
            .zip(self.storage.iter_mut())
            .map(move |(&id, value)| (Handle::new(id, slots[id.index()].generation), value))
    }

    /// Iterate over live elements.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.storage.iter()
    }

    /// Iterate over live elements mutably.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.storage.iter_mut()
    }

    /// Map a handle to its storage position, checking validity.
    fn locate(&self, handle: Handle<T>) -> Result<usize, PackError> {
        let id = handle.id();
        let slot = self
            .slots
            .get(id.index())
            .ok_or(PackError::UnknownSlot { id })?;
        let position = slot.position.ok_or(PackError::VacantSlot { id })?;
        if slot.generation != handle.generation() {
            return Err(PackError::StaleHandle {
                id,
                handle_generation: handle.generation(),
                current_generation: slot.generation,
            });
        }
        Ok(position as usize)
    }
}

impl<T> Default for Pack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panicking resolve, for callers who treat an invalid handle as a bug.
///
/// Panics with the [`PackError`] message when the handle fails validation.
impl<T> ops::Index<Handle<T>> for Pack<T> {
    type Output = T;

    fn index(&self, handle: Handle<T>) -> &T {
        match self.get(handle) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Panicking mutable resolve, see the `Index` impl.
impl<T> ops::IndexMut<Handle<T>> for Pack<T> {
    fn index_mut(&mut self, handle: Handle<T>) -> &mut T {
        match self.get_mut(handle) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
