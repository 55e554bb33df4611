//! Indirection entries mapping slot ids to storage positions.

use crate::id::Generation;

/// One entry in a pack's indirection table.
///
/// Maps a stable slot id to the current position of its element in dense
/// storage, or records that the slot is vacant. The vacant state is
/// first-class (`position == None`) rather than a sentinel position.
///
/// The generation is left untouched by [`Slot::vacate`] and bumped by
/// [`Slot::reoccupy`], so it counts completed removal-then-reuse cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Current position of the element in dense storage, `None` if vacant.
    pub position: Option<u32>,
    /// Reuse counter for this slot id.
    pub generation: Generation,
}

impl Slot {
    /// A freshly issued, occupied entry at generation 0.
    pub fn new(position: u32) -> Self {
        Self {
            position: Some(position),
            generation: Generation::default(),
        }
    }

    /// Whether this entry currently maps to no element.
    pub fn is_vacant(&self) -> bool {
        self.position.is_none()
    }

    /// Clear the position, leaving the generation for the next reuse.
    pub fn vacate(&mut self) {
        self.position = None;
    }

    /// Map the entry to a new position and bump the generation.
    pub fn reoccupy(&mut self, position: u32) {
        self.position = Some(position);
        self.generation = self.generation.next();
    }
}
