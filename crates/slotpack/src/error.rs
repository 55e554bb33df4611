//! Pack-specific error types.

use std::error::Error;
use std::fmt;

use slotpack_core::{Generation, SlotId};

/// Errors from resolving a handle against a pack.
///
/// Every variant is a contract violation on the caller's side; the pack
/// never mutates state on the error path. Returned rather than panicking
/// so misuse is recoverable and testable — the `Index` impls on
/// [`crate::Pack`] convert these into panics for callers who prefer that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackError {
    /// The handle's id was never issued by this pack.
    UnknownSlot {
        /// The out-of-range id.
        id: SlotId,
    },
    /// The handle's slot currently holds no element.
    VacantSlot {
        /// The vacant id.
        id: SlotId,
    },
    /// The slot was reused since the handle was issued.
    StaleHandle {
        /// The slot the handle names.
        id: SlotId,
        /// The generation encoded in the handle.
        handle_generation: Generation,
        /// The slot's current generation.
        current_generation: Generation,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSlot { id } => write!(f, "unknown slot id {id}"),
            Self::VacantSlot { id } => write!(f, "slot {id} is vacant"),
            Self::StaleHandle {
                id,
                handle_generation,
                current_generation,
            } => {
                write!(
                    f,
                    "stale handle for slot {id}: generation {handle_generation}, current {current_generation}"
                )
            }
        }
    }
}

impl Error for PackError {}
