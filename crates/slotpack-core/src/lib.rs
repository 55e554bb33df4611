//! Core types for the slotpack generational arena.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the building blocks a pack is assembled from: slot identifiers,
//! generation counters, indirection entries, and hash mixing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hash;
pub mod id;
pub mod slot;

pub use id::{Generation, SlotId};
pub use slot::Slot;
