//! Generational-index arena with stable, generation-checked handles.
//!
//! A [`Pack`] stores elements of one type in dense, contiguous storage and
//! hands out [`Handle`]s instead of positions or references. Removal is
//! O(1) swap-compaction, so positions shift underneath the caller; handles
//! stay correct because every use is re-validated against the pack's
//! indirection table first.
//!
//! # Architecture
//!
//! ```text
//! Pack<T>
//! ├── storage: Vec<T>         dense values (order not meaningful)
//! ├── slots:   Vec<Slot>      id → {position, generation}
//! ├── owners:  Vec<SlotId>    position → id, lockstep with storage
//! └── free:    IndexSet<SlotId>  vacant ids eligible for reuse
//! ```
//!
//! A handle is `{id, generation}`. It is valid iff its id maps to an
//! occupied slot whose generation matches. Reusing an id after removal
//! bumps the slot's generation, so handles to the removed element are
//! detectably stale forever.
//!
//! # Ownership model
//!
//! One pack, one logical owner: no operation blocks, suspends, or locks
//! internally. Handles themselves are plain `Copy` values and may be
//! stored and compared anywhere; resolving one requires access to the
//! owning pack.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
pub mod pack;

// Public re-exports for the primary API surface.
pub use error::PackError;
pub use handle::Handle;
pub use pack::Pack;
pub use slotpack_core::{Generation, SlotId};
