//! Cockpit Signal Core
//!
//! A [`Signal`] broadcasts a value to every [`SlotHandle`] attached to it, in
//! attachment order, synchronously. A slot deduplicates: its callback runs
//! only when the value differs from the last one it saw, or when it has been
//! marked dirty (fresh slots start dirty).
//!
//! Slots are shared handles, so a signal keeps every subscriber alive for as
//! long as it can reach it. Wiring must be acyclic: a slot whose callback
//! ends up notifying itself again is detected and skipped (debug builds
//! assert).

mod signal;
mod slot;

pub use signal::Signal;
pub use slot::{Slot, SlotHandle};
