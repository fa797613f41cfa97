//! Persistence for users, events, schedules and chat rooms.
//!
//! Preference updates are partial: only the keys present in an update are
//! overwritten, at any depth. Chat rooms keep a bounded history, dropping
//! the oldest message when full.

mod error;
mod memory;
mod merge;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use merge::merge;
