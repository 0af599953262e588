// Bag module
//
// This module provides capacity tracking for the packing simulator:
// - Bag manager owning the running weight/volume totals
// - Admissibility checks for prospective additions (preview + commit)
// - Per-unit bag entries that can be removed individually

pub mod entry;
pub mod error;
pub mod manager;

// Re-export main types
pub use entry::{BagEntry, EntryId};
pub use error::BagError;
pub use manager::{BagManager, Preview};
