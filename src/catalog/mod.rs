// Catalog module
//
// This module provides the item catalog for the packing simulator:
// - Item definitions loaded from a JSON data file
// - Lenient parsing that coerces malformed rows instead of failing
// - Search matching for the item grid filter

pub mod item;
pub mod loader;

// Re-export main types
pub use item::Item;
pub use loader::{load_catalog, CatalogError};
