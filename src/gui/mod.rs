//! Screen-Space GUI System
//!
//! This module provides UI elements that render at fixed screen positions
//! using procedural SDL2 primitives.
//!
//! # Architecture
//!
//! Screen-space GUI elements:
//! - Use screen coordinates (pixels from screen edges)
//! - Render on top of the HUD layer
//! - Own their interaction geometry: each component both renders its
//!   controls and hit-tests clicks back to domain ids, so a click always
//!   lands on what was drawn
//! - Never mutate bag state themselves; they report intents and the event
//!   loop calls into the bag manager
//!
//! # Available Components
//!
//! - [`ItemGrid`] - Searchable catalog grid
//! - [`ItemModal`] - Item detail overlay with quantity selector
//! - [`BagPanel`] - Bag contents with per-entry delete buttons
//! - [`TimeUpScreen`] - Terminal overlay after countdown expiry

pub mod bag_panel;
pub mod item_grid;
pub mod item_modal;
pub mod time_up;

pub use bag_panel::BagPanel;
pub use item_grid::ItemGrid;
pub use item_modal::{ItemModal, ModalHit};
pub use time_up::TimeUpScreen;
