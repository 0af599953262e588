//! HUD Components
//!
//! This module provides the always-visible HUD elements that render at fixed
//! screen positions using procedural SDL2 primitives.
//!
//! # Architecture
//!
//! HUD components are **stateless rendering components**:
//! - Created once and reused every frame
//! - Driven entirely by values passed into `render()`
//! - No capacity arithmetic of their own (the bag manager owns that)
//!
//! # Available Components
//!
//! - [`CapacityBar`] - Weight/volume fill bar with numeric readout

pub mod capacity_bar;

pub use capacity_bar::{CapacityBar, CapacityBarStyle};
