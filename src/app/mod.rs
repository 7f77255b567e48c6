//! Engine orchestration layer
//!
//! This module coordinates between the domain, UI and source layers. It
//! holds the load-lifecycle state machine and the engine that owns the
//! drawing surface.

pub mod engine;
pub mod state;

pub use engine::{PointerEvent, RegionMap, REGIONS_ERROR_TEXT};
pub use state::{LoadEvent, Phase};
