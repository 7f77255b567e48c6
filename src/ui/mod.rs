//! Drawing surface and text rendering
//!
//! This module owns everything that touches pixels: the pixmap-backed
//! surface the engine draws on and the glyph rasterization used for the
//! error banner.

pub mod surface;
pub mod text;

pub use surface::{Surface, SurfaceError};
pub use text::FontError;
