//! Core domain types and operations
//!
//! This module defines pure geometric primitives that work exclusively with
//! image-pixel coordinates and have no knowledge of the drawing surface or
//! the host environment.

/// A position in the image's natural pixel coordinate system
///
/// This is the fundamental unit of hit testing. Raw pointer offsets are
/// rescaled into this space before any region comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Creates a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Per-axis ratio of the surface's backing resolution to its displayed size
///
/// The backing store is sized to the image's natural dimensions while the
/// displayed size follows the page layout, so the two can differ. The scale
/// is derived fresh from the current layout on every event and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    /// Derives the scale from backing-store and displayed dimensions
    pub fn from_sizes(backing_w: u32, backing_h: u32, display_w: f32, display_h: f32) -> Self {
        Self {
            x: backing_w as f32 / display_w,
            y: backing_h as f32 / display_h,
        }
    }

    /// Maps a raw display-space offset into image-pixel space
    pub fn apply(&self, offset_x: f32, offset_y: f32) -> Point {
        Point::new(offset_x * self.x, offset_y * self.y)
    }
}
