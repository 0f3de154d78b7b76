//! Core domain types and operations
//!
//! This module defines the coordinate primitives shared by stroke capture
//! and serialization. All geometry is plain f64 with two distinct frames:
//! screen coordinates (wherever the input device reports positions) and
//! surface-local coordinates (relative to the pad's top-left corner).

/// Fixed width of the serialized signature canvas, in surface units.
pub const CANVAS_WIDTH: u32 = 400;

/// Fixed height of the serialized signature canvas, in surface units.
pub const CANVAS_HEIGHT: u32 = 200;

/// A position in surface-local coordinates
///
/// This is the fundamental building block for strokes. Points are produced
/// by translating screen positions against the surface's current origin and
/// are never stored in any other frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new surface-local point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position in screen coordinates, as reported by the input device
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    /// Creates a new screen-space point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translates this screen position into surface-local coordinates
    ///
    /// # Arguments
    /// * `origin` - The surface's current top-left corner in screen space
    ///
    /// # Returns
    /// The same position expressed relative to the surface
    pub fn to_surface(&self, origin: ScreenPoint) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}
