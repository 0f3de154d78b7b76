//! Drawing surface capability interface
//!
//! Stroke capture drives a rendering target through this trait so the
//! capture logic stays testable independent of any real UI. The crate ships
//! one implementation, [`SignaturePad`], an in-memory surface whose
//! "rendering" is the drawing itself; an embedding that paints to a live
//! canvas implements the same trait and mirrors each call onto its target.

use crate::domain::core::Point;
use crate::domain::drawing::Drawing;
use crate::domain::stroke::Stroke;

/// Capability interface for a surface that renders strokes as they arrive
///
/// Call ordering follows the gesture lifecycle: `begin_stroke`, zero or more
/// `extend_stroke`, then `end_stroke`. `clear` may be called at any time,
/// active gesture or not.
pub trait DrawingSurface {
    /// Starts a new stroke at `position` and renders a zero-length path there
    fn begin_stroke(&mut self, position: Point);

    /// Appends `position` to the active stroke and re-renders its path
    ///
    /// Implementations may assume a stroke is active; capture guarantees it.
    fn extend_stroke(&mut self, position: Point);

    /// Finalizes the active stroke without deleting its rendered path
    fn end_stroke(&mut self);

    /// Removes all rendered strokes and resets the drawing to empty
    fn clear(&mut self);

    /// Number of finalized strokes currently on the surface
    fn stroke_count(&self) -> usize;

    /// Serializes the surface contents as an SVG document
    fn serialize(&self) -> String;
}

/// In-memory signature pad
///
/// Holds the drawing under construction plus the stroke currently being
/// captured. The active stroke joins the drawing only when the gesture ends,
/// but it still counts toward `stroke_count` and serialization so a save
/// issued mid-gesture sees everything drawn so far.
#[derive(Debug, Default)]
pub struct SignaturePad {
    drawing: Drawing,
    active: Option<Stroke>,
}

impl SignaturePad {
    /// Creates an empty pad
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the pad holds no strokes, finalized or active
    pub fn is_empty(&self) -> bool {
        self.drawing.is_empty() && self.active.is_none()
    }

    /// The finalized drawing, without any in-flight stroke
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    fn snapshot(&self) -> Drawing {
        let mut drawing = self.drawing.clone();
        if let Some(active) = &self.active {
            drawing.push_stroke(active.clone());
        }
        drawing
    }
}

impl DrawingSurface for SignaturePad {
    fn begin_stroke(&mut self, position: Point) {
        self.active = Some(Stroke::begin_at(position));
    }

    fn extend_stroke(&mut self, position: Point) {
        if let Some(stroke) = self.active.as_mut() {
            stroke.push(position);
        }
    }

    fn end_stroke(&mut self) {
        if let Some(stroke) = self.active.take() {
            self.drawing.push_stroke(stroke);
        }
    }

    fn clear(&mut self) {
        self.drawing.clear();
        self.active = None;
    }

    fn stroke_count(&self) -> usize {
        self.drawing.stroke_count() + usize::from(self.active.is_some())
    }

    fn serialize(&self) -> String {
        self.snapshot().to_svg()
    }
}
