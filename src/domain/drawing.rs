//! Drawing aggregation and SVG document serialization
//!
//! A drawing is the set of strokes collected since the pad was last cleared,
//! with insertion order preserved so serialization is deterministic. The
//! serialized form is a self-contained SVG document with a fixed 400x200
//! canvas wrapping the concatenated stroke markup.

use std::fmt::Write;

use crate::domain::core::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::domain::stroke::Stroke;

/// Stroke color applied to every serialized path.
pub const STROKE_COLOR: &str = "#000";

/// Stroke width applied to every serialized path, in surface units.
pub const STROKE_WIDTH: f32 = 2.0;

/// The full set of strokes composing one signature image
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    /// Creates an empty drawing
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finalized stroke
    ///
    /// Empty strokes are discarded: a path with zero points has no visual
    /// representation and must not appear in the serialized document.
    pub fn push_stroke(&mut self, stroke: Stroke) {
        if !stroke.is_empty() {
            self.strokes.push(stroke);
        }
    }

    /// Number of strokes collected since the last clear
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Returns true if no strokes have been collected
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Strokes in insertion order
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Removes all strokes
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Serializes the drawing as a self-contained SVG document
    ///
    /// # Returns
    /// An `<svg>` element with the fixed canvas dimensions wrapping one
    /// `<path>` per stroke, in insertion order. An empty drawing yields an
    /// empty canvas.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
            CANVAS_WIDTH, CANVAS_HEIGHT
        );
        for stroke in &self.strokes {
            let _ = write!(
                svg,
                "<path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\" stroke-linecap=\"round\"/>",
                stroke.path_data(),
                STROKE_COLOR,
                STROKE_WIDTH
            );
        }
        svg.push_str("</svg>");
        svg
    }
}
