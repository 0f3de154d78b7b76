//! Stroke data and path serialization
//!
//! A stroke is the product of one continuous pointer-down-to-pointer-up
//! gesture: an ordered, append-only sequence of surface-local points. Its
//! serialized form is an SVG path command string, a "move" to the first
//! point followed by a "line" to each subsequent one.

use std::fmt::Write;

use crate::domain::core::Point;

/// One continuous freehand gesture
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Creates a stroke anchored at its starting point
    pub fn begin_at(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Appends a point to the gesture
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of captured points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the stroke holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Captured points in gesture order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Renders the stroke as SVG path data (`M x y L x y ...`)
    ///
    /// Coordinates use fixed 2-decimal precision to bound serialized size
    /// and keep output stable under floating-point noise. A single-point
    /// stroke yields a bare move command, a zero-length path.
    pub fn path_data(&self) -> String {
        let mut data = String::new();
        for (i, point) in self.points.iter().enumerate() {
            if i == 0 {
                let _ = write!(data, "M {:.2} {:.2}", point.x, point.y);
            } else {
                let _ = write!(data, " L {:.2} {:.2}", point.x, point.y);
            }
        }
        data
    }
}
