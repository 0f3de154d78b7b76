//! Raster preview rendering for captured signatures
//!
//! Rasterizes a drawing onto a tiny-skia pixmap, matching the serialized
//! SVG's appearance: black round-capped strokes on the fixed 400x200
//! canvas. Embeddings that cannot host an SVG renderer (thumbnails, image
//! export) use this instead of the vector form.

use thiserror::Error;
use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke as SkiaStroke, Transform};

use crate::domain::core::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::domain::drawing::{Drawing, STROKE_WIDTH};

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("Invalid render scale: {scale}")]
    InvalidScale { scale: f32 },
}

/// Renders drawings to pixmaps
#[derive(Debug, Clone, Default)]
pub struct PadRenderer;

impl PadRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Rasterizes a drawing at the given scale
    ///
    /// # Arguments
    /// * `drawing` - The strokes to render, in insertion order
    /// * `scale` - Output scale factor; 1.0 yields the canvas dimensions
    ///
    /// # Returns
    /// A white-backed pixmap with every stroke painted, or an error if the
    /// scale is not a positive finite number
    pub fn render(&self, drawing: &Drawing, scale: f32) -> Result<Pixmap, RenderError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RenderError::InvalidScale { scale });
        }

        let width = (CANVAS_WIDTH as f32 * scale).round() as u32;
        let height = (CANVAS_HEIGHT as f32 * scale).round() as u32;
        let mut pixmap =
            Pixmap::new(width.max(1), height.max(1)).ok_or(RenderError::PixmapCreationFailed)?;
        pixmap.fill(Color::WHITE);

        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = true;

        let stroke = SkiaStroke {
            width: STROKE_WIDTH * scale,
            line_cap: LineCap::Round,
            ..SkiaStroke::default()
        };
        let transform = Transform::from_scale(scale, scale);

        for captured in drawing.strokes() {
            let mut path_builder = PathBuilder::new();
            for (i, point) in captured.points().iter().enumerate() {
                if i == 0 {
                    path_builder.move_to(point.x as f32, point.y as f32);
                } else {
                    path_builder.line_to(point.x as f32, point.y as f32);
                }
            }
            // A single-point stroke has no extent; draw the round cap as a
            // dot so it stays visible, like a zero-length SVG path does.
            if captured.points().len() == 1 {
                let point = captured.points()[0];
                path_builder.line_to(point.x as f32 + 0.01, point.y as f32);
            }

            if let Some(path) = path_builder.finish() {
                pixmap.stroke_path(&path, &paint, &stroke, transform, None);
            }
        }

        Ok(pixmap)
    }
}
