//! Pointer input handling for stroke capture

pub mod pointer;

pub use pointer::{EventDisposition, FixedOrigin, PointerEvent, StrokeCapture, SurfaceLocator};
