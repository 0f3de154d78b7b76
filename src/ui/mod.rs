pub mod renderer;
pub mod surface;

pub use surface::{DrawingSurface, SignaturePad};
