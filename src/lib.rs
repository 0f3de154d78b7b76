//! Signature pad capture and submission library.
//!
//! Models a handwritten-signature pad: freehand stroke capture from pointer
//! or touch input, serialization of the captured drawing to a self-contained
//! SVG document, and a lookup/save/confirm submission flow against a remote
//! signature store. The crate is embedding-agnostic: rendering targets plug in
//! through the [`ui::surface::DrawingSurface`] trait and the network sits
//! behind [`client::http::SignatureTransport`], so the capture and flow logic
//! are fully testable without a live UI or endpoint.

pub mod app;
pub mod client;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use app::controller::{ActionReport, BusySignals, FlowError, PadController};
pub use app::state::{FlowEvent, FlowView, ResultBody, ResultState, SignState};
pub use client::http::{HttpTransport, SignatureTransport, TransportError};
pub use client::protocol::{LookupOutcome, SaveOutcome, ServerReply, SignatureEntry};
pub use config::flow::{ConfigError, EndpointConfig, FlowConfig, FlowVariant};
pub use domain::core::{Point, ScreenPoint};
pub use domain::drawing::Drawing;
pub use domain::stroke::Stroke;
pub use input::pointer::{
    EventDisposition, FixedOrigin, PointerEvent, StrokeCapture, SurfaceLocator,
};
pub use ui::renderer::{PadRenderer, RenderError};
pub use ui::surface::{DrawingSurface, SignaturePad};
