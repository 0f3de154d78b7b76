//! Pointer event capture for freehand drawing
//!
//! Translates raw pointer input (mouse or single-touch, the distinction is
//! erased before events reach this module) into strokes on a drawing
//! surface. Capture is a two-state machine: quiescent until a down event,
//! active until the matching release.
//!
//! Release events deliberately carry no position: the embedding must listen
//! for them at document scope, because a gesture may end outside the surface
//! bounds, and capture must still finalize the stroke.

use crate::domain::core::ScreenPoint;
use crate::ui::surface::DrawingSurface;

/// Raw pointer input, already unified across mouse and touch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed at a screen position
    Down(ScreenPoint),
    /// Pointer moved to a screen position
    Move(ScreenPoint),
    /// Pointer released, possibly outside the surface
    Up,
}

/// What the embedding should do with the browser/platform default behavior
/// for the event it just forwarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The event produced drawing input; suppress default gesture handling
    /// (page scroll, text selection) for it
    Handled,
    /// The event was not drawing input; let defaults run
    Ignored,
}

/// Provides the surface's current top-left corner in screen coordinates
///
/// Capture queries this on every down and move event rather than caching
/// the origin, so coordinate mapping stays correct across layout and scroll
/// changes between events.
pub trait SurfaceLocator {
    fn origin(&self) -> ScreenPoint;
}

/// A locator for surfaces whose origin never moves
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOrigin(pub ScreenPoint);

impl SurfaceLocator for FixedOrigin {
    fn origin(&self) -> ScreenPoint {
        self.0
    }
}

/// Stroke capture state machine
///
/// Routes pointer events to a [`DrawingSurface`], beginning a stroke on
/// down, extending it on move, and finalizing it on release.
#[derive(Debug, Default)]
pub struct StrokeCapture {
    drawing: bool,
}

impl StrokeCapture {
    /// Creates a quiescent capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a gesture is in progress
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Processes one pointer event against the surface
    ///
    /// # Arguments
    /// * `event` - The pointer event in screen coordinates
    /// * `locator` - Source of the surface's current origin, queried per event
    /// * `surface` - The drawing surface to mutate
    ///
    /// # Returns
    /// Whether the embedding must suppress default handling for the event
    pub fn handle<L, S>(
        &mut self,
        event: PointerEvent,
        locator: &L,
        surface: &mut S,
    ) -> EventDisposition
    where
        L: SurfaceLocator,
        S: DrawingSurface,
    {
        match event {
            PointerEvent::Down(screen) => {
                self.drawing = true;
                surface.begin_stroke(screen.to_surface(locator.origin()));
                EventDisposition::Handled
            }
            PointerEvent::Move(screen) => {
                if !self.drawing {
                    return EventDisposition::Ignored;
                }
                surface.extend_stroke(screen.to_surface(locator.origin()));
                EventDisposition::Handled
            }
            PointerEvent::Up => {
                if !self.drawing {
                    return EventDisposition::Ignored;
                }
                self.drawing = false;
                surface.end_stroke();
                EventDisposition::Ignored
            }
        }
    }

    /// Wipes the surface and drops any in-progress gesture
    ///
    /// Safe to call whether or not a stroke is active.
    pub fn clear<S: DrawingSurface>(&mut self, surface: &mut S) {
        self.drawing = false;
        surface.clear();
    }
}
