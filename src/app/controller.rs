//! Submission flow controller and coordination layer
//!
//! The controller orchestrates between pointer capture, the signature pad,
//! the flow state machine, and the store transport. It owns all session
//! state as explicit fields; nothing is ambient. The current user id lives
//! inside the view state itself, carried from lookup to sign to result by
//! the flow transitions.
//!
//! Request sequencing is expressed as ordered awaits inside each action
//! method, so the save flow's two requests (save, then confirm-fetch) are
//! strictly ordered by construction. Busy signals live behind an `Arc` so an
//! embedding can read labels and disabled states while a request is in
//! flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::app::state::{FlowEvent, FlowMachine, FlowView};
use crate::client::http::{HttpTransport, SignatureTransport, TransportError};
use crate::client::protocol::{
    LookupOutcome, RETRIEVE_FAILED_FALLBACK, SaveOutcome, SignatureEntry,
};
use crate::config::flow::{FlowConfig, FlowVariant};
use crate::input::pointer::{EventDisposition, PointerEvent, StrokeCapture, SurfaceLocator};
use crate::ui::surface::{DrawingSurface, SignaturePad};

/// Flow-level errors surfaced to the user
#[derive(Debug, Error)]
pub enum FlowError {
    /// Validation: the user id was empty after trimming
    #[error("Please enter a User ID.")]
    EmptyUserId,
    /// Validation: a save was attempted with zero strokes on the pad
    #[error("Please provide a signature first.")]
    EmptyDrawing,
    /// The store declined a request with an explanation
    #[error("Error: {message}")]
    Rejected { message: String },
    /// The request could not complete
    #[error("Fetch Error: {0}")]
    Transport(#[from] TransportError),
    /// The action's previous request is still in flight
    #[error("The {action} action is already in progress")]
    Busy { action: &'static str },
    /// The invoked action belongs to the other flow variant
    #[error("Action not available in the {variant:?} flow variant")]
    VariantMismatch { variant: FlowVariant },
    /// A guided save was invoked outside the sign view
    #[error("No signature capture is in progress")]
    NotSigning,
}

/// Per-action busy indicators, shared with the embedding
///
/// Each action owns one flag, set for the duration of its request chain and
/// cleared in a final step on every path. Acquisition doubles as the
/// re-entry guard that keeps at most one request in flight per action.
#[derive(Debug, Default)]
pub struct BusySignals {
    check: AtomicBool,
    save: AtomicBool,
    load: AtomicBool,
}

impl BusySignals {
    /// True while a lookup triggered from the identify view is in flight
    pub fn check_active(&self) -> bool {
        self.check.load(Ordering::SeqCst)
    }

    /// True while a save (including its confirm-fetch) is in flight
    pub fn save_active(&self) -> bool {
        self.save.load(Ordering::SeqCst)
    }

    /// True while a flat-variant load is in flight
    pub fn load_active(&self) -> bool {
        self.load.load(Ordering::SeqCst)
    }

    /// Label for the check control
    pub fn check_label(&self) -> &'static str {
        if self.check_active() { "Checking..." } else { "Check / Sign" }
    }

    /// Label for the save control
    pub fn save_label(&self) -> &'static str {
        if self.save_active() { "Saving..." } else { "Save Signature" }
    }

    /// The clear control is disabled while a save is in flight
    pub fn clear_enabled(&self) -> bool {
        !self.save_active()
    }

    fn acquire(flag: &AtomicBool) -> bool {
        !flag.swap(true, Ordering::SeqCst)
    }

    fn release(flag: &AtomicBool) {
        flag.store(false, Ordering::SeqCst);
    }
}

/// Terminal outcome of one save-then-confirm sequence
#[derive(Debug)]
enum SaveSequence {
    /// Save acknowledged, confirm-fetch returned the canonical copy
    Confirmed { user_id: String, svg_data: String },
    /// Save or confirm-fetch failed; holds the failure description
    Failed { message: String },
}

/// Inline outcome of a flat-variant action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReport {
    /// Save acknowledged and confirmed; holds the stored drawing
    Saved { svg_data: String },
    /// Load found a stored drawing
    Loaded { svg_data: String },
    /// Load found nothing under the given id
    NotFound,
    /// The action failed; holds the failure description
    Failed { message: String },
}

/// Main submission flow controller
///
/// Generic over the store transport and the surface locator so the whole
/// flow runs in tests against a scripted store and a fixed origin.
pub struct PadController<T, L> {
    transport: T,
    locator: L,
    variant: FlowVariant,
    view: FlowView,
    busy: Arc<BusySignals>,
    pad: SignaturePad,
    capture: StrokeCapture,
}

impl<L: SurfaceLocator> PadController<HttpTransport, L> {
    /// Creates a controller backed by the production HTTP transport
    pub fn with_http(config: FlowConfig, locator: L) -> Self {
        let variant = config.variant;
        Self::new(HttpTransport::new(config.endpoint), locator, variant)
    }
}

impl<T: SignatureTransport, L: SurfaceLocator> PadController<T, L> {
    /// Creates a controller over an arbitrary transport
    pub fn new(transport: T, locator: L, variant: FlowVariant) -> Self {
        Self {
            transport,
            locator,
            variant,
            view: FlowView::default(),
            busy: Arc::new(BusySignals::default()),
            pad: SignaturePad::new(),
            capture: StrokeCapture::new(),
        }
    }

    /// The currently visible view
    pub fn view(&self) -> &FlowView {
        &self.view
    }

    /// The configured view-transition policy
    pub fn variant(&self) -> FlowVariant {
        self.variant
    }

    /// Shared busy indicators for control labels and disabled states
    pub fn busy(&self) -> Arc<BusySignals> {
        Arc::clone(&self.busy)
    }

    /// The signature pad
    pub fn pad(&self) -> &SignaturePad {
        &self.pad
    }

    /// Routes a pointer event to stroke capture
    ///
    /// In the guided variant, drawing input only reaches the pad while the
    /// sign view is current; the flat variant keeps the pad visible at all
    /// times.
    pub fn pointer(&mut self, event: PointerEvent) -> EventDisposition {
        if self.variant == FlowVariant::Guided && !self.view.is_sign() {
            return EventDisposition::Ignored;
        }
        self.capture.handle(event, &self.locator, &mut self.pad)
    }

    /// Wipes the pad; bound to the clear control
    pub fn clear_pad(&mut self) {
        // The clear control is disabled while a save is in flight.
        if !self.busy.clear_enabled() {
            return;
        }
        self.capture.clear(&mut self.pad);
    }

    /// Submits a user id from the identify view and runs the lookup
    ///
    /// # Returns
    /// The new view: result (signature found) or sign (not found). A store
    /// rejection or transport failure is returned as an error and leaves
    /// the identify view current.
    pub async fn submit_user_id(&mut self, raw_id: &str) -> Result<&FlowView, FlowError> {
        self.require_variant(FlowVariant::Guided)?;
        let user_id = validate_user_id(raw_id)?;
        if !BusySignals::acquire(&self.busy.check) {
            return Err(FlowError::Busy { action: "check" });
        }

        info!(%user_id, "checking for an existing signature");
        let result = self.transport.lookup(&user_id).await;
        BusySignals::release(&self.busy.check);

        let outcome = result?.into_lookup();
        match outcome {
            LookupOutcome::Found { svg_data } => {
                self.view = FlowMachine::apply(
                    std::mem::take(&mut self.view),
                    FlowEvent::LookupSucceeded { user_id, svg_data },
                );
            }
            LookupOutcome::NotFound => {
                debug!(%user_id, "no stored signature, opening the pad");
                // Entering the sign view always starts from an empty pad.
                self.capture.clear(&mut self.pad);
                self.view = FlowMachine::apply(
                    std::mem::take(&mut self.view),
                    FlowEvent::LookupMissed { user_id },
                );
            }
            LookupOutcome::Rejected { message } => {
                warn!(%user_id, %message, "store rejected the lookup");
                return Err(FlowError::Rejected { message });
            }
        }
        Ok(&self.view)
    }

    /// Saves the captured signature for the current id
    ///
    /// Validation failures return before any request is issued. Once
    /// validation passes, the flow transitions to a provisional result view
    /// and the save plus confirm-fetch run in strict order; their outcome
    /// (success or failure) lands in the result view rather than in the
    /// returned error. The pad is reset once the flow concludes, regardless
    /// of outcome.
    pub async fn save_signature(&mut self) -> Result<&FlowView, FlowError> {
        self.require_variant(FlowVariant::Guided)?;
        let FlowView::Sign(sign) = &self.view else {
            return Err(FlowError::NotSigning);
        };
        let user_id = sign.user_id.clone();
        if self.pad.stroke_count() == 0 {
            return Err(FlowError::EmptyDrawing);
        }
        if !BusySignals::acquire(&self.busy.save) {
            return Err(FlowError::Busy { action: "save" });
        }

        let entry = SignatureEntry::new(user_id.clone(), self.pad.serialize());
        self.view = FlowMachine::apply(
            std::mem::take(&mut self.view),
            FlowEvent::SaveStarted {
                user_id: user_id.clone(),
            },
        );

        let outcome = self.run_save(entry).await;
        BusySignals::release(&self.busy.save);
        self.capture.clear(&mut self.pad);

        let event = match outcome {
            SaveSequence::Confirmed { user_id, svg_data } => {
                FlowEvent::SaveConfirmed { user_id, svg_data }
            }
            SaveSequence::Failed { message } => FlowEvent::SaveFailed { message },
        };
        self.view = FlowMachine::apply(std::mem::take(&mut self.view), event);
        Ok(&self.view)
    }

    /// Returns to the identify view, clearing all transient state
    ///
    /// The current id lives inside the sign/result view states, so the
    /// transition back to identify discards it along with the displayed
    /// result.
    pub fn start_over(&mut self) -> &FlowView {
        self.capture.clear(&mut self.pad);
        self.view = FlowMachine::apply(std::mem::take(&mut self.view), FlowEvent::StartOver);
        &self.view
    }

    /// Flat-variant save: stores the pad contents under the given id
    ///
    /// Reports inline; the view never changes. Request semantics are
    /// identical to the guided save, confirm-fetch included.
    pub async fn save_as(&mut self, raw_id: &str) -> Result<ActionReport, FlowError> {
        self.require_variant(FlowVariant::Flat)?;
        let user_id = validate_user_id(raw_id)?;
        if self.pad.stroke_count() == 0 {
            return Err(FlowError::EmptyDrawing);
        }
        if !BusySignals::acquire(&self.busy.save) {
            return Err(FlowError::Busy { action: "save" });
        }

        let entry = SignatureEntry::new(user_id, self.pad.serialize());
        let outcome = self.run_save(entry).await;
        BusySignals::release(&self.busy.save);
        self.capture.clear(&mut self.pad);

        Ok(match outcome {
            SaveSequence::Confirmed { svg_data, .. } => ActionReport::Saved { svg_data },
            SaveSequence::Failed { message } => ActionReport::Failed { message },
        })
    }

    /// Flat-variant load: fetches the stored drawing for the given id
    pub async fn load(&mut self, raw_id: &str) -> Result<ActionReport, FlowError> {
        self.require_variant(FlowVariant::Flat)?;
        let user_id = validate_user_id(raw_id)?;
        if !BusySignals::acquire(&self.busy.load) {
            return Err(FlowError::Busy { action: "load" });
        }

        let result = self.transport.lookup(&user_id).await;
        BusySignals::release(&self.busy.load);

        Ok(match result?.into_lookup() {
            LookupOutcome::Found { svg_data } => ActionReport::Loaded { svg_data },
            LookupOutcome::NotFound => ActionReport::NotFound,
            LookupOutcome::Rejected { message } => ActionReport::Failed { message },
        })
    }

    /// Runs the save request and, on acknowledged success, the confirm-fetch
    /// for the same id. The confirm-fetch is never issued before the save
    /// acknowledgment arrives and confirms success.
    async fn run_save(&mut self, entry: SignatureEntry) -> SaveSequence {
        let user_id = entry.user_id.clone();
        info!(%user_id, "saving signature");

        let ack = match self.transport.save(&entry).await {
            Ok(reply) => reply.into_save(),
            Err(err) => {
                warn!(%user_id, %err, "save request failed");
                return SaveSequence::Failed {
                    message: err.to_string(),
                };
            }
        };
        if let SaveOutcome::Rejected { message } = ack {
            warn!(%user_id, %message, "store rejected the save");
            return SaveSequence::Failed { message };
        }

        debug!(%user_id, "save acknowledged, fetching canonical copy");
        let confirmed = match self.transport.lookup(&user_id).await {
            Ok(reply) => reply.into_lookup(),
            Err(err) => {
                warn!(%user_id, %err, "confirm-fetch failed");
                return SaveSequence::Failed {
                    message: err.to_string(),
                };
            }
        };
        match confirmed {
            LookupOutcome::Found { svg_data } => SaveSequence::Confirmed { user_id, svg_data },
            LookupOutcome::NotFound => SaveSequence::Failed {
                message: RETRIEVE_FAILED_FALLBACK.to_string(),
            },
            LookupOutcome::Rejected { message } => SaveSequence::Failed { message },
        }
    }

    fn require_variant(&self, expected: FlowVariant) -> Result<(), FlowError> {
        if self.variant == expected {
            Ok(())
        } else {
            Err(FlowError::VariantMismatch {
                variant: self.variant,
            })
        }
    }
}

/// Trims and validates a submitted user id
fn validate_user_id(raw: &str) -> Result<String, FlowError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FlowError::EmptyUserId);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ResultBody;
    use crate::client::protocol::ServerReply;
    use crate::domain::core::ScreenPoint;
    use crate::input::pointer::FixedOrigin;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Scripted store: pops one pre-programmed reply per request and logs
    /// every request it receives.
    #[derive(Default)]
    struct ScriptedStore {
        replies: RefCell<VecDeque<Result<ServerReply, TransportError>>>,
        requests: RefCell<Vec<String>>,
    }

    impl ScriptedStore {
        fn reply(self, reply: ServerReply) -> Self {
            self.replies.borrow_mut().push_back(Ok(reply));
            self
        }

        fn fail(self) -> Self {
            let err = serde_json::from_str::<ServerReply>("<html>")
                .map_err(|source| TransportError::Decode { source })
                .unwrap_err();
            self.replies.borrow_mut().push_back(Err(err));
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl SignatureTransport for &ScriptedStore {
        async fn lookup(&self, user_id: &str) -> Result<ServerReply, TransportError> {
            self.requests.borrow_mut().push(format!("lookup {user_id}"));
            self.replies.borrow_mut().pop_front().expect("unexpected lookup")
        }

        async fn save(&self, entry: &SignatureEntry) -> Result<ServerReply, TransportError> {
            self.requests
                .borrow_mut()
                .push(format!("save {}", entry.user_id));
            self.replies.borrow_mut().pop_front().expect("unexpected save")
        }
    }

    fn found(svg: &str) -> ServerReply {
        ServerReply {
            status: "success".to_string(),
            data: Some(svg.to_string()),
            message: None,
        }
    }

    fn rejected(message: &str) -> ServerReply {
        ServerReply {
            status: "error".to_string(),
            data: None,
            message: Some(message.to_string()),
        }
    }

    fn guided(store: &ScriptedStore) -> PadController<&ScriptedStore, FixedOrigin> {
        PadController::new(store, FixedOrigin::default(), FlowVariant::Guided)
    }

    fn flat(store: &ScriptedStore) -> PadController<&ScriptedStore, FixedOrigin> {
        PadController::new(store, FixedOrigin::default(), FlowVariant::Flat)
    }

    fn draw_stroke<T: SignatureTransport>(controller: &mut PadController<T, FixedOrigin>) {
        controller.pointer(PointerEvent::Down(ScreenPoint::new(10.0, 10.0)));
        controller.pointer(PointerEvent::Move(ScreenPoint::new(20.0, 15.0)));
        controller.pointer(PointerEvent::Up);
    }

    async fn enter_sign_view<T: SignatureTransport>(
        controller: &mut PadController<T, FixedOrigin>,
    ) {
        controller.submit_user_id("alice").await.unwrap();
        assert!(controller.view().is_sign());
    }

    #[tokio::test]
    async fn found_lookup_shows_payload_unmodified() {
        let store = ScriptedStore::default().reply(found("<svg>stored</svg>"));
        let mut controller = guided(&store);

        controller.submit_user_id("  alice  ").await.unwrap();

        let FlowView::Result(result) = controller.view() else {
            panic!("expected result view");
        };
        assert_eq!(result.heading, "Welcome back, alice! You have already signed.");
        assert_eq!(result.body, ResultBody::Signature("<svg>stored</svg>".to_string()));
        assert_eq!(store.requests(), vec!["lookup alice"]);
        assert!(!controller.busy().check_active());
    }

    #[tokio::test]
    async fn missed_lookup_opens_sign_view_with_id_verbatim() {
        let store = ScriptedStore::default().reply(ServerReply::status("not_found"));
        let mut controller = guided(&store);

        controller.submit_user_id("Bob Marley").await.unwrap();

        assert_eq!(
            controller.view(),
            &FlowView::Sign(crate::app::state::SignState {
                user_id: "Bob Marley".to_string()
            })
        );
        assert!(controller.pad().is_empty());
    }

    #[tokio::test]
    async fn lookup_rejection_stays_in_identify() {
        let store = ScriptedStore::default().reply(rejected("maintenance window"));
        let mut controller = guided(&store);

        let err = controller.submit_user_id("alice").await.unwrap_err();

        assert!(matches!(err, FlowError::Rejected { message } if message == "maintenance window"));
        assert_eq!(controller.view(), &FlowView::Identify);
        assert!(!controller.busy().check_active());
    }

    #[tokio::test]
    async fn lookup_transport_failure_is_recoverable() {
        let store = ScriptedStore::default().fail();
        let mut controller = guided(&store);

        let err = controller.submit_user_id("alice").await.unwrap_err();

        assert!(matches!(err, FlowError::Transport(_)));
        assert_eq!(controller.view(), &FlowView::Identify);
        assert!(!controller.busy().check_active());
    }

    #[tokio::test]
    async fn empty_user_id_never_issues_a_request() {
        let store = ScriptedStore::default();
        let mut controller = guided(&store);

        let err = controller.submit_user_id("   ").await.unwrap_err();

        assert!(matches!(err, FlowError::EmptyUserId));
        assert!(store.requests().is_empty());
    }

    #[tokio::test]
    async fn empty_pad_save_never_issues_a_request() {
        let store = ScriptedStore::default().reply(ServerReply::status("not_found"));
        let mut controller = guided(&store);
        enter_sign_view(&mut controller).await;

        let err = controller.save_signature().await.unwrap_err();

        assert!(matches!(err, FlowError::EmptyDrawing));
        // Only the lookup that opened the sign view.
        assert_eq!(store.requests(), vec!["lookup alice"]);
    }

    #[tokio::test]
    async fn save_then_confirm_displays_canonical_copy() {
        let store = ScriptedStore::default()
            .reply(ServerReply::status("not_found"))
            .reply(ServerReply::status("success"))
            .reply(found("<svg>...</svg>"));
        let mut controller = guided(&store);
        enter_sign_view(&mut controller).await;
        draw_stroke(&mut controller);

        controller.save_signature().await.unwrap();

        let FlowView::Result(result) = controller.view() else {
            panic!("expected result view");
        };
        assert_eq!(result.heading, "Signature Saved for alice!");
        assert_eq!(result.body, ResultBody::Signature("<svg>...</svg>".to_string()));
        assert_eq!(
            store.requests(),
            vec!["lookup alice", "save alice", "lookup alice"]
        );
        assert!(controller.pad().is_empty());
        assert!(!controller.busy().save_active());
    }

    #[tokio::test]
    async fn rejected_save_skips_the_confirm_fetch() {
        let store = ScriptedStore::default()
            .reply(ServerReply::status("not_found"))
            .reply(rejected("disk full"));
        let mut controller = guided(&store);
        enter_sign_view(&mut controller).await;
        draw_stroke(&mut controller);

        controller.save_signature().await.unwrap();

        let FlowView::Result(result) = controller.view() else {
            panic!("expected result view");
        };
        assert_eq!(result.heading, "An Error Occurred");
        let ResultBody::Error(text) = &result.body else {
            panic!("expected error body");
        };
        assert!(text.contains("disk full"));
        assert_eq!(store.requests(), vec!["lookup alice", "save alice"]);
        assert!(controller.pad().is_empty());
        assert!(!controller.busy().save_active());
    }

    #[tokio::test]
    async fn failed_confirm_fetch_surfaces_an_error() {
        let store = ScriptedStore::default()
            .reply(ServerReply::status("not_found"))
            .reply(ServerReply::status("success"))
            .reply(ServerReply::status("not_found"));
        let mut controller = guided(&store);
        enter_sign_view(&mut controller).await;
        draw_stroke(&mut controller);

        controller.save_signature().await.unwrap();

        let FlowView::Result(result) = controller.view() else {
            panic!("expected result view");
        };
        let ResultBody::Error(text) = &result.body else {
            panic!("expected error body");
        };
        assert!(text.contains("Could not retrieve saved signature."));
        assert!(controller.pad().is_empty());
    }

    #[tokio::test]
    async fn start_over_clears_all_transient_state() {
        let store = ScriptedStore::default().reply(found("<svg>stored</svg>"));
        let mut controller = guided(&store);
        controller.submit_user_id("alice").await.unwrap();

        controller.start_over();

        assert_eq!(controller.view(), &FlowView::Identify);
        assert!(controller.pad().is_empty());
    }

    #[tokio::test]
    async fn busy_check_rejects_reentry_without_a_request() {
        let store = ScriptedStore::default();
        let mut controller = guided(&store);
        controller.busy().check.store(true, Ordering::SeqCst);

        let err = controller.submit_user_id("alice").await.unwrap_err();

        assert!(matches!(err, FlowError::Busy { action: "check" }));
        assert!(store.requests().is_empty());
        // The guard must not be cleared by the rejected attempt.
        assert!(controller.busy().check_active());
    }

    #[tokio::test]
    async fn busy_save_rejects_reentry_without_a_request() {
        let store = ScriptedStore::default().reply(ServerReply::status("not_found"));
        let mut controller = guided(&store);
        enter_sign_view(&mut controller).await;
        draw_stroke(&mut controller);
        controller.busy().save.store(true, Ordering::SeqCst);

        let err = controller.save_signature().await.unwrap_err();

        assert!(matches!(err, FlowError::Busy { action: "save" }));
        // Only the lookup that opened the sign view; no save was issued.
        assert_eq!(store.requests(), vec!["lookup alice"]);
        assert!(controller.view().is_sign());
        assert!(controller.busy().save_active());
    }

    #[tokio::test]
    async fn busy_load_rejects_reentry_without_a_request() {
        let store = ScriptedStore::default();
        let mut controller = flat(&store);
        controller.busy().load.store(true, Ordering::SeqCst);

        let err = controller.load("dave").await.unwrap_err();

        assert!(matches!(err, FlowError::Busy { action: "load" }));
        assert!(store.requests().is_empty());
    }

    #[tokio::test]
    async fn drawing_is_ignored_outside_the_sign_view() {
        let store = ScriptedStore::default();
        let mut controller = guided(&store);

        let disposition = controller.pointer(PointerEvent::Down(ScreenPoint::new(5.0, 5.0)));

        assert_eq!(disposition, EventDisposition::Ignored);
        assert!(controller.pad().is_empty());
    }

    #[tokio::test]
    async fn flat_save_reports_inline_without_view_transition() {
        let store = ScriptedStore::default()
            .reply(ServerReply::status("success"))
            .reply(found("<svg>canonical</svg>"));
        let mut controller = flat(&store);
        draw_stroke(&mut controller);

        let report = controller.save_as("carol").await.unwrap();

        assert_eq!(
            report,
            ActionReport::Saved {
                svg_data: "<svg>canonical</svg>".to_string()
            }
        );
        assert_eq!(controller.view(), &FlowView::Identify);
        assert_eq!(store.requests(), vec!["save carol", "lookup carol"]);
        assert!(controller.pad().is_empty());
    }

    #[tokio::test]
    async fn flat_load_reports_not_found_inline() {
        let store = ScriptedStore::default().reply(ServerReply::status("not_found"));
        let mut controller = flat(&store);

        let report = controller.load("dave").await.unwrap();

        assert_eq!(report, ActionReport::NotFound);
        assert_eq!(controller.view(), &FlowView::Identify);
        assert!(!controller.busy().load_active());
    }

    #[tokio::test]
    async fn guided_actions_are_rejected_in_the_flat_variant() {
        let store = ScriptedStore::default();
        let mut controller = flat(&store);

        let err = controller.submit_user_id("alice").await.unwrap_err();

        assert!(matches!(err, FlowError::VariantMismatch { .. }));
        assert!(store.requests().is_empty());
    }

    #[tokio::test]
    async fn busy_labels_follow_the_save_flag() {
        let store = ScriptedStore::default();
        let controller = guided(&store);
        let busy = controller.busy();

        assert_eq!(busy.check_label(), "Check / Sign");
        assert_eq!(busy.save_label(), "Save Signature");
        assert!(busy.clear_enabled());

        busy.save.store(true, Ordering::SeqCst);
        assert_eq!(busy.save_label(), "Saving...");
        assert!(!busy.clear_enabled());
    }

    #[tokio::test]
    async fn clear_pad_wipes_an_active_gesture() {
        let store = ScriptedStore::default().reply(ServerReply::status("not_found"));
        let mut controller = guided(&store);
        enter_sign_view(&mut controller).await;
        controller.pointer(PointerEvent::Down(ScreenPoint::new(1.0, 1.0)));

        controller.clear_pad();

        assert!(controller.pad().is_empty());
    }
}
