//! Submission flow state machine
//!
//! The guided flow is a walk over three views: Identify (enter a user id),
//! Sign (capture a drawing for a known id), Result (display an outcome or a
//! stored signature). Exactly one view is current at a time. Transitions are
//! pure: the controller performs validation and network calls, then feeds
//! the outcomes through [`FlowMachine::apply`], which makes the ordering
//! auditable and testable without a live UI.

/// The currently visible view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FlowView {
    /// Waiting for a user id to check
    #[default]
    Identify,
    /// Capturing a signature for a known id
    Sign(SignState),
    /// Displaying an outcome or a stored signature
    Result(ResultState),
}

impl FlowView {
    /// Returns true when the sign view is current
    pub fn is_sign(&self) -> bool {
        matches!(self, FlowView::Sign(_))
    }
}

/// Transient state of the sign view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignState {
    /// The id being signed for, displayed verbatim as submitted
    pub user_id: String,
}

/// Transient state of the result view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultState {
    pub heading: String,
    pub body: ResultBody,
}

/// What the result view displays under its heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultBody {
    /// A serialized drawing, rendered verbatim
    Signature(String),
    /// A plain informational message
    Notice(String),
    /// A failure description, retryable by starting over
    Error(String),
}

/// Flow transition events, produced by the controller from validated input
/// and completed requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Lookup answered with a stored signature
    LookupSucceeded { user_id: String, svg_data: String },
    /// Lookup answered not_found; the user may sign
    LookupMissed { user_id: String },
    /// A save request is about to be issued
    SaveStarted { user_id: String },
    /// Save acknowledged and the confirm-fetch returned the stored drawing
    SaveConfirmed { user_id: String, svg_data: String },
    /// Save or confirm-fetch failed
    SaveFailed { message: String },
    /// Explicit start-over from the result view
    StartOver,
}

/// State machine for flow view transitions
pub struct FlowMachine;

impl FlowMachine {
    /// Processes a flow event and returns the new view
    ///
    /// Events that make no sense in the current view leave it unchanged;
    /// the controller's busy guards make such events unreachable in
    /// practice, but transitions stay total regardless.
    pub fn apply(current: FlowView, event: FlowEvent) -> FlowView {
        match (current, event) {
            (FlowView::Identify, FlowEvent::LookupSucceeded { user_id, svg_data }) => {
                FlowView::Result(ResultState {
                    heading: format!("Welcome back, {user_id}! You have already signed."),
                    body: ResultBody::Signature(svg_data),
                })
            }

            (FlowView::Identify, FlowEvent::LookupMissed { user_id }) => {
                FlowView::Sign(SignState { user_id })
            }

            // Optimistic transition: the result view shows a provisional
            // message before the save request completes.
            (FlowView::Sign(_), FlowEvent::SaveStarted { user_id }) => {
                FlowView::Result(ResultState {
                    heading: format!("Saving signature for {user_id}..."),
                    body: ResultBody::Notice("Please wait.".to_string()),
                })
            }

            (FlowView::Result(_), FlowEvent::SaveConfirmed { user_id, svg_data }) => {
                FlowView::Result(ResultState {
                    heading: format!("Signature Saved for {user_id}!"),
                    body: ResultBody::Signature(svg_data),
                })
            }

            (FlowView::Result(_), FlowEvent::SaveFailed { message }) => {
                FlowView::Result(ResultState {
                    heading: "An Error Occurred".to_string(),
                    body: ResultBody::Error(format!("Error: {message} Please try again.")),
                })
            }

            (FlowView::Result(_), FlowEvent::StartOver) => FlowView::Identify,

            // Invalid transitions - ignore event
            (view, _) => view,
        }
    }
}
