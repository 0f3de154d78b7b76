//! Wire protocol for the remote signature store
//!
//! The store speaks a status-tagged JSON envelope. Lookups answer with
//! `{"status":"success","data":<svg>}`, `{"status":"not_found"}` or
//! `{"status":<other>,"message":<text>}`; saves answer with
//! `{"status":"success"}` or the same error shape. Replies are decoded into
//! the loose [`ServerReply`] envelope first and then interpreted per request
//! kind, because the two requests read the same fields differently.

use serde::{Deserialize, Serialize};

/// Fallback message when a save is rejected without an explanation.
pub const SAVE_FAILED_FALLBACK: &str = "Failed to save signature.";

/// Fallback message when a confirm-fetch cannot produce the stored drawing.
pub const RETRIEVE_FAILED_FALLBACK: &str = "Could not retrieve saved signature.";

/// The user-id + serialized-drawing pair sent to the store
///
/// Created once at save time and never mutated after send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureEntry {
    pub user_id: String,
    pub svg_data: String,
}

impl SignatureEntry {
    pub fn new(user_id: impl Into<String>, svg_data: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            svg_data: svg_data.into(),
        }
    }
}

/// Raw reply envelope as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerReply {
    pub status: String,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerReply {
    /// Shorthand for a bare status reply
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            data: None,
            message: None,
        }
    }

    /// Interprets this reply as the answer to a lookup request
    pub fn into_lookup(self) -> LookupOutcome {
        match self.status.as_str() {
            "success" => match self.data {
                Some(svg_data) => LookupOutcome::Found { svg_data },
                // A success reply with no payload cannot be rendered.
                None => LookupOutcome::Rejected {
                    message: RETRIEVE_FAILED_FALLBACK.to_string(),
                },
            },
            "not_found" => LookupOutcome::NotFound,
            _ => LookupOutcome::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| RETRIEVE_FAILED_FALLBACK.to_string()),
            },
        }
    }

    /// Interprets this reply as the answer to a save request
    pub fn into_save(self) -> SaveOutcome {
        if self.status == "success" {
            SaveOutcome::Saved
        } else {
            SaveOutcome::Rejected {
                message: self
                    .message
                    .unwrap_or_else(|| SAVE_FAILED_FALLBACK.to_string()),
            }
        }
    }
}

/// Interpreted answer to a lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A stored signature exists; `svg_data` is the serialized drawing
    Found { svg_data: String },
    /// No signature is stored for the queried id
    NotFound,
    /// The store declined the request
    Rejected { message: String },
}

/// Interpreted answer to a save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Rejected { message: String },
}
