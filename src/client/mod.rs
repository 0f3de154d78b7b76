//! Remote signature store client
//!
//! Wire types for the store's JSON protocol and the HTTP transport that
//! speaks it. The transport sits behind a trait so the submission flow can
//! be exercised against a scripted store in tests.

pub mod http;
pub mod protocol;

pub use http::{HttpTransport, SignatureTransport, TransportError};
pub use protocol::{LookupOutcome, SaveOutcome, ServerReply, SignatureEntry};
