//! HTTP transport for the signature store
//!
//! [`HttpTransport`] is the production transport. The flow layer only
//! depends on the [`SignatureTransport`] trait, which tests implement with
//! scripted replies.

use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::debug;

use crate::client::protocol::{ServerReply, SignatureEntry};
use crate::config::flow::EndpointConfig;

/// Transport-level failures
///
/// These are the "request could not complete" class of errors: connection
/// problems, non-JSON replies, unencodable payloads. Store-level rejections
/// arrive as successful [`ServerReply`] values instead.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Store reply was not valid JSON: {source}")]
    Decode { source: serde_json::Error },
    #[error("Failed to encode signature entry: {source}")]
    Encode { source: serde_json::Error },
}

/// Asynchronous access to the remote signature store
///
/// One request per call, no retries, no cancellation; callers serialize
/// their own intent (the flow keeps at most one request in flight per
/// action).
pub trait SignatureTransport {
    /// Fetches the stored signature for `user_id`
    fn lookup(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<ServerReply, TransportError>>;

    /// Stores a signature entry
    fn save(
        &self,
        entry: &SignatureEntry,
    ) -> impl Future<Output = Result<ServerReply, TransportError>>;
}

/// Production transport speaking the store's HTTP protocol
///
/// Lookups are GETs with a `userId` query parameter. Saves POST the
/// JSON-encoded entry with a plain-text content declaration, which the
/// store requires to skip its CORS preflight.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: EndpointConfig,
}

impl HttpTransport {
    /// Creates a transport for the configured endpoint
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Creates a transport reusing an existing client
    pub fn with_client(client: reqwest::Client, endpoint: EndpointConfig) -> Self {
        Self { client, endpoint }
    }

    fn decode(body: &str) -> Result<ServerReply, TransportError> {
        serde_json::from_str(body).map_err(|source| TransportError::Decode { source })
    }
}

impl SignatureTransport for HttpTransport {
    async fn lookup(&self, user_id: &str) -> Result<ServerReply, TransportError> {
        debug!(user_id, "looking up stored signature");
        let body = self
            .client
            .get(self.endpoint.url())
            .query(&[("userId", user_id)])
            .send()
            .await?
            .text()
            .await?;
        Self::decode(&body)
    }

    async fn save(&self, entry: &SignatureEntry) -> Result<ServerReply, TransportError> {
        debug!(user_id = %entry.user_id, bytes = entry.svg_data.len(), "saving signature");
        let payload =
            serde_json::to_string(entry).map_err(|source| TransportError::Encode { source })?;
        let body = self
            .client
            .post(self.endpoint.url())
            .header(CONTENT_TYPE, "text/plain")
            .body(payload)
            .send()
            .await?
            .text()
            .await?;
        Self::decode(&body)
    }
}
