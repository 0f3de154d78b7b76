//! Static configuration for the submission flow

use thiserror::Error;

/// View-transition policy for the submission flow
///
/// Two deployments of the same pad exist in the wild and differ only here:
/// the guided flow walks the user through identify/sign/result views, while
/// the flat layout keeps everything on one screen with independent save and
/// load actions. Capture and request semantics are identical in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowVariant {
    /// Identify -> Sign -> Result walkthrough; the primary contract
    #[default]
    Guided,
    /// Single view with inline save/load actions, no view transitions
    Flat,
}

/// Address of the remote signature store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    url: String,
}

impl EndpointConfig {
    /// Creates an endpoint configuration
    ///
    /// # Arguments
    /// * `url` - Base URL of the store; lookups append a `userId` query
    ///   parameter, saves POST to it directly
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyEndpointUrl);
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ConfigError::UnsupportedScheme {
                url: trimmed.to_string(),
            });
        }
        Ok(Self {
            url: trimmed.to_string(),
        })
    }

    /// The configured base URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Complete flow configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub endpoint: EndpointConfig,
    pub variant: FlowVariant,
}

impl FlowConfig {
    /// Guided-flow configuration for the given endpoint
    pub fn guided(endpoint: EndpointConfig) -> Self {
        Self {
            endpoint,
            variant: FlowVariant::Guided,
        }
    }

    /// Flat-layout configuration for the given endpoint
    pub fn flat(endpoint: EndpointConfig) -> Self {
        Self {
            endpoint,
            variant: FlowVariant::Flat,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Endpoint URL must not be empty")]
    EmptyEndpointUrl,
    #[error("Endpoint URL must be http(s): {url}")]
    UnsupportedScheme { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_is_trimmed() {
        let endpoint = EndpointConfig::new("  https://store.example/exec  ").unwrap();
        assert_eq!(endpoint.url(), "https://store.example/exec");
    }

    #[test]
    fn empty_url_is_rejected() {
        assert!(matches!(
            EndpointConfig::new("   "),
            Err(ConfigError::EmptyEndpointUrl)
        ));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!(matches!(
            EndpointConfig::new("ftp://store.example"),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn default_variant_is_guided() {
        assert_eq!(FlowVariant::default(), FlowVariant::Guided);
    }
}
