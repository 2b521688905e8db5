// Standard library
use std::net::AddrParseError;

// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("provider list is empty")]
    EmptyProviders,

    #[error("invalid URL '{url}': {error}")]
    InvalidUrl {
        url: String,
        #[source]
        error: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to get response from provider ({provider}): {error}")]
    NoResponse {
        provider: String,
        #[source]
        error: reqwest::Error,
    },

    #[error("provider returned a non OK status code ({provider}): {status}")]
    StatusCode { provider: String, status: u16 },

    #[error("failed to read IP from provider ({provider}): {error}")]
    InvalidResponse {
        provider: String,
        #[source]
        error: reqwest::Error,
    },

    #[error("failed to parse IP from provider ({provider}): {error}")]
    ParseResponse {
        provider: String,
        #[source]
        error: AddrParseError,
    },
}

impl DiscoveryError {
    /// Whether asking another provider could plausibly succeed.
    ///
    /// Construction errors are configuration problems and never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DiscoveryError::NoResponse { .. }
                | DiscoveryError::StatusCode { .. }
                | DiscoveryError::InvalidResponse { .. }
                | DiscoveryError::ParseResponse { .. }
        )
    }

    /// The provider involved in a failed discovery, if any.
    pub fn provider(&self) -> Option<&str> {
        match self {
            DiscoveryError::NoResponse { provider, .. }
            | DiscoveryError::StatusCode { provider, .. }
            | DiscoveryError::InvalidResponse { provider, .. }
            | DiscoveryError::ParseResponse { provider, .. } => Some(provider),
            DiscoveryError::InvalidUrl { url, .. } => Some(url),
            DiscoveryError::EmptyProviders | DiscoveryError::HttpClient(_) => None,
        }
    }
}
