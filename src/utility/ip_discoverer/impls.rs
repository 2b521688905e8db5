// Standard library
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

// 3rd party crates
use tracing::{debug, error, trace};
use url::Url;

// Current module imports
use super::constants::{DEFAULT_PROVIDERS, REQUEST_TIMEOUT_SECS};
use super::errors::DiscoveryError;
use super::types::IpDiscoverer;

impl IpDiscoverer {
    /// Creates a discoverer over the given providers.
    ///
    /// Providers are validated in order and the first malformed URL is reported.
    pub fn new<I, S>(providers: I) -> Result<Self, DiscoveryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let providers: Vec<String> = providers.into_iter().map(Into::into).collect();

        if providers.is_empty() {
            return Err(DiscoveryError::EmptyProviders);
        }

        for provider in &providers {
            Url::parse(provider).map_err(|e| {
                error!(provider = %provider, "Invalid provider URL: {}", e);
                DiscoveryError::InvalidUrl {
                    url: provider.clone(),
                    error: e,
                }
            })?;
        }

        let client = Self::build_client()?;

        debug!("IP discoverer ready with {} provider(s)", providers.len());

        Ok(Self {
            providers,
            index: 0,
            client,
        })
    }

    /// Creates a discoverer over the built-in provider list.
    pub fn with_default_providers() -> Result<Self, DiscoveryError> {
        Self::new(DEFAULT_PROVIDERS)
    }

    /// Builds the HTTP client shared by every request of this discoverer.
    ///
    /// Binding the local side to the IPv4 wildcard makes the connector skip
    /// every IPv6 address a host resolves to.
    fn build_client() -> Result<reqwest::Client, DiscoveryError> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .use_rustls_tls()
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                DiscoveryError::HttpClient(e)
            })
    }

    /// Returns a copy of the provider list in rotation order.
    pub fn providers(&self) -> Vec<String> {
        self.providers.clone()
    }

    pub(crate) fn next_provider(&mut self) -> String {
        let provider = self.providers[self.index].clone();
        self.index = (self.index + 1) % self.providers.len();

        provider
    }

    /// Queries the next provider in rotation and parses its answer.
    ///
    /// The cursor moves before the request is sent, so a failed call still
    /// leaves the next call pointed at a different provider.
    pub async fn discover(&mut self) -> Result<IpAddr, DiscoveryError> {
        let provider = self.next_provider();
        debug!(provider = %provider, "Querying IP provider");

        let response = match self.client.get(provider.as_str()).send().await {
            Ok(response) => response,
            Err(e) => return Err(DiscoveryError::NoResponse { provider, error: e }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::StatusCode {
                provider,
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Err(DiscoveryError::InvalidResponse { provider, error: e }),
        };
        trace!(provider = %provider, "Provider answered with {:?}", body);

        match body.trim().parse::<IpAddr>() {
            Ok(ip) => {
                debug!(provider = %provider, "Discovered public IP {}", ip);
                Ok(ip)
            }
            Err(e) => Err(DiscoveryError::ParseResponse { provider, error: e }),
        }
    }
}
