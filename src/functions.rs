// Standard library
use std::net::IpAddr;

// 3rd party crates
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

// Project imports
use crate::settings::types::Settings;
use crate::utility::ip_discoverer::{DiscoveryError, IpDiscoverer};

/// Picks the providers a single lookup should use.
///
/// An explicit, non-blank provider wins. Otherwise one candidate is chosen
/// uniformly at random; no candidates yields an empty list, which the
/// discoverer rejects.
pub fn select_providers<R>(
    explicit: Option<&str>,
    candidates: &[String],
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    if let Some(provider) = explicit.map(str::trim).filter(|p| !p.is_empty()) {
        debug!(provider = %provider, "Using explicitly requested provider");
        return vec![provider.to_string()];
    }

    match candidates.choose(rng) {
        Some(provider) => {
            debug!(provider = %provider, "Picked random provider");
            vec![provider.clone()]
        }
        None => Vec::new(),
    }
}

/// Resolves the public IP address once.
pub async fn run(provider: Option<&str>, settings: &Settings) -> Result<IpAddr, DiscoveryError> {
    let providers = select_providers(
        provider,
        &settings.discovery.providers,
        &mut rand::thread_rng(),
    );

    let mut discoverer = IpDiscoverer::new(providers)?;

    match discoverer.discover().await {
        Ok(ip) => {
            info!("🧩 Public IP discovered: {}", ip);
            Ok(ip)
        }
        Err(e) => {
            if e.is_retryable() {
                debug!("Provider failed, another one may succeed on a new run");
            }
            Err(e)
        }
    }
}
