//! Public IP discovery through plain-text IP echo services.
//!
//! An [`IpDiscoverer`] holds an ordered list of provider URLs and asks one of
//! them per call, walking the list round-robin. Each provider must answer an
//! HTTP GET with a 2xx response whose body is nothing but an IP address.
//!
//! Requests go out over IPv4 only and time out after
//! [`REQUEST_TIMEOUT_SECS`](constants::REQUEST_TIMEOUT_SECS) seconds. A
//! failed call is never retried internally; calling
//! [`IpDiscoverer::discover`] again moves on to the next provider.
//!
//! # Example
//!
//! ```no_run
//! use myip::utility::ip_discoverer::IpDiscoverer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut discoverer = IpDiscoverer::new(["https://icanhazip.com"])?;
//! let ip = discoverer.discover().await?;
//! println!("Public IP: {}", ip);
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;


pub use constants::DEFAULT_PROVIDERS;
pub use errors::DiscoveryError;
pub use types::IpDiscoverer;
