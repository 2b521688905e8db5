/// Fallback IP echo endpoints used when no provider is configured explicitly.
pub const DEFAULT_PROVIDERS: [&str; 4] = [
    "https://checkip.amazonaws.com",
    "https://ipconfig.io",
    "https://icanhazip.com",
    "https://ifconfig.me",
];

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

pub fn default_providers() -> Vec<String> {
    DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect()
}
