// 3rd party crates
use serde::Deserialize;

// Project imports
use crate::utility::ip_discoverer::constants::default_providers;

// Current module imports
use super::constants::DEFAULT_LOG_LEVEL;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Discovery {
    /// Candidates for the random pick made when no provider is given.
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub discovery: Discovery,
}

/// Settings that passed [`Settings::validate`].
#[derive(Debug, Clone)]
pub struct ValidatedSettings(pub(super) Settings);

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
