/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "MYIP_CONFIG_PATH";

/// Prefix for environment overrides, e.g. `MYIP_LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "MYIP";
pub const ENV_SEPARATOR: &str = "__";

/// Directory and file name under the platform configuration directory.
pub const CONFIG_DIR_NAME: &str = "myip";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Example configuration
pub const EXAMPLE_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "off", "error", "warn", "info", "debug", or "trace"
level = "warn"

# Providers a random one is picked from when --provider is not given.
# Each must answer a GET with the caller's IP address as plain text.
[discovery]
providers = [
    "https://checkip.amazonaws.com",
    "https://ipconfig.io",
    "https://icanhazip.com",
    "https://ifconfig.me",
]
"#;
