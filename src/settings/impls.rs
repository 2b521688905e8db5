// Standard library
use std::env;
use std::path::PathBuf;

// 3rd party crates
use config::{Config, Environment, File};
use tracing::{debug, error};

// Project imports
use crate::utility::ip_discoverer::constants::default_providers;

// Current module imports
use super::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV, DEFAULT_LOG_LEVEL, ENV_PREFIX,
    ENV_SEPARATOR, LOG_LEVELS,
};
use super::errors::{SettingsError, ValidationError};
use super::types::{Discovery, Log, Settings, ValidatedSettings};

impl Default for Log {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            providers: default_providers(),
        }
    }
}

impl Settings {
    /// Loads settings from the configuration file (if any) and the environment.
    pub fn load() -> Result<ValidatedSettings, SettingsError> {
        let mut builder = Config::builder();

        match Self::config_path() {
            Some(path) => {
                debug!("Reading configuration from {:?}", path);
                builder = builder.add_source(File::from(path).required(false));
            }
            None => debug!("No configuration directory found, using defaults"),
        }

        let config: Config = builder.add_source(Self::environment()).build()?;

        Self::from_config(config)
    }

    /// Deserializes and validates an already assembled configuration.
    pub fn from_config(config: Config) -> Result<ValidatedSettings, SettingsError> {
        let settings: Settings = config.try_deserialize()?;

        let validated = ValidatedSettings::new(settings).map_err(|e| {
            error!("Configuration validation failed: {}", e);
            e
        })?;

        Ok(validated)
    }

    /// Environment overrides, e.g. `MYIP_DISCOVERY__PROVIDERS=https://a,https://b`.
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("discovery.providers")
    }

    /// Determines the configuration file path.
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Some(PathBuf::from(path))
        } else {
            dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        }
    }

    pub fn get_log_level(&self) -> String {
        self.log.level.to_lowercase()
    }

    pub fn get_providers(&self) -> Vec<String> {
        self.discovery.providers.clone()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !LOG_LEVELS.contains(&self.get_log_level().as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.log.level.clone()));
        }

        // URLs themselves are checked when the discoverer is built.
        if self.discovery.providers.is_empty() {
            return Err(ValidationError::NoProviders);
        }

        Ok(())
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(ValidatedSettings(settings))
    }

    pub fn into_inner(self) -> Settings {
        self.0
    }
}

impl std::ops::Deref for ValidatedSettings {
    type Target = Settings;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat, Map};

    use super::*;
    use crate::settings::constants::EXAMPLE_CONFIG;
    use crate::utility::ip_discoverer::DEFAULT_PROVIDERS;

    fn from_toml(toml: &str) -> Result<ValidatedSettings, SettingsError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap();
        Settings::from_config(config)
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let settings = from_toml("").unwrap();

        assert_eq!(settings.get_log_level(), DEFAULT_LOG_LEVEL);
        assert_eq!(settings.get_providers(), DEFAULT_PROVIDERS.to_vec());
    }

    #[test]
    fn example_config_is_valid() {
        let settings = from_toml(EXAMPLE_CONFIG).unwrap().into_inner();

        assert_eq!(settings.log.level, "warn");
        assert_eq!(settings.discovery.providers.len(), 4);
    }

    #[test]
    fn provider_list_comes_from_file() {
        let settings = from_toml(
            r#"
            [log]
            level = "DEBUG"

            [discovery]
            providers = ["https://ifconfig.me"]
            "#,
        )
        .unwrap();

        assert_eq!(settings.get_log_level(), "debug");
        assert_eq!(settings.get_providers(), vec!["https://ifconfig.me"]);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = from_toml("[log]\nlevel = \"loud\"\n").unwrap_err();

        assert!(matches!(
            err,
            SettingsError::Validation(ValidationError::InvalidLogLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn empty_provider_list_is_rejected() {
        let err = from_toml("[discovery]\nproviders = []\n").unwrap_err();

        assert!(matches!(
            err,
            SettingsError::Validation(ValidationError::NoProviders)
        ));
    }

    #[test]
    fn environment_overrides_file() {
        let mut vars: Map<String, String> = Map::new();
        vars.insert("MYIP_LOG__LEVEL".into(), "trace".into());
        vars.insert(
            "MYIP_DISCOVERY__PROVIDERS".into(),
            "https://icanhazip.com,https://ifconfig.me".into(),
        );

        let config = Config::builder()
            .add_source(File::from_str(EXAMPLE_CONFIG, FileFormat::Toml))
            .add_source(Settings::environment().source(Some(vars)))
            .build()
            .unwrap();
        let settings = Settings::from_config(config).unwrap();

        assert_eq!(settings.get_log_level(), "trace");
        assert_eq!(
            settings.get_providers(),
            vec!["https://icanhazip.com", "https://ifconfig.me"]
        );
    }
}
