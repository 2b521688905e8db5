//! Layered configuration: built-in defaults, an optional TOML file and
//! `MYIP_*` environment variables, in increasing precedence.

pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;

pub use errors::{SettingsError, ValidationError};
pub use types::{Settings, ValidatedSettings};
