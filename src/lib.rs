//! Public IP address discovery through plain-text IP echo services.

pub mod functions;
pub mod settings;
pub mod utility;
