//! Monitor configuration.
//!
//! Built-in defaults, then an optional HCL file, then command-line
//! overrides; the merged result is validated once.

mod error;
mod loader;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{ConfigOverrides, load_config, parse_config};
pub use types::{LoggingConfig, MonitorConfig, TailConfig};
pub use validate::validate_config;
