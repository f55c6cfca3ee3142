//! Nimbus configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nimbus_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("zoom step: {}", config.zoom.step);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BrowserConfig, ShellConfig, WindowConfig, ZoomConfig, CONFIG_SCHEMA_VERSION};

use nimbus_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
