//! Range validation for loaded configs.

use nimbus_common::ConfigError;

use crate::schema::ShellConfig;

/// Validate a config, returning the first violation found.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let zoom = &config.zoom;
    if zoom.min <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "zoom.min must be positive, got {}",
            zoom.min
        )));
    }
    if zoom.min >= zoom.max {
        return Err(ConfigError::ValidationError(format!(
            "zoom.min ({}) must be below zoom.max ({})",
            zoom.min, zoom.max
        )));
    }
    if zoom.step <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "zoom.step must be positive, got {}",
            zoom.step
        )));
    }
    if zoom.step > zoom.max - zoom.min {
        return Err(ConfigError::ValidationError(format!(
            "zoom.step ({}) exceeds the zoom range ({}..{})",
            zoom.step, zoom.min, zoom.max
        )));
    }

    if config.window.toolbar_height < 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "window.toolbar_height must not be negative, got {}",
            config.window.toolbar_height
        )));
    }

    if config.browser.homepage.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "browser.homepage must not be empty".into(),
        ));
    }

    Ok(())
}
