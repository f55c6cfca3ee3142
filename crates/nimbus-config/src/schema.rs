//! Configuration schema types for the Nimbus shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with sensible defaults.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// Zoom Config
// =============================================================================

/// Zoom factor policy applied to every view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest allowed zoom factor (valid range: > 0, < max).
    pub min: f64,
    /// Largest allowed zoom factor.
    pub max: f64,
    /// Increment applied per zoom-in/zoom-out request.
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.25,
            max: 3.0,
            step: 0.1,
        }
    }
}

// =============================================================================
// Window Config
// =============================================================================

/// Host window chrome geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Height in logical pixels reserved for the toolbar above the view
    /// when the window is not fullscreen.
    pub toolbar_height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            toolbar_height: 74.0,
        }
    }
}

// =============================================================================
// Browser Config
// =============================================================================

/// Browsing defaults for new views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// URL loaded into a view created without an explicit target.
    pub homepage: String,
    /// Custom user agent string; `None` uses the platform webview default.
    pub user_agent: Option<String>,
    /// Whether new windows start in incognito mode.
    pub incognito: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            homepage: "about:blank".into(),
            user_agent: None,
            incognito: false,
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

/// Root configuration for the shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub zoom: ZoomConfig,
    pub window: WindowConfig,
    pub browser: BrowserConfig,
}
