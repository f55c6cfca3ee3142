use std::path::PathBuf;

use crate::types::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface backend error: {0}")]
    Backend(String),

    #[error("surface already destroyed")]
    Destroyed,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The pending request was superseded by a newer one, or the prompt
    /// went away before a response arrived.
    #[error("auth request canceled before a response arrived")]
    Canceled,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("zoom.min must be positive".into());
        assert_eq!(
            err.to_string(),
            "config validation error: zoom.min must be positive"
        );
    }

    #[test]
    fn surface_error_display() {
        let err = SurfaceError::Backend("webview creation failed".into());
        assert_eq!(
            err.to_string(),
            "surface backend error: webview creation failed"
        );

        let err = SurfaceError::Destroyed;
        assert_eq!(err.to_string(), "surface already destroyed");
    }

    #[test]
    fn shell_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let shell_err: ShellError = config_err.into();
        assert!(matches!(shell_err, ShellError::Config(_)));
        assert!(shell_err.to_string().contains("bad toml"));
    }

    #[test]
    fn shell_error_from_surface() {
        let surface_err = SurfaceError::Destroyed;
        let shell_err: ShellError = surface_err.into();
        assert!(matches!(shell_err, ShellError::Surface(_)));
    }

    #[test]
    fn shell_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let shell_err: ShellError = io_err.into();
        assert!(matches!(shell_err, ShellError::Io(_)));
        assert!(shell_err.to_string().contains("file missing"));
    }

    #[test]
    fn shell_error_unknown_window() {
        let err = ShellError::UnknownWindow(WindowId(9));
        assert_eq!(err.to_string(), "unknown window: window-9");
    }

    #[test]
    fn auth_error_display() {
        let err = AuthError::Canceled;
        assert!(err.to_string().contains("canceled"));
    }
}
