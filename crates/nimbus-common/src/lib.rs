pub mod errors;
pub mod events;
pub mod types;

pub use errors::{AuthError, ConfigError, ShellError, SurfaceError};
pub use events::{EventBus, ShellEvent};
pub use types::{Rect, ViewId, WindowId};

pub type Result<T> = std::result::Result<T, ShellError>;
