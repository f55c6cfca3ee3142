//! The rendering-surface seam.
//!
//! A [`RenderSurface`] is the opaque native primitive that paints a
//! document. The manager only ever talks to this trait; the production
//! implementation is [`WrySurface`], tests use in-memory fakes.

use nimbus_common::{Rect, SurfaceError};

mod wry_surface;

pub use wry_surface::WrySurface;

/// One-time hook fired when a surface is torn down.
pub type TeardownHook = Box<dyn FnOnce() + Send>;

/// The rendering primitive behind a view.
///
/// All fallible operations return [`SurfaceError`]; callers at the manager
/// layer log and tolerate failures rather than propagating them, since a
/// surface dying mid-operation is an expected race.
pub trait RenderSurface {
    /// Navigate to a URL.
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError>;

    /// The last URL this surface was asked to load (best-effort tracking).
    fn current_url(&self) -> &str;

    /// Place the surface at `bounds` within the parent window.
    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError>;

    /// Attach to (`true`) or detach from (`false`) the window's display
    /// stack.
    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError>;

    /// Grant input focus to the surface.
    fn focus(&self) -> Result<(), SurfaceError>;

    /// Return input focus to the window chrome.
    fn focus_parent(&self) -> Result<(), SurfaceError>;

    /// Mute or unmute audio playback.
    fn set_audio_muted(&mut self, muted: bool) -> Result<(), SurfaceError>;

    /// Apply a zoom factor to rendered content.
    fn set_zoom(&self, factor: f64) -> Result<(), SurfaceError>;

    /// Open the platform print dialog for the current document.
    fn print(&self) -> Result<(), SurfaceError>;

    /// Whether a back navigation is available (best-effort).
    fn can_go_back(&self) -> bool;

    /// Whether a forward navigation is available (best-effort).
    fn can_go_forward(&self) -> bool;

    /// Whether the surface has been torn down.
    fn is_destroyed(&self) -> bool;

    /// Tear the surface down, firing the registered teardown hook exactly
    /// once. Safe to call repeatedly.
    fn destroy(&mut self);

    /// Register the one-time teardown hook. The hook must fire on every
    /// teardown path, including the surface dying on its own.
    fn on_destroyed(&mut self, hook: TeardownHook);
}
