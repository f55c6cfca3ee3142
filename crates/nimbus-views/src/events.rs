//! Events emitted by the view manager for the shell loop to consume.

use nimbus_common::ViewId;

/// Outbound notifications pushed into the manager's event sink.
///
/// The shell drains these once per loop turn and routes them: teardown
/// events feed back into the manager, the rest fan out to window chrome
/// and external subsystems.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A rendering surface came alive. Routed to the extension-activation
    /// subsystem, which registers the surface regardless of `notify`.
    SurfaceCreated { id: ViewId },
    /// A new tab should be announced to the owning window. `is_next`
    /// advises placement next to the current tab.
    TabCreated {
        id: ViewId,
        url: String,
        is_next: bool,
    },
    /// The surface reported its own document title changed.
    TitleChanged { id: ViewId, title: String },
    /// The surface was torn down. The shell must route this back into
    /// [`ViewManager::handle_surface_destroyed`] so the map entry is
    /// removed even when `destroy` was never called.
    ///
    /// [`ViewManager::handle_surface_destroyed`]: crate::ViewManager::handle_surface_destroyed
    SurfaceDestroyed { id: ViewId },
    /// The host window title should be refreshed.
    WindowTitleChanged { title: String },
    /// The bookmark-state indicator should be recomputed for this URL.
    BookmarkStateRefresh { id: ViewId, url: String },
    /// Back/forward/reload availability changed for the active view.
    NavigationStateChanged {
        id: ViewId,
        can_go_back: bool,
        can_go_forward: bool,
    },
    /// A zoom factor was applied to a specific view.
    ZoomApplied { id: ViewId, factor: f64 },
    /// The window-wide zoom broadcast. `show_dialog` tells the receiver
    /// whether to surface a transient zoom indicator.
    ZoomBroadcast { factor: f64, show_dialog: bool },
}
