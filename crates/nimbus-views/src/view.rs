//! A single logical browser tab.

use nimbus_common::{Rect, SurfaceError, ViewId};

use crate::surface::RenderSurface;

/// One rendering surface plus its navigation/zoom/title metadata.
///
/// Owned exclusively by one [`ViewManager`]; dialogs reference it only
/// weakly, by ID.
///
/// [`ViewManager`]: crate::ViewManager
pub struct View {
    id: ViewId,
    surface: Box<dyn RenderSurface>,
    title: String,
    zoom_factor: f64,
    audio_muted: bool,
    bounds: Rect,
    incognito: bool,
}

impl View {
    pub fn new(id: ViewId, surface: Box<dyn RenderSurface>, incognito: bool) -> Self {
        Self {
            id,
            surface,
            title: String::new(),
            zoom_factor: 1.0,
            audio_muted: false,
            bounds: Rect::ZERO,
            incognito,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn url(&self) -> &str {
        self.surface.current_url()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Apply a zoom factor to the surface and record it. The factor is
    /// recorded even when the surface call fails, so a later broadcast
    /// reports what the manager decided rather than what the engine did.
    pub fn set_zoom_factor(&mut self, factor: f64) -> Result<(), SurfaceError> {
        self.zoom_factor = factor;
        self.surface.set_zoom(factor)
    }

    pub fn audio_muted(&self) -> bool {
        self.audio_muted
    }

    pub fn set_audio_muted(&mut self, muted: bool) -> Result<(), SurfaceError> {
        self.audio_muted = muted;
        self.surface.set_audio_muted(muted)
    }

    /// The last layout rectangle applied by the manager's bounds pass.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Cache `bounds` and place the surface there.
    pub fn apply_bounds(&mut self, bounds: Rect) -> Result<(), SurfaceError> {
        self.bounds = bounds;
        self.surface.set_bounds(bounds)
    }

    pub fn incognito(&self) -> bool {
        self.incognito
    }

    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn RenderSurface {
        self.surface.as_mut()
    }
}
