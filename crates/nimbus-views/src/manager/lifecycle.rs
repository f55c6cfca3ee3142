//! View creation, destruction, and per-view operations.

use std::sync::{Arc, Mutex};

use nimbus_common::{SurfaceError, ViewId};
use tracing::{debug, info, warn};

use crate::events::ViewEvent;
use crate::surface::RenderSurface;
use crate::view::View;

use super::types::{CreateViewDetails, Selection, ViewManager};

impl ViewManager {
    /// Create a view and register it under a fresh process-unique ID.
    ///
    /// `build` receives the assigned ID and the manager's event sink and
    /// returns the rendering surface (production: a wry child webview;
    /// tests: a fake). The surface starts detached from the display stack.
    ///
    /// A one-time teardown hook is installed so the map entry is removed
    /// when the surface reports destruction, whether or not [`destroy`]
    /// was ever called. The returned ID is immediately valid for
    /// [`select`] and [`destroy`].
    ///
    /// [`select`]: ViewManager::select
    /// [`destroy`]: ViewManager::destroy
    pub fn create<F>(
        &mut self,
        details: &CreateViewDetails,
        is_next: bool,
        notify: bool,
        build: F,
    ) -> Result<ViewId, SurfaceError>
    where
        F: FnOnce(
            ViewId,
            Arc<Mutex<Vec<ViewEvent>>>,
        ) -> Result<Box<dyn RenderSurface>, SurfaceError>,
    {
        let id = ViewId::next();
        let mut surface = build(id, Arc::clone(&self.events))?;

        let events = Arc::clone(&self.events);
        surface.on_destroyed(Box::new(move || {
            if let Ok(mut sink) = events.lock() {
                sink.push(ViewEvent::SurfaceDestroyed { id });
            }
        }));

        if let Err(e) = surface.set_visible(false) {
            warn!(view_id = id.0, error = %e, "failed to detach new surface");
        }

        self.views.insert(id, View::new(id, surface, self.incognito()));

        self.push_event(ViewEvent::SurfaceCreated { id });
        if notify {
            self.push_event(ViewEvent::TabCreated {
                id,
                url: details.url.clone(),
                is_next,
            });
        }

        info!(view_id = id.0, url = %details.url, "view created");
        Ok(id)
    }

    /// Tear down a view's surface.
    ///
    /// A stale ID or an already-dead surface is a silent no-op. The map
    /// entry itself is removed by the teardown hook installed at creation
    /// (routed back through [`handle_surface_destroyed`]), which makes
    /// destruction idempotent across both call paths.
    ///
    /// [`handle_surface_destroyed`]: ViewManager::handle_surface_destroyed
    pub fn destroy(&mut self, id: ViewId) {
        let Some(view) = self.views.get_mut(&id) else {
            debug!(view_id = id.0, "destroy ignored: unknown view");
            return;
        };
        if view.surface().is_destroyed() {
            debug!(view_id = id.0, "destroy ignored: surface already gone");
            return;
        }

        if self.selection == Selection::View(id) {
            if let Err(e) = view.surface().set_visible(false) {
                warn!(view_id = id.0, error = %e, "failed to detach surface");
            }
            self.selection = Selection::None;
        }

        view.surface_mut().destroy();
        info!(view_id = id.0, "view destroyed");
    }

    /// Remove the map entry for a surface that reported destruction.
    ///
    /// The shell routes [`ViewEvent::SurfaceDestroyed`] here; calling it
    /// for an already-removed ID is harmless.
    pub fn handle_surface_destroyed(&mut self, id: ViewId) {
        if self.views.remove(&id).is_some() {
            debug!(view_id = id.0, "view entry removed");
        }
        if self.selection == Selection::View(id) {
            self.selection = Selection::None;
        }
    }

    /// Update a view's tracked title from a surface report, refreshing the
    /// window chrome when the view is the active one.
    pub fn handle_title_changed(&mut self, id: ViewId, title: String) {
        let Some(view) = self.views.get_mut(&id) else {
            return;
        };
        view.set_title(title.clone());
        if self.selection == Selection::View(id) {
            self.push_event(ViewEvent::WindowTitleChanged { title });
        }
    }

    /// Set the audio-mute flag on a view's surface. Stale IDs are a
    /// silent no-op: a tab may close between a UI action being queued
    /// and processed.
    pub fn set_audio_muted(&mut self, id: ViewId, muted: bool) {
        let Some(view) = self.views.get_mut(&id) else {
            debug!(view_id = id.0, "mute ignored: unknown view");
            return;
        };
        if let Err(e) = view.set_audio_muted(muted) {
            warn!(view_id = id.0, muted, error = %e, "failed to set mute");
        }
    }

    /// Print the selected view's document.
    pub fn print(&self) {
        match self.selected_view() {
            Some(view) => {
                if let Err(e) = view.surface().print() {
                    warn!(view_id = view.id().0, error = %e, "print failed");
                }
            }
            None => warn!("print requested with no selection"),
        }
    }

    /// Tear down every tracked view, used for bulk teardown such as
    /// leaving incognito mode or closing the window.
    pub fn clear(&mut self) {
        if let Some(view) = self.selected_view() {
            if let Err(e) = view.surface().set_visible(false) {
                warn!(view_id = view.id().0, error = %e, "failed to detach surface");
            }
        }
        self.selection = Selection::None;

        for view in self.views.values_mut() {
            if !view.surface().is_destroyed() {
                view.surface_mut().destroy();
            }
        }
        self.views.clear();
        self.dialogs.hide_all();
        info!("all views cleared");
    }
}
