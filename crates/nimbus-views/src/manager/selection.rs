//! The selection state machine and its synchronization protocol.

use nimbus_common::ViewId;
use tracing::{debug, warn};

use crate::events::ViewEvent;

use super::types::{Selection, ViewManager};

impl ViewManager {
    /// Make `id` the presented view and run the full synchronization
    /// sequence: swap the display stack, route input focus, recompute
    /// dialog visibility, refresh window chrome, refit bounds, and
    /// broadcast the zoom factor (silently -- no transient zoom UI).
    ///
    /// Selecting an unknown or already-destroyed ID is a silent no-op;
    /// stale IDs are an expected race. Re-selecting the current ID runs
    /// the whole sequence again, since dialog relevance or geometry may
    /// have changed since the last selection.
    ///
    /// With `focus` false the window chrome keeps keyboard focus, which
    /// covers programmatic switches such as keyboard tab-cycling.
    pub fn select(&mut self, id: ViewId, focus: bool) {
        if !self.views.contains_key(&id) {
            debug!(view_id = id.0, "select ignored: unknown view");
            return;
        }

        if let Selection::View(prev) = self.selection {
            if prev != id {
                if let Some(prev_view) = self.views.get(&prev) {
                    if let Err(e) = prev_view.surface().set_visible(false) {
                        warn!(view_id = prev.0, error = %e, "failed to detach surface");
                    }
                }
            }
        }

        self.selection = Selection::View(id);

        if let Some(view) = self.views.get(&id) {
            if let Err(e) = view.surface().set_visible(true) {
                warn!(view_id = id.0, error = %e, "failed to attach surface");
            }
            let focus_result = if focus {
                view.surface().focus()
            } else {
                view.surface().focus_parent()
            };
            if let Err(e) = focus_result {
                warn!(view_id = id.0, focus, error = %e, "failed to route focus");
            }
        }

        self.dialogs.sync_to(id);
        self.refresh_chrome(id);
        self.fix_bounds();
        self.refresh_navigation_state(id);
        self.emit_zoom_update(false);

        debug!(view_id = id.0, focus, "view selected");
    }

    /// Refresh the window title and the bookmark-state indicator from the
    /// view's current URL and title.
    fn refresh_chrome(&mut self, id: ViewId) {
        let Some(view) = self.views.get(&id) else {
            return;
        };
        let title = view.title().to_string();
        let url = view.url().to_string();
        self.push_event(ViewEvent::WindowTitleChanged { title });
        self.push_event(ViewEvent::BookmarkStateRefresh { id, url });
    }

    /// Refresh back/forward/reload availability indicators.
    fn refresh_navigation_state(&mut self, id: ViewId) {
        let Some(view) = self.views.get(&id) else {
            return;
        };
        self.push_event(ViewEvent::NavigationStateChanged {
            id,
            can_go_back: view.surface().can_go_back(),
            can_go_forward: view.surface().can_go_forward(),
        });
    }
}
