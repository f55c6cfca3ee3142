//! Zoom adjustment and broadcast.

use tracing::{debug, warn};

use crate::events::ViewEvent;

use super::types::{Selection, ViewManager, ZoomDirection};

impl ViewManager {
    /// Step the selected view's zoom factor in `direction`.
    ///
    /// An in-range candidate is applied and announced to that view; an
    /// out-of-range candidate leaves the factor unchanged and returns
    /// `false` so the originating command suppresses its default action.
    /// Either way the (possibly unchanged) factor is then broadcast.
    pub fn change_zoom(&mut self, direction: ZoomDirection) -> bool {
        let Selection::View(id) = self.selection else {
            warn!("zoom change requested with no selection");
            return false;
        };

        let applied = if let Some(view) = self.views.get_mut(&id) {
            let delta = match direction {
                ZoomDirection::In => self.zoom.step,
                ZoomDirection::Out => -self.zoom.step,
            };
            // Factors are rounded to three decimals so repeated steps do
            // not drift past the clamp through float error.
            let candidate = ((view.zoom_factor() + delta) * 1000.0).round() / 1000.0;

            if candidate >= self.zoom.min && candidate <= self.zoom.max {
                if let Err(e) = view.set_zoom_factor(candidate) {
                    warn!(view_id = id.0, factor = candidate, error = %e, "failed to apply zoom");
                }
                self.push_event(ViewEvent::ZoomApplied {
                    id,
                    factor: candidate,
                });
                true
            } else {
                debug!(
                    view_id = id.0,
                    candidate, "zoom change rejected: out of range"
                );
                false
            }
        } else {
            false
        };

        self.emit_zoom_update(true);
        applied
    }

    /// Reset the selected view's zoom factor to 1 and broadcast it.
    pub fn reset_zoom(&mut self) {
        let Selection::View(id) = self.selection else {
            warn!("zoom reset requested with no selection");
            return;
        };

        if let Some(view) = self.views.get_mut(&id) {
            if let Err(e) = view.set_zoom_factor(1.0) {
                warn!(view_id = id.0, error = %e, "failed to reset zoom");
            }
            self.push_event(ViewEvent::ZoomApplied { id, factor: 1.0 });
        }

        self.emit_zoom_update(true);
    }

    /// Send the selected view's factor to the zoom dialog and broadcast
    /// it to window listeners. `show_dialog` lets the receiver decide
    /// whether to surface a transient zoom indicator; selection changes
    /// pass `false` so the indicator updates silently.
    pub fn emit_zoom_update(&mut self, show_dialog: bool) {
        let factor = match self.selected_view() {
            Some(view) => view.zoom_factor(),
            None => {
                debug!("zoom update skipped: no selection");
                return;
            }
        };
        self.dialogs.set_zoom_factor(factor);
        self.push_event(ViewEvent::ZoomBroadcast {
            factor,
            show_dialog,
        });
    }
}
