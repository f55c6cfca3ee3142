//! Bounds computation for the selected view.

use nimbus_common::Rect;
use tracing::warn;

use super::types::{Selection, ViewManager};

impl ViewManager {
    /// The rectangle the selected view should occupy given the current
    /// content size and fullscreen state: the full content area when
    /// fullscreen, otherwise offset below the toolbar and shrunk by the
    /// same amount.
    pub fn layout_bounds(&self) -> Rect {
        let (width, height) = self.content_size;
        if self.fullscreen {
            Rect {
                x: 0.0,
                y: 0.0,
                width,
                height,
            }
        } else {
            Rect {
                x: 0.0,
                y: self.toolbar_height,
                width,
                height: height - self.toolbar_height,
            }
        }
    }

    /// Recompute the selected view's placement and apply it to the
    /// surface, caching the rectangle on the view. No-op with nothing
    /// selected.
    ///
    /// Runs on every selection change and fullscreen toggle; the host
    /// window calls it on content-bounds changes via
    /// [`set_content_size`].
    ///
    /// [`set_content_size`]: ViewManager::set_content_size
    pub fn fix_bounds(&mut self) {
        let Selection::View(id) = self.selection else {
            return;
        };
        let bounds = self.layout_bounds();
        if let Some(view) = self.views.get_mut(&id) {
            if let Err(e) = view.apply_bounds(bounds) {
                warn!(view_id = id.0, error = %e, "failed to apply view bounds");
            }
        }
    }

    /// Record a new window content size and refit the selected view.
    pub fn set_content_size(&mut self, width: f64, height: f64) {
        self.content_size = (width, height);
        self.fix_bounds();
    }

    /// Toggle fullscreen presentation; triggers an immediate refit.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        self.fix_bounds();
    }
}
