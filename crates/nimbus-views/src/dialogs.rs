//! The fixed set of modal/overlay dialogs synchronized to the active tab.

use std::collections::HashMap;

use nimbus_common::ViewId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every overlay dialog whose visibility tracks the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogKind {
    Find,
    Auth,
    Permissions,
    FormFill,
    Credentials,
}

impl DialogKind {
    pub const ALL: [DialogKind; 5] = [
        DialogKind::Find,
        DialogKind::Auth,
        DialogKind::Permissions,
        DialogKind::FormFill,
        DialogKind::Credentials,
    ];
}

/// Uniform interface over a modal/overlay controller.
///
/// Each dialog keeps its own set of tab IDs it is relevant to; the manager
/// never mutates that set, it only queries it on selection changes.
pub trait DialogSurface {
    fn show(&mut self);
    fn hide(&mut self);
    fn bring_to_top(&mut self);
    fn contains_tab(&self, id: ViewId) -> bool;
}

/// The zoom indicator surface, fed the active view's factor on every
/// selection change and zoom adjustment.
pub trait ZoomIndicator {
    fn set_zoom_factor(&mut self, factor: f64);
}

/// The fixed named collection of dialogs owned by one window.
pub struct DialogSet {
    overlays: HashMap<DialogKind, Box<dyn DialogSurface>>,
    preview: Box<dyn DialogSurface>,
    zoom: Box<dyn ZoomIndicator>,
}

impl DialogSet {
    /// Build the set, instantiating one overlay per [`DialogKind`].
    pub fn new(
        preview: Box<dyn DialogSurface>,
        zoom: Box<dyn ZoomIndicator>,
        mut overlay: impl FnMut(DialogKind) -> Box<dyn DialogSurface>,
    ) -> Self {
        let overlays = DialogKind::ALL
            .into_iter()
            .map(|kind| (kind, overlay(kind)))
            .collect();
        Self {
            overlays,
            preview,
            zoom,
        }
    }

    /// Recompute every dialog's visibility for the newly selected tab.
    ///
    /// Visibility is a pure function of (selection, per-dialog tab set):
    /// relevant dialogs are shown and raised, the rest hidden. The preview
    /// dialog is always hidden on a tab switch.
    pub fn sync_to(&mut self, id: ViewId) {
        self.preview.hide();
        for kind in DialogKind::ALL {
            if let Some(dialog) = self.overlays.get_mut(&kind) {
                if dialog.contains_tab(id) {
                    dialog.show();
                    dialog.bring_to_top();
                } else {
                    dialog.hide();
                }
            }
        }
        debug!(view_id = id.0, "dialog set synchronized");
    }

    /// Hide everything, used for bulk teardown.
    pub fn hide_all(&mut self) {
        self.preview.hide();
        for dialog in self.overlays.values_mut() {
            dialog.hide();
        }
    }

    pub fn set_zoom_factor(&mut self, factor: f64) {
        self.zoom.set_zoom_factor(factor);
    }
}
