//! Core types and constructors for the ViewManager.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nimbus_common::ViewId;
use nimbus_config::{ShellConfig, ZoomConfig};
use serde::{Deserialize, Serialize};

use crate::dialogs::DialogSet;
use crate::events::ViewEvent;
use crate::view::View;

/// Creation parameters for a new view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateViewDetails {
    /// Target URL for the new view.
    pub url: String,
}

impl CreateViewDetails {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Which view, if any, is presented in the window's content area.
///
/// There is no sentinel ID; the empty case is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    None,
    View(ViewId),
}

/// Direction of a zoom adjustment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Owns the live views of one host window and keeps them consistent:
/// exactly one view presented, its geometry correct, every dialog's
/// visibility matching the active tab, zoom changes propagated.
pub struct ViewManager {
    /// All live views by ID.
    pub(super) views: HashMap<ViewId, View>,
    /// The selection state machine.
    pub(super) selection: Selection,
    /// When set, the selected view fills the whole content area.
    pub(super) fullscreen: bool,
    /// Inherited by every view this manager creates.
    incognito: bool,
    /// Last content size (width, height) reported by the host window.
    pub(super) content_size: (f64, f64),
    /// Vertical space reserved for the toolbar when not fullscreen.
    pub(super) toolbar_height: f64,
    /// Zoom clamp policy.
    pub(super) zoom: ZoomConfig,
    /// The window's dialog collection, synchronized on every selection.
    pub(super) dialogs: DialogSet,
    /// Event sink -- events are pushed here for the shell loop to consume.
    pub(super) events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl ViewManager {
    pub fn new(config: &ShellConfig, dialogs: DialogSet, incognito: bool) -> Self {
        Self {
            views: HashMap::new(),
            selection: Selection::None,
            fullscreen: false,
            incognito,
            content_size: (0.0, 0.0),
            toolbar_height: config.window.toolbar_height,
            zoom: config.zoom.clone(),
            dialogs,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    // -- Accessors --

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_id(&self) -> Option<ViewId> {
        match self.selection {
            Selection::None => None,
            Selection::View(id) => Some(id),
        }
    }

    pub fn selected_view(&self) -> Option<&View> {
        self.selected_id().and_then(|id| self.views.get(&id))
    }

    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.views.get(&id)
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(&id)
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn incognito(&self) -> bool {
        self.incognito
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<ViewEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }

    pub(super) fn push_event(&self, event: ViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
