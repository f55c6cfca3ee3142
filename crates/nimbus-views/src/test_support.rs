//! In-memory fakes shared across the crate's tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use nimbus_common::{Rect, SurfaceError, ViewId};
use nimbus_config::ShellConfig;

use crate::auth::AuthPrompt;
use crate::dialogs::{DialogKind, DialogSet, DialogSurface, ZoomIndicator};
use crate::events::ViewEvent;
use crate::manager::{CreateViewDetails, ViewManager};
use crate::surface::{RenderSurface, TeardownHook};

// =============================================================================
// SURFACES
// =============================================================================

/// Everything a fake surface was asked to do.
#[derive(Debug, Default, Clone)]
pub struct SurfaceLog {
    pub visible: bool,
    pub bounds: Option<Rect>,
    pub zoom: Vec<f64>,
    pub muted: bool,
    pub focus_count: u32,
    pub focus_parent_count: u32,
    pub print_count: u32,
    pub destroyed: bool,
}

/// External handle to a fake surface, kept by tests after the box moves
/// into the manager.
pub struct SurfaceHandle {
    pub log: Arc<Mutex<SurfaceLog>>,
    hook: Arc<Mutex<Option<TeardownHook>>>,
}

impl SurfaceHandle {
    /// Simulate the surface dying on its own (engine crash, OS teardown).
    /// Fires the registered teardown hook like the real surface would.
    pub fn kill(&self) {
        {
            let mut log = self.log.lock().unwrap();
            if log.destroyed {
                return;
            }
            log.destroyed = true;
        }
        if let Some(hook) = self.hook.lock().unwrap().take() {
            hook();
        }
    }
}

pub struct MockSurface {
    url: String,
    log: Arc<Mutex<SurfaceLog>>,
    hook: Arc<Mutex<Option<TeardownHook>>>,
    can_go_back: bool,
    can_go_forward: bool,
}

impl MockSurface {
    fn build(url: &str, can_go_back: bool, can_go_forward: bool) -> (Self, SurfaceHandle) {
        // Freshly built surfaces start visible, like a real child webview;
        // the manager is expected to detach them until selected.
        let log = Arc::new(Mutex::new(SurfaceLog {
            visible: true,
            ..Default::default()
        }));
        let hook = Arc::new(Mutex::new(None));
        let handle = SurfaceHandle {
            log: Arc::clone(&log),
            hook: Arc::clone(&hook),
        };
        (
            Self {
                url: url.into(),
                log,
                hook,
                can_go_back,
                can_go_forward,
            },
            handle,
        )
    }

    pub fn with_url(url: &str) -> (Box<dyn RenderSurface>, Arc<Mutex<SurfaceLog>>) {
        let (surface, handle) = Self::build(url, false, false);
        (Box::new(surface), handle.log)
    }

    /// A surface with a kill handle for simulating self-reported death.
    pub fn remote(url: &str) -> (Box<dyn RenderSurface>, SurfaceHandle) {
        let (surface, handle) = Self::build(url, false, false);
        (Box::new(surface), handle)
    }

    pub fn with_history(
        url: &str,
        can_go_back: bool,
        can_go_forward: bool,
    ) -> (Box<dyn RenderSurface>, Arc<Mutex<SurfaceLog>>) {
        let (surface, handle) = Self::build(url, can_go_back, can_go_forward);
        (Box::new(surface), handle.log)
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, SurfaceLog>, SurfaceError> {
        let log = self.log.lock().unwrap();
        if log.destroyed {
            return Err(SurfaceError::Destroyed);
        }
        Ok(log)
    }
}

impl RenderSurface for MockSurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.guard()?;
        self.url = url.to_string();
        Ok(())
    }

    fn current_url(&self) -> &str {
        &self.url
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError> {
        self.guard()?.bounds = Some(bounds);
        Ok(())
    }

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.guard()?.visible = visible;
        Ok(())
    }

    fn focus(&self) -> Result<(), SurfaceError> {
        self.guard()?.focus_count += 1;
        Ok(())
    }

    fn focus_parent(&self) -> Result<(), SurfaceError> {
        self.guard()?.focus_parent_count += 1;
        Ok(())
    }

    fn set_audio_muted(&mut self, muted: bool) -> Result<(), SurfaceError> {
        self.guard()?.muted = muted;
        Ok(())
    }

    fn set_zoom(&self, factor: f64) -> Result<(), SurfaceError> {
        self.guard()?.zoom.push(factor);
        Ok(())
    }

    fn print(&self) -> Result<(), SurfaceError> {
        self.guard()?.print_count += 1;
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }

    fn is_destroyed(&self) -> bool {
        self.log.lock().unwrap().destroyed
    }

    fn destroy(&mut self) {
        {
            let mut log = self.log.lock().unwrap();
            if log.destroyed {
                return;
            }
            log.destroyed = true;
        }
        if let Some(hook) = self.hook.lock().unwrap().take() {
            hook();
        }
    }

    fn on_destroyed(&mut self, hook: TeardownHook) {
        *self.hook.lock().unwrap() = Some(hook);
    }
}

// =============================================================================
// DIALOGS
// =============================================================================

#[derive(Debug, Default)]
pub struct DialogLog {
    pub visible: bool,
    pub raised: u32,
}

struct MockDialog {
    log: Arc<Mutex<DialogLog>>,
    tabs: Arc<Mutex<HashSet<ViewId>>>,
}

impl DialogSurface for MockDialog {
    fn show(&mut self) {
        self.log.lock().unwrap().visible = true;
    }

    fn hide(&mut self) {
        self.log.lock().unwrap().visible = false;
    }

    fn bring_to_top(&mut self) {
        self.log.lock().unwrap().raised += 1;
    }

    fn contains_tab(&self, id: ViewId) -> bool {
        self.tabs.lock().unwrap().contains(&id)
    }
}

struct MockZoomIndicator {
    factors: Arc<Mutex<Vec<f64>>>,
}

impl ZoomIndicator for MockZoomIndicator {
    fn set_zoom_factor(&mut self, factor: f64) {
        self.factors.lock().unwrap().push(factor);
    }
}

/// External handles to every fake dialog in a [`DialogSet`].
pub struct DialogHandles {
    pub overlays: HashMap<DialogKind, Arc<Mutex<DialogLog>>>,
    pub tab_sets: HashMap<DialogKind, Arc<Mutex<HashSet<ViewId>>>>,
    pub preview: Arc<Mutex<DialogLog>>,
    pub zoom: Arc<Mutex<Vec<f64>>>,
}

pub fn make_dialog_set() -> (DialogSet, DialogHandles) {
    let mut overlays = HashMap::new();
    let mut tab_sets = HashMap::new();

    let preview_log = Arc::new(Mutex::new(DialogLog::default()));
    let preview = MockDialog {
        log: Arc::clone(&preview_log),
        tabs: Arc::new(Mutex::new(HashSet::new())),
    };

    let zoom_log = Arc::new(Mutex::new(Vec::new()));
    let zoom = MockZoomIndicator {
        factors: Arc::clone(&zoom_log),
    };

    let set = DialogSet::new(Box::new(preview), Box::new(zoom), |kind| {
        let log = Arc::new(Mutex::new(DialogLog::default()));
        let tabs = Arc::new(Mutex::new(HashSet::new()));
        overlays.insert(kind, Arc::clone(&log));
        tab_sets.insert(kind, Arc::clone(&tabs));
        Box::new(MockDialog { log, tabs })
    });

    (
        set,
        DialogHandles {
            overlays,
            tab_sets,
            preview: preview_log,
            zoom: zoom_log,
        },
    )
}

// =============================================================================
// AUTH
// =============================================================================

struct MockPromptInner {
    urls: Arc<Mutex<Vec<String>>>,
}

impl AuthPrompt for MockPromptInner {
    fn present(&mut self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

pub struct MockPrompt;

impl MockPrompt {
    pub fn new() -> (Box<dyn AuthPrompt>, Arc<Mutex<Vec<String>>>) {
        let urls = Arc::new(Mutex::new(Vec::new()));
        (
            Box::new(MockPromptInner {
                urls: Arc::clone(&urls),
            }),
            urls,
        )
    }
}

// =============================================================================
// MANAGER HELPERS
// =============================================================================

/// A manager over fake dialogs with a typical content size.
pub fn manager() -> (ViewManager, DialogHandles) {
    manager_with_config(&ShellConfig::default())
}

pub fn manager_with_config(config: &ShellConfig) -> (ViewManager, DialogHandles) {
    let (dialogs, handles) = make_dialog_set();
    let mut mgr = ViewManager::new(config, dialogs, false);
    mgr.set_content_size(1280.0, 800.0);
    (mgr, handles)
}

/// Create a view over a fake surface, returning its ID and surface log.
pub fn create_view(mgr: &mut ViewManager, url: &str) -> (ViewId, Arc<Mutex<SurfaceLog>>) {
    let mut slot = None;
    let id = mgr
        .create(&CreateViewDetails::with_url(url), false, true, |_, _| {
            let (surface, log) = MockSurface::with_url(url);
            slot = Some(log);
            Ok(surface)
        })
        .unwrap();
    (id, slot.expect("factory ran"))
}

/// Drain the manager's sink, routing teardown events back into it the way
/// the shell loop does.
pub fn pump(mgr: &mut ViewManager) -> Vec<ViewEvent> {
    let events = mgr.drain_events();
    for event in &events {
        if let ViewEvent::SurfaceDestroyed { id } = event {
            mgr.handle_surface_destroyed(*id);
        }
    }
    events
}
