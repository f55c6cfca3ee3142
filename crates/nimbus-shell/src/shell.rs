//! Window registry and request dispatch.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nimbus_common::{EventBus, Rect, ShellEvent, SurfaceError, ViewId, WindowId};
use nimbus_config::ShellConfig;
use nimbus_views::{
    AuthBroker, AuthPrompt, AuthRequest, CreateViewDetails, Credentials, DialogSet, RenderSurface,
    ViewEvent, ViewManager,
};
use tokio::sync::broadcast;
use tracing::{debug, error, warn};

use crate::requests::{ViewRequest, ViewResponse};

/// Builds a rendering surface for a freshly assigned view ID.
///
/// The production factory closes over the host window handle and builds a
/// wry child webview ([`nimbus_views::WrySurface::build`]); tests supply
/// in-memory fakes.
pub type SurfaceFactory = Box<
    dyn FnMut(
        ViewId,
        &CreateViewDetails,
        Rect,
        Arc<Mutex<Vec<ViewEvent>>>,
    ) -> Result<Box<dyn RenderSurface>, SurfaceError>,
>;

struct WindowState {
    manager: ViewManager,
    auth: AuthBroker,
    factory: SurfaceFactory,
}

impl WindowState {
    fn create_view(
        &mut self,
        details: &CreateViewDetails,
        is_next: bool,
        notify: bool,
    ) -> Option<ViewId> {
        let bounds = self.manager.layout_bounds();
        let factory = &mut self.factory;
        let built = self.manager.create(details, is_next, notify, |id, events| {
            factory(id, details, bounds, events)
        });
        match built {
            Ok(id) => Some(id),
            Err(e) => {
                error!(url = %details.url, error = %e, "failed to create view");
                None
            }
        }
    }
}

/// Routes window-scoped requests to the owning view manager so multiple
/// windows do not interfere, and fans manager events out to shell
/// listeners.
pub struct Shell {
    config: ShellConfig,
    windows: HashMap<WindowId, WindowState>,
    bus: EventBus,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            windows: HashMap::new(),
            bus: EventBus::new(64),
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Subscribe to shell-wide notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.bus.subscribe()
    }

    /// Register a host window, giving it a view manager over `dialogs`,
    /// a credential bridge over `prompt`, and `factory` for building
    /// rendering surfaces.
    pub fn add_window(
        &mut self,
        id: WindowId,
        dialogs: DialogSet,
        prompt: Box<dyn AuthPrompt>,
        factory: SurfaceFactory,
    ) {
        let incognito = self.config.browser.incognito;
        self.insert_window(id, dialogs, prompt, factory, incognito);
    }

    /// Register a window whose views all inherit the incognito flag.
    pub fn add_incognito_window(
        &mut self,
        id: WindowId,
        dialogs: DialogSet,
        prompt: Box<dyn AuthPrompt>,
        factory: SurfaceFactory,
    ) {
        self.insert_window(id, dialogs, prompt, factory, true);
    }

    fn insert_window(
        &mut self,
        id: WindowId,
        dialogs: DialogSet,
        prompt: Box<dyn AuthPrompt>,
        factory: SurfaceFactory,
        incognito: bool,
    ) {
        let manager = ViewManager::new(&self.config, dialogs, incognito);
        let auth = AuthBroker::new(prompt);
        if self
            .windows
            .insert(
                id,
                WindowState {
                    manager,
                    auth,
                    factory,
                },
            )
            .is_some()
        {
            warn!(window = id.0, "window registration replaced an existing one");
        }
        debug!(window = id.0, incognito, "window registered");
    }

    /// Unregister a window, tearing down all of its views.
    pub fn remove_window(&mut self, id: WindowId) {
        let Some(mut state) = self.windows.remove(&id) else {
            return;
        };
        state.manager.clear();
        for event in state.manager.drain_events() {
            if let ViewEvent::SurfaceDestroyed { id: view } = event {
                state.manager.handle_surface_destroyed(view);
                self.bus.publish(ShellEvent::TabClosed { window: id, view });
            }
        }
        debug!(window = id.0, "window unregistered");
    }

    pub fn manager(&self, window: WindowId) -> Option<&ViewManager> {
        self.windows.get(&window).map(|state| &state.manager)
    }

    /// Route a request to the owning window's manager. Requests for an
    /// unknown window are dropped with a warning.
    pub fn dispatch(&mut self, window: WindowId, request: ViewRequest) -> ViewResponse {
        let Some(state) = self.windows.get_mut(&window) else {
            warn!(window = window.0, ?request, "request for unknown window dropped");
            return ViewResponse::None;
        };

        match request {
            ViewRequest::Create { details, is_next } => {
                match state.create_view(&details, is_next, true) {
                    Some(id) => ViewResponse::Created { id },
                    None => ViewResponse::None,
                }
            }
            ViewRequest::CreateMany { details } => {
                let ids = details
                    .iter()
                    .filter_map(|d| state.create_view(d, false, true))
                    .collect();
                ViewResponse::CreatedMany { ids }
            }
            ViewRequest::AddTab { url } => {
                let details = CreateViewDetails::with_url(url);
                state.create_view(&details, true, true);
                ViewResponse::None
            }
            ViewRequest::Print => {
                state.manager.print();
                ViewResponse::None
            }
            ViewRequest::Select { id, focus } => {
                state.manager.select(id, focus);
                if state.manager.selected_id() == Some(id) {
                    self.bus.publish(ShellEvent::TabSelected { window, view: id });
                }
                ViewResponse::None
            }
            ViewRequest::Destroy { id } => {
                state.manager.destroy(id);
                ViewResponse::None
            }
            ViewRequest::SetAudioMuted { id, muted } => {
                state.manager.set_audio_muted(id, muted);
                ViewResponse::None
            }
            ViewRequest::Clear => {
                state.manager.clear();
                ViewResponse::None
            }
            ViewRequest::ChangeZoom { direction } => {
                if state.manager.change_zoom(direction) {
                    ViewResponse::None
                } else {
                    ViewResponse::ZoomRejected
                }
            }
            ViewRequest::ResetZoom => {
                state.manager.reset_zoom();
                ViewResponse::None
            }
        }
    }

    /// Drain a window's pending view events and route them.
    ///
    /// Teardown reports feed back into the manager so map entries are
    /// removed on every teardown path; title reports update the owning
    /// view; tab/title/zoom notifications are republished on the bus.
    /// The drained events are returned so the embedder can wire external
    /// subsystems (extension activation, session restore).
    pub fn pump_events(&mut self, window: WindowId) -> Vec<ViewEvent> {
        let Some(state) = self.windows.get_mut(&window) else {
            return Vec::new();
        };
        let events = state.manager.drain_events();
        for event in &events {
            match event {
                ViewEvent::SurfaceDestroyed { id } => {
                    state.manager.handle_surface_destroyed(*id);
                    self.bus
                        .publish(ShellEvent::TabClosed { window, view: *id });
                }
                ViewEvent::TitleChanged { id, title } => {
                    state.manager.handle_title_changed(*id, title.clone());
                }
                ViewEvent::TabCreated { id, url, .. } => {
                    self.bus.publish(ShellEvent::TabCreated {
                        window,
                        view: *id,
                        url: url.clone(),
                    });
                }
                ViewEvent::WindowTitleChanged { title } => {
                    self.bus.publish(ShellEvent::TitleChanged {
                        window,
                        title: title.clone(),
                    });
                }
                ViewEvent::ZoomBroadcast {
                    factor,
                    show_dialog,
                } => {
                    self.bus.publish(ShellEvent::ZoomChanged {
                        window,
                        factor: *factor,
                        show_dialog: *show_dialog,
                    });
                }
                _ => {}
            }
        }
        events
    }

    /// The host window reported a new content size.
    pub fn handle_resize(&mut self, window: WindowId, width: f64, height: f64) {
        if let Some(state) = self.windows.get_mut(&window) {
            state.manager.set_content_size(width, height);
        }
    }

    /// The host window entered or left fullscreen.
    pub fn set_fullscreen(&mut self, window: WindowId, fullscreen: bool) {
        if let Some(state) = self.windows.get_mut(&window) {
            state.manager.set_fullscreen(fullscreen);
        }
    }

    /// Present the window's auth prompt for `url` and suspend until a
    /// response event arrives. Returns `None` for an unknown window.
    pub fn request_auth(&mut self, window: WindowId, url: &str) -> Option<AuthRequest> {
        self.windows
            .get_mut(&window)
            .map(|state| state.auth.request(url))
    }

    /// Deliver a credential response event to the window's pending
    /// request, if any.
    pub fn resolve_auth(&mut self, window: WindowId, credentials: Credentials) -> bool {
        self.windows
            .get_mut(&window)
            .map(|state| state.auth.resolve(credentials))
            .unwrap_or(false)
    }
}
