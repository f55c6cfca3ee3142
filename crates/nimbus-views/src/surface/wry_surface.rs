//! Production surface backed by a `wry` child webview.

use std::sync::{Arc, Mutex};

use nimbus_common::{Rect, SurfaceError, ViewId};
use tracing::debug;
use wry::{raw_window_handle, WebView, WebViewBuilder};

use crate::events::ViewEvent;
use crate::manager::CreateViewDetails;

use super::{RenderSurface, TeardownHook};

fn backend(e: wry::Error) -> SurfaceError {
    SurfaceError::Backend(e.to_string())
}

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// A view's rendering surface, built as a child webview of the host window.
///
/// URL and navigation availability are best-effort tracking: they follow the
/// loads this surface was asked to perform, not the engine's own history.
pub struct WrySurface {
    webview: Option<WebView>,
    current_url: String,
    loads: usize,
    hook: Option<TeardownHook>,
}

impl WrySurface {
    /// Build a surface as a child of `window`, positioned at `bounds`,
    /// detached from the display stack until the manager selects it.
    ///
    /// Title changes reported by the engine are pushed into `events` so the
    /// shell loop can route them back to the owning view.
    pub fn build<W: raw_window_handle::HasWindowHandle>(
        id: ViewId,
        window: &W,
        bounds: Rect,
        details: &CreateViewDetails,
        user_agent: Option<&str>,
        incognito: bool,
        events: Arc<Mutex<Vec<ViewEvent>>>,
    ) -> Result<Self, SurfaceError> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(rect_to_wry(&bounds))
            .with_incognito(incognito)
            .with_focused(false)
            .with_visible(false)
            .with_url(&details.url);

        if let Some(ua) = user_agent {
            builder = builder.with_user_agent(ua);
        }

        let evts = Arc::clone(&events);
        builder = builder.with_document_title_changed_handler(move |title| {
            debug!(view_id = id.0, title = %title, "document title changed");
            if let Ok(mut sink) = evts.lock() {
                sink.push(ViewEvent::TitleChanged { id, title });
            }
        });

        let webview = builder.build_as_child(window).map_err(backend)?;
        debug!(view_id = id.0, url = %details.url, "webview surface created");

        Ok(Self {
            webview: Some(webview),
            current_url: details.url.clone(),
            loads: 1,
            hook: None,
        })
    }

    fn webview(&self) -> Result<&WebView, SurfaceError> {
        self.webview.as_ref().ok_or(SurfaceError::Destroyed)
    }
}

impl RenderSurface for WrySurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.webview()?.load_url(url).map_err(backend)?;
        self.current_url = url.to_string();
        self.loads += 1;
        Ok(())
    }

    fn current_url(&self) -> &str {
        &self.current_url
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), SurfaceError> {
        self.webview()?.set_bounds(rect_to_wry(&bounds)).map_err(backend)
    }

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.webview()?.set_visible(visible).map_err(backend)
    }

    fn focus(&self) -> Result<(), SurfaceError> {
        self.webview()?.focus().map_err(backend)
    }

    fn focus_parent(&self) -> Result<(), SurfaceError> {
        self.webview()?.focus_parent().map_err(backend)
    }

    fn set_audio_muted(&mut self, muted: bool) -> Result<(), SurfaceError> {
        // wry exposes no native mute; flip the page's media elements instead.
        let js = format!(
            "document.querySelectorAll('audio,video').forEach((el) => {{ el.muted = {muted}; }});"
        );
        self.webview()?.evaluate_script(&js).map_err(backend)
    }

    fn set_zoom(&self, factor: f64) -> Result<(), SurfaceError> {
        self.webview()?.zoom(factor).map_err(backend)
    }

    fn print(&self) -> Result<(), SurfaceError> {
        self.webview()?.print().map_err(backend)
    }

    fn can_go_back(&self) -> bool {
        self.loads > 1
    }

    fn can_go_forward(&self) -> bool {
        // No forward tracking without engine history support.
        false
    }

    fn is_destroyed(&self) -> bool {
        self.webview.is_none()
    }

    fn destroy(&mut self) {
        if self.webview.take().is_some() {
            if let Some(hook) = self.hook.take() {
                hook();
            }
        }
    }

    fn on_destroyed(&mut self, hook: TeardownHook) {
        self.hook = Some(hook);
    }
}

impl Drop for WrySurface {
    fn drop(&mut self) {
        self.destroy();
    }
}
