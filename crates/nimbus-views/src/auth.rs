//! One-shot modal credential bridge.
//!
//! Suspends a caller until a single matching response event arrives from
//! the shared auth prompt. Delivery is at-most-once: the first response
//! resolves the pending request and later events are ignored.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use nimbus_common::AuthError;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Credentials entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The single shared modal auth surface.
///
/// `present` positions and shows the surface relative to the owning window
/// and hands it the challenging URL.
pub trait AuthPrompt {
    fn present(&mut self, url: &str);
}

/// Bridges a credential request to the asynchronous response event.
///
/// The underlying modal surface is a single shared instance, so only one
/// request can be meaningfully in flight. A second request re-presents the
/// surface and supersedes the first: the superseded future resolves to
/// [`AuthError::Canceled`].
pub struct AuthBroker {
    prompt: Box<dyn AuthPrompt>,
    pending: Option<oneshot::Sender<Credentials>>,
}

impl AuthBroker {
    pub fn new(prompt: Box<dyn AuthPrompt>) -> Self {
        Self {
            prompt,
            pending: None,
        }
    }

    /// Present the prompt for `url` and return a future that resolves with
    /// the next response event.
    ///
    /// There is no timeout or cancellation here; callers that need one
    /// wrap the returned future.
    pub fn request(&mut self, url: &str) -> AuthRequest {
        self.prompt.present(url);
        let (tx, rx) = oneshot::channel();
        if self.pending.replace(tx).is_some() {
            warn!(url, "auth request superseded a pending one");
        }
        debug!(url, "auth request pending");
        AuthRequest { rx }
    }

    /// Deliver a response event. Returns whether a pending request
    /// consumed it; a response with nothing pending is dropped.
    pub fn resolve(&mut self, credentials: Credentials) -> bool {
        match self.pending.take() {
            Some(tx) => tx.send(credentials).is_ok(),
            None => {
                debug!("auth response ignored: no pending request");
                false
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// A suspended credential request.
pub struct AuthRequest {
    rx: oneshot::Receiver<Credentials>,
}

impl Future for AuthRequest {
    type Output = Result<Credentials, AuthError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|result| result.map_err(|_| AuthError::Canceled))
    }
}
