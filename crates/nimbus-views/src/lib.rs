//! View orchestration for the Nimbus browser shell.
//!
//! Tracks the set of live views (tabs) owned by one host window:
//! - Managed view instances with process-unique IDs
//! - A selection state machine with an explicit empty case
//! - Bounds computation across resize and fullscreen
//! - Dialog-set synchronization on every tab switch
//! - Zoom adjustment, clamping, and broadcast
//! - A one-shot modal credential bridge

pub mod auth;
pub mod dialogs;
pub mod events;
pub mod manager;
pub mod surface;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{AuthBroker, AuthPrompt, AuthRequest, Credentials};
pub use dialogs::{DialogKind, DialogSet, DialogSurface, ZoomIndicator};
pub use events::ViewEvent;
pub use manager::{CreateViewDetails, Selection, ViewManager, ZoomDirection};
pub use surface::{RenderSurface, WrySurface};
pub use view::View;
