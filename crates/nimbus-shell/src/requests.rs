//! Named external requests, scoped to an owning window.
//!
//! Keybinds, menus, and IPC transports all resolve to a [`ViewRequest`];
//! the shell dispatcher matches on this enum to route to the manager.

use nimbus_common::ViewId;
use nimbus_views::{CreateViewDetails, ZoomDirection};
use serde::{Deserialize, Serialize};

fn default_focus() -> bool {
    true
}

/// Every view operation a window can request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewRequest {
    /// Create one view; answered with its ID.
    Create {
        details: CreateViewDetails,
        #[serde(default)]
        is_next: bool,
    },
    /// Create several views; answered with their ordered IDs.
    CreateMany { details: Vec<CreateViewDetails> },
    /// Fire-and-forget creation for a user-visible "open new tab".
    AddTab { url: String },
    /// Print the currently selected view.
    Print,
    /// Make a view the presented one.
    Select {
        id: ViewId,
        #[serde(default = "default_focus")]
        focus: bool,
    },
    /// Tear a view down.
    Destroy { id: ViewId },
    /// Set the audio-mute flag on a view.
    SetAudioMuted { id: ViewId, muted: bool },
    /// Tear down every view in the window.
    Clear,
    /// Step the selected view's zoom factor.
    ChangeZoom { direction: ZoomDirection },
    /// Reset the selected view's zoom factor to 1.
    ResetZoom,
}

/// Answer to a [`ViewRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewResponse {
    None,
    Created { id: ViewId },
    CreatedMany { ids: Vec<ViewId> },
    /// The zoom step was out of range; the originating command should not
    /// apply its default action.
    ZoomRejected,
}
