//! The ViewManager coordinates view lifecycle, selection, bounds, dialogs,
//! and zoom for one host window.

mod bounds;
mod lifecycle;
mod selection;
mod types;
mod zoom;

pub use types::*;
