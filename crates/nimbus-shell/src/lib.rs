//! Per-window request boundary for the Nimbus browser shell.
//!
//! Routes named external requests to the owning window's view manager,
//! pumps manager events back into it and out onto the shell-wide bus,
//! and hosts the one-shot credential bridge.

pub mod requests;
pub mod shell;
pub mod telemetry;

pub use requests::{ViewRequest, ViewResponse};
pub use shell::{Shell, SurfaceFactory};
