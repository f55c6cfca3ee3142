//! Tracing initialisation for the shell.

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, defaulting to `nimbus=info`. Safe to call
/// more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nimbus=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
