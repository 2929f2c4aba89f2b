//! Tracing bootstrap shared by both pipeline binaries.
//!
//! Stdout is reserved for the decision payload, so every
//! subscriber writes to stderr. Default level is `warn`, tunable via
//! `RUST_LOG` the usual way.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a process-wide `tracing` subscriber. Safe to call more than
/// once per process; only the first call takes effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
