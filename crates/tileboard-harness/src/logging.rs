//! Stderr logging for the `tileboard` binary.
//!
//! Filtering follows `RUST_LOG` (for example `RUST_LOG=tileboard_layout=debug`
//! to see every push); without it only warnings are printed.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. Later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
