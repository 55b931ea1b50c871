// File: crates/chart-scene/src/logging.rs
// Summary: fmt subscriber setup for binaries; `RUST_LOG` overrides the default filter.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,chart_scene=debug";

pub fn init() {
    init_with(DEFAULT_FILTER);
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_with(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
