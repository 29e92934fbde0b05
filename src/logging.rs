//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::TerminalConfig;

/// Installs a fmt subscriber for the process
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `trace`
/// with the config's `trace_logging` flag. Calling this twice is harmless.
pub fn init(config: &TerminalConfig) {
    let default_level = if config.trace_logging { "trace" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
