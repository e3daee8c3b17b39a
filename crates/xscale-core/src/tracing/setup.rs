//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "XSCALE_LOG";

/// Filter used when `XSCALE_LOG` is unset or invalid. Matches every
/// `xscale_*` crate target and the `make_xscale` binary.
pub const DEFAULT_FILTER: &str = "xscale=info,make_xscale=info";

/// Initialize logging to stderr.
///
/// Reads `XSCALE_LOG` for per-module log levels.
/// Format: `XSCALE_LOG=xscale_merge::source=debug,xscale_merge::paths=trace`
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = env_filter();

        // A subscriber may already be installed by an embedding program.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}

/// Filter from `XSCALE_LOG`, or [`DEFAULT_FILTER`] when it is unset or does
/// not parse.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
