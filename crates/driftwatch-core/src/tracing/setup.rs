//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the driftwatch tracing/logging system.
///
/// Reads the `DRIFTWATCH_LOG` environment variable for per-crate log levels.
/// Format: `DRIFTWATCH_LOG=driftwatch_analysis=debug,driftwatch_io=warn`
///
/// Falls back to `driftwatch=info` if `DRIFTWATCH_LOG` is not set or is invalid.
/// Logs go to stderr so reports printed on stdout stay clean.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("driftwatch=info"));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
