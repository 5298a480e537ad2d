//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `BUZZWIN_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "buzzwin=info,tower_http=info";

/// Initialize the Buzzwin tracing/logging system.
///
/// Reads the `BUZZWIN_LOG` environment variable for per-subsystem log levels.
/// Format: `BUZZWIN_LOG=buzzwin_karma=debug,buzzwin_storage=warn`
///
/// Set `json` for structured JSON output. Calling this more than once is a no-op.
pub fn init_tracing(json: bool) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("BUZZWIN_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .with(filter)
                .init();
        }
    });
}
