//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the glyphdex tracing/logging system.
///
/// Reads the `GLYPHDEX_LOG` environment variable for per-subsystem log
/// levels, e.g. `GLYPHDEX_LOG=glyphdex_extract=debug,glyphdex_storage=warn`.
/// Falls back to `info` if `GLYPHDEX_LOG` is not set or is invalid.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_env("GLYPHDEX_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
