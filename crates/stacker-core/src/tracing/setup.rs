//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize tracing with the default filter.
///
/// Reads `STACKER_LOG` for per-crate log levels, e.g.
/// `STACKER_LOG=stacker_partition=debug,stacker_engine=info`.
/// Falls back to `stacker=info`.
pub fn init_tracing() {
    init_tracing_with(&LoggingConfig::default());
}

/// Initialize tracing, falling back to the configured filter when
/// `STACKER_LOG` is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber. A subscriber
/// already installed by the host is left in place.
pub fn init_tracing_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(config.effective_filter()));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
