//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Tracing filter used when `STACKER_LOG` is not set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `stacker=debug`. Default: `stacker=info`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or("stacker=info")
    }
}
