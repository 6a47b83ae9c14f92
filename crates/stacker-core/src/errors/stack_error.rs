//! Stack run errors.

use super::error_code::{self, StackerErrorCode};
use super::{ApplyError, ConfigError, PartitionError};

/// Errors that abort a stack run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    #[error("Partition error: {0}")]
    Partition(#[from] PartitionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Applying {lora} failed: {source}")]
    ApplyFailed {
        lora: String,
        #[source]
        source: ApplyError,
    },
}

impl StackerErrorCode for StackError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Partition(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::ApplyFailed { source, .. } => source.error_code(),
        }
    }
}

impl StackError {
    /// Generic code for callers that only care that the run failed.
    pub fn run_code(&self) -> &'static str {
        error_code::STACK_ERROR
    }
}
