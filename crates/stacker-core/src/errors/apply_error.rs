//! Errors raised by a `LoraApplier` implementation.

use super::error_code::{self, StackerErrorCode};

/// Failure while loading or patching a single LoRA.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApplyError {
    #[error("LoRA not found: {name}")]
    LoraNotFound { name: String },

    #[error("Failed to load LoRA {name}: {message}")]
    LoadFailed { name: String, message: String },
}

impl StackerErrorCode for ApplyError {
    fn error_code(&self) -> &'static str {
        error_code::APPLY_ERROR
    }
}
