//! Partition errors.

use super::error_code::{self, StackerErrorCode};

/// Malformed input rejected by the partitioner before any randomness is drawn.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PartitionError {
    #[error("Total must be finite, got {total}")]
    NonFiniteTotal { total: f64 },

    #[error("Locked value at index {index} must be finite, got {value}")]
    NonFiniteLock { index: usize, value: f64 },

    #[error("Locked values overflow the budget: remaining {remaining}")]
    NonFiniteRemaining { remaining: f64 },

    #[error("Segment count must be non-negative, got {count}")]
    NegativeSegmentCount { count: i64 },
}

impl StackerErrorCode for PartitionError {
    fn error_code(&self) -> &'static str {
        error_code::PARTITION_ERROR
    }
}
