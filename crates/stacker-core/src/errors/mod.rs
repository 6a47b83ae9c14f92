//! Error handling for the stacker.
//! One error enum per subsystem, `thiserror` only.

pub mod apply_error;
pub mod config_error;
pub mod error_code;
pub mod partition_error;
pub mod stack_error;

pub use apply_error::ApplyError;
pub use config_error::ConfigError;
pub use error_code::StackerErrorCode;
pub use partition_error::PartitionError;
pub use stack_error::StackError;
