//! StackerErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable code string
/// that host integrations can match on without parsing messages.
pub trait StackerErrorCode {
    /// Returns the error code string (e.g., "PARTITION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARTITION_ERROR: &str = "PARTITION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const APPLY_ERROR: &str = "APPLY_ERROR";
pub const STACK_ERROR: &str = "STACK_ERROR";
