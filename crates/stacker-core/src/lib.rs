//! # stacker-core
//!
//! Foundation crate for the LoRA stacker.
//! Defines the stack description model, the applier trait, errors,
//! config, tracing setup, and constants shared by every other crate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::StackerConfig;
pub use errors::{ApplyError, ConfigError, PartitionError, StackError, StackerErrorCode};
pub use models::{GroupSpec, LoraEntry, Preset, StackData};
pub use traits::{LoraApplier, PassthroughApplier};
