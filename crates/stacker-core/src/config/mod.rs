//! Configuration system for the stacker.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod logging_config;
pub mod stack_config;
pub mod stacker_config;

pub use logging_config::LoggingConfig;
pub use stack_config::StackConfig;
pub use stacker_config::{CliOverrides, StackerConfig};
