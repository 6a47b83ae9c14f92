/// Maximum allowed drift between a partition's sum and its requested total.
pub const SUM_TOLERANCE: f64 = 1e-4;

/// Decimal places every randomized strength is rounded to.
pub const ROUNDING_DECIMALS: u32 = 4;

/// LoRA name the UI writes for an empty slot. Entries with this name are never applied.
pub const NO_LORA_NAME: &str = "None";

/// Preset label used when an entry carries none.
pub const DEFAULT_PRESET_LABEL: &str = "Full";

/// Label printed for a group that carries no display index.
pub const UNINDEXED_GROUP_LABEL: &str = "N/A";

/// Info text when nothing was applied.
pub const INFO_NO_LORAS: &str = "No LoRAs applied";

/// Info text when the stack description could not be parsed.
pub const INFO_INVALID_CONFIGURATION: &str = "Invalid configuration";

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "stacker.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "STACKER_LOG";
