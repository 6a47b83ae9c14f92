//! Top-level stacker configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, StackConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`STACKER_*`)
/// 3. Project config (`stacker.toml` in project root)
/// 4. User config (`~/.stacker/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StackerConfig {
    pub stack: StackConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub clip_seed_offset: Option<u64>,
    pub log_filter: Option<String>,
}

impl StackerConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &StackerConfig) -> Result<(), ConfigError> {
        let finite_fields = [
            ("stack.default_group_max_model", config.stack.default_group_max_model),
            ("stack.default_group_max_clip", config.stack.default_group_max_clip),
            ("stack.default_model_strength", config.stack.default_model_strength),
            ("stack.default_clip_strength", config.stack.default_clip_strength),
        ];
        for (field, value) in finite_fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be a finite number".to_string(),
                    });
                }
            }
        }
        if config.stack.clip_seed_offset == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "stack.clip_seed_offset".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.stacker/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".stacker").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut StackerConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: StackerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut StackerConfig, other: &StackerConfig) {
        if other.stack.default_group_max_model.is_some() {
            base.stack.default_group_max_model = other.stack.default_group_max_model;
        }
        if other.stack.default_group_max_clip.is_some() {
            base.stack.default_group_max_clip = other.stack.default_group_max_clip;
        }
        if other.stack.default_model_strength.is_some() {
            base.stack.default_model_strength = other.stack.default_model_strength;
        }
        if other.stack.default_clip_strength.is_some() {
            base.stack.default_clip_strength = other.stack.default_clip_strength;
        }
        if other.stack.clip_seed_offset.is_some() {
            base.stack.clip_seed_offset = other.stack.clip_seed_offset;
        }
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `STACKER_DEFAULT_GROUP_MAX_MODEL`, `STACKER_CLIP_SEED_OFFSET`, etc.
    fn apply_env_overrides(config: &mut StackerConfig) {
        let float_vars: [(&str, &mut Option<f64>); 4] = [
            (
                "STACKER_DEFAULT_GROUP_MAX_MODEL",
                &mut config.stack.default_group_max_model,
            ),
            (
                "STACKER_DEFAULT_GROUP_MAX_CLIP",
                &mut config.stack.default_group_max_clip,
            ),
            (
                "STACKER_DEFAULT_MODEL_STRENGTH",
                &mut config.stack.default_model_strength,
            ),
            (
                "STACKER_DEFAULT_CLIP_STRENGTH",
                &mut config.stack.default_clip_strength,
            ),
        ];
        for (key, slot) in float_vars {
            if let Ok(val) = std::env::var(key) {
                if let Ok(v) = val.parse::<f64>() {
                    *slot = Some(v);
                }
            }
        }
        if let Ok(val) = std::env::var("STACKER_CLIP_SEED_OFFSET") {
            if let Ok(v) = val.parse::<u64>() {
                config.stack.clip_seed_offset = Some(v);
            }
        }
        if let Ok(val) = std::env::var("STACKER_LOG_FILTER") {
            config.logging.filter = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut StackerConfig, cli: &CliOverrides) {
        if let Some(v) = cli.clip_seed_offset {
            config.stack.clip_seed_offset = Some(v);
        }
        if let Some(ref v) = cli.log_filter {
            config.logging.filter = Some(v.clone());
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
