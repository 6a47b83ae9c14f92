use serde::{Deserialize, Serialize};

use super::Preset;
use crate::constants::{DEFAULT_PRESET_LABEL, NO_LORA_NAME};

/// One LoRA slot as serialized by the UI.
///
/// Grouped entries use the lock fields; ungrouped entries use the fixed
/// strength and random range fields. Both sets are always accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoraEntry {
    pub id: Option<u64>,
    pub group_id: Option<u64>,
    pub name: String,
    pub preset: String,

    // Grouped
    pub lock_model: bool,
    pub locked_model_value: f64,
    pub lock_clip: bool,
    pub locked_clip_value: f64,

    // Ungrouped
    pub model_strength: Option<f64>,
    pub clip_strength: Option<f64>,
    pub random_model: bool,
    pub min_model: f64,
    pub max_model: f64,
    pub random_clip: bool,
    pub min_clip: f64,
    pub max_clip: f64,
}

impl Default for LoraEntry {
    fn default() -> Self {
        Self {
            id: None,
            group_id: None,
            name: NO_LORA_NAME.to_string(),
            preset: DEFAULT_PRESET_LABEL.to_string(),
            lock_model: false,
            locked_model_value: 0.0,
            lock_clip: false,
            locked_clip_value: 0.0,
            model_strength: None,
            clip_strength: None,
            random_model: false,
            min_model: 0.0,
            max_model: 1.0,
            random_clip: false,
            min_clip: 0.0,
            max_clip: 1.0,
        }
    }
}

impl LoraEntry {
    /// Create an entry with the given name and UI defaults for everything else.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Empty names and the "None" placeholder are skipped.
    pub fn is_active(&self) -> bool {
        !self.name.is_empty() && self.name != NO_LORA_NAME
    }

    pub fn preset_kind(&self) -> Preset {
        Preset::from_label(&self.preset)
    }
}
