//! Stack execution defaults.

use serde::{Deserialize, Serialize};

/// Fallback values used when a stack description omits a field,
/// plus the seed offset separating the MODEL and CLIP channels.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StackConfig {
    /// Group MODEL budget when the group omits `max_model`. Default: 1.0.
    pub default_group_max_model: Option<f64>,
    /// Group CLIP budget when the group omits `max_clip`. Default: 1.0.
    pub default_group_max_clip: Option<f64>,
    /// Fixed ungrouped MODEL strength when the entry omits it. Default: 1.0.
    pub default_model_strength: Option<f64>,
    /// Fixed ungrouped CLIP strength when the entry omits it. Default: 1.0.
    pub default_clip_strength: Option<f64>,
    /// Added (wrapping) to the run seed for every CLIP-channel draw. Default: 1.
    pub clip_seed_offset: Option<u64>,
}

impl StackConfig {
    pub fn effective_group_max_model(&self) -> f64 {
        self.default_group_max_model.unwrap_or(1.0)
    }

    pub fn effective_group_max_clip(&self) -> f64 {
        self.default_group_max_clip.unwrap_or(1.0)
    }

    pub fn effective_model_strength(&self) -> f64 {
        self.default_model_strength.unwrap_or(1.0)
    }

    pub fn effective_clip_strength(&self) -> f64 {
        self.default_clip_strength.unwrap_or(1.0)
    }

    pub fn effective_clip_seed_offset(&self) -> u64 {
        self.clip_seed_offset.unwrap_or(1)
    }

    /// Seed for the CLIP channel derived from the run seed.
    pub fn clip_seed(&self, seed: u64) -> u64 {
        seed.wrapping_add(self.effective_clip_seed_offset())
    }
}
