//! Strength resolution for LoRAs outside any group.

use stacker_core::config::StackConfig;
use stacker_core::models::LoraEntry;
use stacker_partition::uniform_in_range;

use crate::group_plan::StrengthPair;

/// Fixed strengths, or a seeded draw from the entry's range when the
/// channel is marked random.
///
/// The draw is reseeded per entry, so every random ungrouped LoRA in a
/// run lands on the same relative position within its own range.
pub fn resolve_ungrouped(entry: &LoraEntry, seed: u64, config: &StackConfig) -> StrengthPair {
    let model = if entry.random_model {
        uniform_in_range(entry.min_model, entry.max_model, seed)
    } else {
        entry
            .model_strength
            .unwrap_or_else(|| config.effective_model_strength())
    };

    let clip = if entry.random_clip {
        uniform_in_range(entry.min_clip, entry.max_clip, config.clip_seed(seed))
    } else {
        entry
            .clip_strength
            .unwrap_or_else(|| config.effective_clip_strength())
    };

    StrengthPair { model, clip }
}
