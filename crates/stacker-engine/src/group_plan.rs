//! Per-group strength distribution.

use stacker_core::config::StackConfig;
use stacker_core::errors::PartitionError;
use stacker_core::models::{GroupSpec, LoraEntry};
use stacker_partition::{partition, LockMap};

/// MODEL and CLIP strength for one LoRA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthPair {
    pub model: f64,
    pub clip: f64,
}

/// Resolved budgets and per-member strengths for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPlan {
    pub max_model: f64,
    pub max_clip: f64,
    /// Index-aligned with the member list passed to [`plan_group`].
    pub strengths: Vec<StrengthPair>,
}

/// Partition a group's budgets across `members`.
///
/// Every member takes a slot, including placeholders that will not be
/// applied. MODEL uses `seed`; CLIP uses the config's offset seed.
pub fn plan_group(
    group: &GroupSpec,
    members: &[&LoraEntry],
    seed: u64,
    config: &StackConfig,
) -> Result<GroupPlan, PartitionError> {
    let max_model = group
        .max_model
        .unwrap_or_else(|| config.effective_group_max_model());
    let max_clip = group
        .max_clip
        .unwrap_or_else(|| config.effective_group_max_clip());

    let locked_model: LockMap = members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.lock_model)
        .map(|(i, m)| (i, m.locked_model_value))
        .collect();
    let locked_clip: LockMap = members
        .iter()
        .enumerate()
        .filter(|(_, m)| m.lock_clip)
        .map(|(i, m)| (i, m.locked_clip_value))
        .collect();

    let model = partition(max_model, members.len(), &locked_model, Some(seed))?;
    let clip = partition(
        max_clip,
        members.len(),
        &locked_clip,
        Some(config.clip_seed(seed)),
    )?;

    let strengths = model
        .into_iter()
        .zip(clip)
        .map(|(model, clip)| StrengthPair { model, clip })
        .collect();

    Ok(GroupPlan {
        max_model,
        max_clip,
        strengths,
    })
}
