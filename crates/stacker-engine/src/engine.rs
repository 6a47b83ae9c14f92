//! StackEngine: parses a stack description and applies it in order.
//!
//! Groups first (in list order, members in list order), then ungrouped
//! entries. The model/conditioning pair is threaded through every
//! applier call.

use stacker_core::config::StackConfig;
use stacker_core::constants::{INFO_INVALID_CONFIGURATION, INFO_NO_LORAS};
use stacker_core::errors::StackError;
use stacker_core::models::{LoraEntry, StackData};
use stacker_core::traits::LoraApplier;
use tracing::{debug, info, warn};

use crate::group_plan::{plan_group, StrengthPair};
use crate::outcome::{AppliedLora, StackOutcome};
use crate::ungrouped::resolve_ungrouped;

/// Executes LoRA stacks against a host applier.
#[derive(Debug, Clone, Default)]
pub struct StackEngine {
    config: StackConfig,
}

impl StackEngine {
    /// Create an engine with compiled defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit stack defaults.
    pub fn with_config(config: StackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Apply the stack described by the `stack_data` JSON string.
    ///
    /// An empty string or unparseable JSON is not an error: the inputs
    /// come back unchanged with an explanatory info message.
    pub fn apply_stack<A: LoraApplier>(
        &self,
        applier: &A,
        model: A::Model,
        clip: A::Clip,
        seed: u64,
        stack_data: &str,
    ) -> Result<StackOutcome<A::Model, A::Clip>, StackError> {
        if stack_data.is_empty() {
            info!("no LoRAs configured");
            return Ok(StackOutcome::unchanged(model, clip, INFO_NO_LORAS));
        }

        let data = match StackData::from_json(stack_data) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "invalid stack data; nothing applied");
                return Ok(StackOutcome::unchanged(
                    model,
                    clip,
                    INFO_INVALID_CONFIGURATION,
                ));
            }
        };

        self.apply_data(applier, model, clip, seed, &data)
    }

    /// Apply an already-parsed stack description.
    pub fn apply_data<A: LoraApplier>(
        &self,
        applier: &A,
        mut model: A::Model,
        mut clip: A::Clip,
        seed: u64,
        data: &StackData,
    ) -> Result<StackOutcome<A::Model, A::Clip>, StackError> {
        let _span = stacker_core::stack_span!(seed, data.loras.len()).entered();
        let mut applied = Vec::new();

        for group in &data.groups {
            let Some(group_id) = group.id else {
                warn!(group = %group.label(), "group has no id; skipped");
                continue;
            };
            let members = data.members_of(group_id);
            if members.is_empty() {
                debug!(group = %group.label(), "group has no LoRAs; skipped");
                continue;
            }

            let label = group.label();
            let _group_span = stacker_core::group_span!(label, members.len()).entered();
            let plan = plan_group(group, &members, seed, &self.config)?;
            info!(
                max_model = plan.max_model,
                max_clip = plan.max_clip,
                "distributing group budget"
            );

            for (entry, strengths) in members.iter().zip(&plan.strengths) {
                if !entry.is_active() {
                    continue;
                }
                (model, clip) = apply_entry(applier, model, clip, entry, *strengths)?;

                let record = AppliedLora {
                    name: entry.name.clone(),
                    preset: entry.preset.clone(),
                    group: Some(label.clone()),
                    model_strength: strengths.model,
                    clip_strength: strengths.clip,
                    model_locked: entry.lock_model,
                    clip_locked: entry.lock_clip,
                    model_random: false,
                    clip_random: false,
                };
                record.log();
                applied.push(record);
            }
        }

        for entry in data.ungrouped().filter(|e| e.is_active()) {
            let strengths = resolve_ungrouped(entry, seed, &self.config);
            (model, clip) = apply_entry(applier, model, clip, entry, strengths)?;

            let record = AppliedLora {
                name: entry.name.clone(),
                preset: entry.preset.clone(),
                group: None,
                model_strength: strengths.model,
                clip_strength: strengths.clip,
                model_locked: false,
                clip_locked: false,
                model_random: entry.random_model,
                clip_random: entry.random_clip,
            };
            record.log();
            applied.push(record);
        }

        for orphan in data.orphans() {
            warn!(
                name = %orphan.name,
                group_id = ?orphan.group_id,
                "LoRA references a missing group; skipped"
            );
        }

        info!(applied = applied.len(), "stack complete");
        Ok(StackOutcome::new(model, clip, applied))
    }
}

fn apply_entry<A: LoraApplier>(
    applier: &A,
    model: A::Model,
    clip: A::Clip,
    entry: &LoraEntry,
    strengths: StrengthPair,
) -> Result<(A::Model, A::Clip), StackError> {
    applier
        .apply(
            model,
            clip,
            &entry.name,
            entry.preset_kind(),
            strengths.model,
            strengths.clip,
        )
        .map_err(|source| StackError::ApplyFailed {
            lora: entry.name.clone(),
            source,
        })
}
