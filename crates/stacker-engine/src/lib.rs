//! # stacker-engine
//!
//! Runs a LoRA stack: partitions each group's MODEL and CLIP budgets
//! across its members, resolves ungrouped strengths, and hands every
//! resolved pair to the host's [`LoraApplier`](stacker_core::LoraApplier).

pub mod engine;
pub mod group_plan;
pub mod outcome;
pub mod ungrouped;

pub use engine::StackEngine;
pub use group_plan::{plan_group, GroupPlan, StrengthPair};
pub use outcome::{AppliedLora, StackOutcome};
pub use ungrouped::resolve_ungrouped;
