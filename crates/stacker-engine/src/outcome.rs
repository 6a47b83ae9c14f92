//! Run results and the human-readable info report.

use stacker_core::constants::INFO_NO_LORAS;
use tracing::info;

/// One LoRA that was handed to the applier.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedLora {
    pub name: String,
    /// Preset label exactly as given in the stack description.
    pub preset: String,
    /// Display label of the owning group, `None` for ungrouped entries.
    pub group: Option<String>,
    pub model_strength: f64,
    pub clip_strength: f64,
    pub model_locked: bool,
    pub clip_locked: bool,
    pub model_random: bool,
    pub clip_random: bool,
}

impl AppliedLora {
    /// Report line, e.g. `[Group 1] detail.safetensors (Style) - M:0.4211 C:0.5000`.
    pub fn info_line(&self) -> String {
        let body = format!(
            "{} ({}) - M:{:.4} C:{:.4}",
            self.name, self.preset, self.model_strength, self.clip_strength
        );
        match &self.group {
            Some(label) => format!("[Group {label}] {body}"),
            None => body,
        }
    }

    /// Flags shown next to the strengths, e.g. `[MODEL locked, CLIP random]`.
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.model_locked {
            flags.push("MODEL locked");
        }
        if self.clip_locked {
            flags.push("CLIP locked");
        }
        if self.model_random {
            flags.push("MODEL random");
        }
        if self.clip_random {
            flags.push("CLIP random");
        }
        flags
    }

    pub(crate) fn log(&self) {
        info!(
            name = %self.name,
            preset = %self.preset,
            group = self.group.as_deref().unwrap_or("-"),
            model = self.model_strength,
            clip = self.clip_strength,
            flags = ?self.flags(),
            "applied LoRA"
        );
    }
}

/// Patched model/conditioning pair plus what was applied.
#[derive(Debug, Clone)]
pub struct StackOutcome<M, C> {
    pub model: M,
    pub clip: C,
    pub info: String,
    pub applied: Vec<AppliedLora>,
}

impl<M, C> StackOutcome<M, C> {
    /// Outcome for a run that applied entries in `applied`.
    pub fn new(model: M, clip: C, applied: Vec<AppliedLora>) -> Self {
        let info = info_text(&applied);
        Self {
            model,
            clip,
            info,
            applied,
        }
    }

    /// Outcome for a run that touched nothing, with a fixed info message.
    pub fn unchanged(model: M, clip: C, info: &str) -> Self {
        Self {
            model,
            clip,
            info: info.to_string(),
            applied: Vec::new(),
        }
    }
}

/// Info lines joined by newlines, or the "nothing applied" text.
pub fn info_text(applied: &[AppliedLora]) -> String {
    if applied.is_empty() {
        return INFO_NO_LORAS.to_string();
    }
    applied
        .iter()
        .map(AppliedLora::info_line)
        .collect::<Vec<_>>()
        .join("\n")
}
