use serde::{Deserialize, Serialize};

use super::{GroupSpec, LoraEntry};

/// Full stack description: groups plus a flat list of LoRA entries.
///
/// Entries reference their group by `group_id`; entries with no group
/// are applied individually after all groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackData {
    pub groups: Vec<GroupSpec>,
    pub loras: Vec<LoraEntry>,
}

impl StackData {
    /// Parse the `stack_data` JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Entries belonging to `group_id`, in list order.
    pub fn members_of(&self, group_id: u64) -> Vec<&LoraEntry> {
        self.loras
            .iter()
            .filter(|l| l.group_id == Some(group_id))
            .collect()
    }

    /// Entries with no group, in list order.
    pub fn ungrouped(&self) -> impl Iterator<Item = &LoraEntry> {
        self.loras.iter().filter(|l| l.group_id.is_none())
    }

    /// Entries whose `group_id` names a group that does not exist.
    /// These are never applied.
    pub fn orphans(&self) -> impl Iterator<Item = &LoraEntry> {
        self.loras.iter().filter(move |l| match l.group_id {
            Some(id) => !self.groups.iter().any(|g| g.id == Some(id)),
            None => false,
        })
    }
}
