use serde::{Deserialize, Serialize};

use crate::constants::UNINDEXED_GROUP_LABEL;

/// A group whose members share a MODEL budget and a CLIP budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSpec {
    pub id: Option<u64>,
    /// 1-based display index.
    pub index: Option<u64>,
    pub max_model: Option<f64>,
    pub max_clip: Option<f64>,
}

impl GroupSpec {
    /// Display label used in logs and the info report.
    pub fn label(&self) -> String {
        match self.index {
            Some(i) => i.to_string(),
            None => UNINDEXED_GROUP_LABEL.to_string(),
        }
    }
}
