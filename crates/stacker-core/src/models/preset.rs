use std::fmt;

use serde::{Deserialize, Serialize};

/// Block-targeting label attached to a LoRA.
///
/// Presets are carried through to the applier as metadata. Block-level
/// weighting is not performed; every preset applies to all blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    Full,
    Character,
    Style,
    Concept,
    #[serde(rename = "Fix Hands")]
    FixHands,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Full,
        Preset::Character,
        Preset::Style,
        Preset::Concept,
        Preset::FixHands,
    ];

    /// Parse a UI label. Unknown labels fall back to `Full`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Full => "Full",
            Preset::Character => "Character",
            Preset::Style => "Style",
            Preset::Concept => "Concept",
            Preset::FixHands => "Fix Hands",
        }
    }

    /// Nominal inclusive block range this preset describes, `None` for all blocks.
    pub fn block_range(self) -> Option<(u8, u8)> {
        match self {
            Preset::Full => None,
            Preset::Character => Some((4, 11)),
            Preset::Style => Some((0, 5)),
            Preset::Concept => Some((6, 11)),
            Preset::FixHands => Some((8, 11)),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
