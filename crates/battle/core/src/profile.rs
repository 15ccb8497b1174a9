//! Per-encounter combat profiles consumed when building entities.

use crate::catalog::SkillDefinition;

/// The player's battle-relevant progression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProfile {
    pub level: u32,
    /// Skill ids the player may use, in the order they are shown.
    pub unlocked_skills: Vec<String>,
}

impl PlayerProfile {
    pub fn new(level: u32, unlocked_skills: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            level,
            unlocked_skills: unlocked_skills.into_iter().map(Into::into).collect(),
        }
    }
}

/// One reward line: `quantity` of `item_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub item_id: String,
    pub quantity: u32,
}

/// Items granted to the caller when the player wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RewardTable {
    entries: Vec<Reward>,
}

impl RewardTable {
    pub fn new(entries: impl IntoIterator<Item = (impl Into<String>, u32)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(item_id, quantity)| Reward {
                    item_id: item_id.into(),
                    quantity,
                })
                .collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reward> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An NPC's combat setup for one encounter.
///
/// NPC skills are authored inline with the NPC rather than drawn from the
/// player's catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcCombatProfile {
    /// Content key of the NPC.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: Option<String>,
    pub max_health: i32,
    pub skills: Vec<SkillDefinition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rewards: RewardTable,
}

impl NpcCombatProfile {
    /// Display name, falling back to the content key.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}
