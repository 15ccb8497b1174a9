//! Player and NPC combat profile loaders.

use std::path::Path;

use anyhow::Context;
use battle_core::{NpcCombatProfile, PlayerProfile};

use crate::loaders::{LoadResult, read_file};

/// Loader for the player profile from RON files.
pub struct PlayerLoader;

impl PlayerLoader {
    /// Load the player's level and unlocked skills.
    ///
    /// RON format: `PlayerProfile`
    ///
    /// ```ron
    /// (level: 1, unlocked_skills: ["slash", "fireball"])
    /// ```
    pub fn load(path: &Path) -> LoadResult<PlayerProfile> {
        let content = read_file(path)?;
        let profile: PlayerProfile = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse player profile RON at {:?}: {}", path, e)
        })?;

        Ok(profile)
    }
}

/// Loader for per-NPC combat profiles.
pub struct NpcLoader;

impl NpcLoader {
    /// Load one NPC's combat profile.
    ///
    /// RON format: `NpcCombatProfile`. Skills are authored inline and are
    /// resolved against the effect catalog when the entity is built.
    pub fn load(path: &Path) -> LoadResult<NpcCombatProfile> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse an NPC combat profile from RON text.
    pub fn parse(content: &str) -> LoadResult<NpcCombatProfile> {
        let profile: NpcCombatProfile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC profile RON: {}", e))?;

        Ok(profile)
    }
}
