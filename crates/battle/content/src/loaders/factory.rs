//! Content factory for loading battle content from a data directory.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, EffectCatalog, NpcCombatProfile, PlayerProfile, SkillCatalog};

use crate::loaders::{
    ConfigLoader, EffectLoader, LoadResult, NpcLoader, PlayerLoader, SkillLoader,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── effects.ron
/// ├── skills.ron
/// ├── player.ron
/// └── npcs/
///     ├── slime.ron
///     └── frost_witch.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the effect catalog from `effects.ron`.
    pub fn load_effects(&self) -> LoadResult<EffectCatalog> {
        EffectLoader::load(&self.data_dir.join("effects.ron"))
    }

    /// Load the player skill catalog from `skills.ron`.
    ///
    /// # Arguments
    ///
    /// * `effects` - Effect catalog (load via `load_effects()`)
    pub fn load_player_skills(&self, effects: &EffectCatalog) -> LoadResult<SkillCatalog> {
        SkillLoader::load(&self.data_dir.join("skills.ron"), effects)
    }

    /// Load the player profile from `player.ron`.
    pub fn load_player_profile(&self) -> LoadResult<PlayerProfile> {
        PlayerLoader::load(&self.data_dir.join("player.ron"))
    }

    /// Load an NPC combat profile from `npcs/{name}.ron`.
    pub fn load_npc(&self, name: &str) -> LoadResult<NpcCombatProfile> {
        let path = self.data_dir.join("npcs").join(format!("{}.ron", name));
        NpcLoader::load(&path)
    }

    /// Lists the NPC names available under `npcs/`, sorted.
    pub fn npc_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("npcs");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
