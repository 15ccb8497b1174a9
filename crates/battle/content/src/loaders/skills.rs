//! Player skill catalog loader.

use std::path::Path;

use anyhow::Context;
use battle_core::{EffectCatalog, SkillCatalog, SkillDefinition, build_skill_templates};

use crate::loaders::{LoadResult, read_file};

/// Loader for skill catalogs from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load and resolve a skill catalog from a RON file.
    ///
    /// RON format: `Vec<SkillDefinition>`. Effect rules without a `duration`
    /// take the effect's default from `effects`.
    pub fn load(path: &Path, effects: &EffectCatalog) -> LoadResult<SkillCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, effects).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and resolve a skill catalog from RON text.
    pub fn parse(content: &str, effects: &EffectCatalog) -> LoadResult<SkillCatalog> {
        let definitions: Vec<SkillDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;

        let catalog = build_skill_templates(definitions, effects)?;
        tracing::debug!(skills = catalog.len(), "skill catalog loaded");
        Ok(catalog)
    }
}
