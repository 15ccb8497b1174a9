//! Effect catalog loader.

use std::path::Path;

use anyhow::Context;
use battle_core::{EffectCatalog, EffectDefinition};

use crate::loaders::{LoadResult, read_file};

/// Loader for the effect catalog from RON files.
pub struct EffectLoader;

impl EffectLoader {
    /// Load the effect catalog from a RON file.
    ///
    /// RON format: `Vec<EffectDefinition>`
    ///
    /// ```ron
    /// [
    ///     (type_id: burning, display_name: "Burning", is_negative: true, default_duration: 3),
    /// ]
    /// ```
    pub fn load(path: &Path) -> LoadResult<EffectCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse an effect catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<EffectCatalog> {
        let definitions: Vec<EffectDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse effect catalog RON: {}", e))?;

        Ok(EffectCatalog::from_definitions(definitions)?)
    }
}
