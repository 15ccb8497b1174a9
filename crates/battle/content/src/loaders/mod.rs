//! Content loaders for reading battle data from files.
//!
//! Each loader parses one file format and resolves it into battle-core types.
//! [`ContentFactory`] ties them to a data directory layout.

pub mod config;
pub mod effects;
pub mod factory;
pub mod profiles;
pub mod skills;

pub use config::ConfigLoader;
pub use effects::EffectLoader;
pub use factory::ContentFactory;
pub use profiles::{NpcLoader, PlayerLoader};
pub use skills::SkillLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
