//! Data-driven battle content and loaders.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Effect catalog (RON)
//! - Player skill catalog (RON)
//! - Player profile: level and unlocked skills (RON)
//! - NPC combat profiles with inline skills and rewards (RON)
//! - Battle configuration (TOML)
//!
//! Content is resolved into battle-core catalogs and never mutated after
//! loading.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EffectLoader, LoadResult, NpcLoader, PlayerLoader, SkillLoader,
};
