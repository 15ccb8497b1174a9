//! Mutable battle state.
//!
//! Exactly two [`BattleEntity`] values exist per battle. Each owns its skill
//! instances and its active effects; nothing here is shared between
//! entities except the immutable [`crate::catalog::SkillTemplate`]s.

pub mod entity;
pub mod skill;
pub mod status;

pub use entity::{BattleEntity, Side};
pub use skill::{SkillInstance, SkillSet};
pub use status::{ActiveEffect, StatusEffects};
