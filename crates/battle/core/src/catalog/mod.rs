//! Static content catalogs.
//!
//! Both catalogs are built once from parsed content and then only read:
//! - [`EffectCatalog`]: effect kind → display metadata and default duration
//! - [`SkillCatalog`]: skill id → resolved [`SkillTemplate`]
//!
//! Resolution is pure; loading files is the content crate's job.

pub mod effect;
pub mod skill;

pub use effect::{EffectCatalog, EffectDefinition, EffectKind};
pub use skill::{
    EffectTarget, SkillCatalog, SkillDefinition, SkillEffectRule, SkillEffectSpec, SkillTemplate,
    build_skill_templates,
};
