//! Deterministic turn-based battle rules.
//!
//! `battle-core` defines the canonical combat rules (catalogs, entities,
//! turn resolution) as pure APIs with no I/O. All state mutation flows
//! through [`engine::TurnEngine`]; randomness is injected through
//! [`rng::RollSource`], so a seeded battle replays exactly.
pub mod catalog;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod rng;
pub mod state;

pub use catalog::{
    EffectCatalog, EffectDefinition, EffectKind, EffectTarget, SkillCatalog, SkillDefinition,
    SkillEffectRule, SkillEffectSpec, SkillTemplate, build_skill_templates,
};
pub use combat::{DamageDealt, TerminalOutcome, apply_damage, skill_damage};
pub use config::{BattleConfig, LevelHealth};
pub use engine::{
    AppliedEffect, EffectTick, SkillUse, SkipReason, SkippedSkill, TurnEngine, TurnReport,
    resolve_turn,
};
pub use error::{BattleError, ConfigError, ErrorSeverity};
pub use profile::{NpcCombatProfile, PlayerProfile, Reward, RewardTable};
pub use rng::{FixedRolls, PcgRolls, RollSource};
pub use state::{ActiveEffect, BattleEntity, SkillInstance, SkillSet, Side, StatusEffects};
