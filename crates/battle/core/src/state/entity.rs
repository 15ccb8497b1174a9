//! Runtime state of one battle participant.

use std::sync::Arc;

use crate::catalog::{EffectCatalog, SkillCatalog, SkillTemplate, build_skill_templates};
use crate::config::BattleConfig;
use crate::error::ConfigError;
use crate::profile::{NpcCombatProfile, PlayerProfile};

use super::skill::SkillSet;
use super::status::StatusEffects;

/// Which side of the battle an entity fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

/// Complete mutable state of one combatant.
///
/// # Invariants
///
/// - `0 <= current_health <= max_health` once a turn completes
/// - `shield >= 0`
/// - `physical_buff`, `magical_buff`, `weakness` and `is_frozen` are derived:
///   they are rebuilt from `active_effects` at the start of each of this
///   entity's turns and never carried over on their own
#[derive(Clone, Debug, PartialEq)]
pub struct BattleEntity {
    pub side: Side,
    pub display_name: String,
    pub max_health: i32,
    pub current_health: i32,
    pub shield: i32,

    // === Derived each turn from active_effects ===
    pub physical_buff: i32,
    pub magical_buff: i32,
    /// Flat reduction to this entity's own outgoing damage.
    pub weakness: i32,
    pub is_frozen: bool,

    pub skills: SkillSet,
    pub active_effects: StatusEffects,
}

impl BattleEntity {
    /// Creates an entity at full health with every skill ready.
    pub fn new(
        side: Side,
        display_name: impl Into<String>,
        max_health: i32,
        skills: impl IntoIterator<Item = Arc<SkillTemplate>>,
    ) -> Result<Self, ConfigError> {
        let display_name = display_name.into();
        if max_health <= 0 {
            return Err(ConfigError::NonPositiveHealth {
                owner: display_name,
                max_health,
            });
        }

        Ok(Self {
            side,
            display_name,
            max_health,
            current_health: max_health,
            shield: 0,
            physical_buff: 0,
            magical_buff: 0,
            weakness: 0,
            is_frozen: false,
            skills: SkillSet::from_templates(skills)?,
            active_effects: StatusEffects::empty(),
        })
    }

    /// Builds the player from their level and unlocked loadout.
    pub fn player(
        profile: &PlayerProfile,
        catalog: &SkillCatalog,
        config: &BattleConfig,
    ) -> Result<Self, ConfigError> {
        let max_health = config.max_health_for_level(profile.level)?;
        let skills = catalog.select(
            "player",
            profile.unlocked_skills.iter().map(String::as_str),
        )?;
        Self::new(Side::Player, "Player", max_health, skills)
    }

    /// Builds an enemy from an NPC profile, resolving its own skills.
    pub fn npc(profile: &NpcCombatProfile, effects: &EffectCatalog) -> Result<Self, ConfigError> {
        let catalog = build_skill_templates(profile.skills.iter().cloned(), effects)?;
        Self::new(
            Side::Enemy,
            profile.display_name(),
            profile.max_health,
            catalog.iter().cloned(),
        )
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health <= 0
    }

    /// Clears the derived modifiers ahead of a refresh.
    pub(crate) fn reset_derived(&mut self) {
        self.is_frozen = false;
        self.physical_buff = 0;
        self.magical_buff = 0;
        self.weakness = 0;
    }

    /// Heals by `amount`, never exceeding max health.
    pub fn heal_clamped(&mut self, amount: i32) -> i32 {
        let before = self.current_health;
        self.current_health = (self.current_health + amount).min(self.max_health);
        self.current_health - before
    }

    /// Owned copy for presentation layers.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}
