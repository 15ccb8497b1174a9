//! Skill catalog: raw skill definitions resolved against the effect catalog.

use std::collections::HashMap;
use std::sync::Arc;

use super::effect::{EffectCatalog, EffectKind};
use crate::error::ConfigError;

/// Which entity receives an effect when a rule fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    /// The entity using the skill.
    #[cfg_attr(feature = "serde", serde(rename = "self"))]
    Caster,
    /// The other side of the battle.
    #[cfg_attr(feature = "serde", serde(rename = "opponent"))]
    Opponent,
}

// ============================================================================
// Raw definitions (as authored in content files)
// ============================================================================

/// An effect rule as written in content: duration may be omitted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillEffectSpec {
    pub effect_type_id: EffectKind,
    pub target: EffectTarget,
    pub chance: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<u32>,
}

/// A skill as written in content, before effect resolution.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillDefinition {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub physical_damage: i32,
    pub magical_damage: i32,
    pub heal_amount: i32,
    pub shield_amount: i32,
    pub purify: bool,
    pub cooldown: u32,
    pub effect_rules: Vec<SkillEffectSpec>,
}

// ============================================================================
// Resolved templates
// ============================================================================

/// A fully resolved effect rule carried by a [`SkillTemplate`].
#[derive(Clone, Debug, PartialEq)]
pub struct SkillEffectRule {
    pub effect_type_id: EffectKind,
    pub display_name: String,
    pub is_negative: bool,
    pub target: EffectTarget,
    /// Probability in `[0, 1]` that the rule fires.
    pub application_chance: f64,
    pub value: Option<i32>,
    pub duration: u32,
}

/// Immutable skill definition shared by every entity that knows the skill.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillTemplate {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub physical_damage: i32,
    pub magical_damage: i32,
    pub heal_amount: i32,
    pub shield_amount: i32,
    /// Strips every negative effect from the caster on use.
    pub purify: bool,
    pub effect_rules: Vec<SkillEffectRule>,
    pub base_cooldown: u32,
}

impl SkillTemplate {
    /// Resolves a raw definition, filling missing durations from the catalog.
    pub fn resolve(
        definition: SkillDefinition,
        effects: &EffectCatalog,
    ) -> Result<Self, ConfigError> {
        let amounts = [
            ("physical_damage", definition.physical_damage),
            ("magical_damage", definition.magical_damage),
            ("heal_amount", definition.heal_amount),
            ("shield_amount", definition.shield_amount),
        ];
        if let Some((field, _)) = amounts.into_iter().find(|(_, amount)| *amount < 0) {
            return Err(ConfigError::NegativeAmount {
                skill: definition.id.clone(),
                field,
            });
        }

        let mut effect_rules = Vec::with_capacity(definition.effect_rules.len());

        for spec in definition.effect_rules {
            let meta = effects
                .get(spec.effect_type_id)
                .ok_or_else(|| ConfigError::UnknownEffect {
                    skill: definition.id.clone(),
                    effect: spec.effect_type_id,
                })?;

            if !(0.0..=1.0).contains(&spec.chance) {
                return Err(ConfigError::InvalidChance {
                    skill: definition.id.clone(),
                    chance: spec.chance,
                });
            }

            if spec.value.is_some_and(|value| value < 0) {
                return Err(ConfigError::NegativeAmount {
                    skill: definition.id.clone(),
                    field: "effect value",
                });
            }

            effect_rules.push(SkillEffectRule {
                effect_type_id: spec.effect_type_id,
                display_name: meta.display_name.clone(),
                is_negative: meta.is_negative,
                target: spec.target,
                application_chance: spec.chance,
                value: spec.value,
                duration: spec.duration.unwrap_or(meta.default_duration),
            });
        }

        Ok(Self {
            id: definition.id,
            display_name: definition.display_name,
            description: definition.description,
            physical_damage: definition.physical_damage,
            magical_damage: definition.magical_damage,
            heal_amount: definition.heal_amount,
            shield_amount: definition.shield_amount,
            purify: definition.purify,
            effect_rules,
            base_cooldown: definition.cooldown,
        })
    }
}

/// Ordered, read-only registry of resolved skill templates.
///
/// Iteration follows definition order, which is also the order an enemy
/// uses its skills in.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    templates: Vec<Arc<SkillTemplate>>,
    index: HashMap<String, usize>,
}

impl SkillCatalog {
    pub fn get(&self, id: &str) -> Option<&Arc<SkillTemplate>> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the templates for `ids`, in the order given.
    ///
    /// `owner` only labels the error when an id is missing.
    pub fn select<'a>(
        &self,
        owner: &str,
        ids: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Arc<SkillTemplate>>, ConfigError> {
        ids.into_iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownSkill {
                        owner: owner.to_string(),
                        skill: id.to_string(),
                    })
            })
            .collect()
    }

    /// Returns an iterator over templates in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SkillTemplate>> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Resolves raw skill definitions into a [`SkillCatalog`].
///
/// Fails on the first skill that references an effect missing from
/// `effects`, carries an out-of-range chance, or reuses an id.
pub fn build_skill_templates(
    definitions: impl IntoIterator<Item = SkillDefinition>,
    effects: &EffectCatalog,
) -> Result<SkillCatalog, ConfigError> {
    let mut catalog = SkillCatalog::default();

    for definition in definitions {
        if catalog.index.contains_key(&definition.id) {
            return Err(ConfigError::DuplicateSkill(definition.id));
        }
        let template = SkillTemplate::resolve(definition, effects)?;
        catalog
            .index
            .insert(template.id.clone(), catalog.templates.len());
        catalog.templates.push(Arc::new(template));
    }

    Ok(catalog)
}
