//! Effect catalog: display metadata for every status effect kind.

use std::collections::HashMap;

use crate::error::ConfigError;

/// Closed set of status effect kinds the refresh step knows how to apply.
///
/// Content refers to these by their snake_case identifier
/// (`"magic_boost"`, `"poisoned"`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectKind {
    // ========================================================================
    // Damage over time
    // ========================================================================
    /// Loses a percentage of current health each turn.
    Burning,

    /// Loses a percentage of max health each turn.
    Poisoned,

    // ========================================================================
    // Control / debuffs
    // ========================================================================
    /// Cannot use skills this turn.
    Frozen,

    /// Outgoing damage reduced by a flat amount.
    Weakness,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Regains `value` health each turn.
    Healing,

    /// Adds `value` to outgoing magical damage.
    MagicBoost,

    /// Adds `value` to outgoing physical damage.
    PhysicalBoost,
}

/// Immutable catalog entry describing one effect kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectDefinition {
    pub type_id: EffectKind,
    pub display_name: String,
    pub is_negative: bool,
    /// Duration used when a skill rule does not specify one.
    pub default_duration: u32,
}

impl EffectDefinition {
    pub fn new(
        type_id: EffectKind,
        display_name: impl Into<String>,
        is_negative: bool,
        default_duration: u32,
    ) -> Self {
        Self {
            type_id,
            display_name: display_name.into(),
            is_negative,
            default_duration,
        }
    }
}

/// Read-only registry of effect definitions, built once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectCatalog {
    definitions: HashMap<EffectKind, EffectDefinition>,
}

impl EffectCatalog {
    /// Builds a catalog, rejecting duplicate kinds.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = EffectDefinition>,
    ) -> Result<Self, ConfigError> {
        let mut map = HashMap::new();
        for definition in definitions {
            let kind = definition.type_id;
            if map.insert(kind, definition).is_some() {
                return Err(ConfigError::DuplicateEffect(kind));
            }
        }
        Ok(Self { definitions: map })
    }

    pub fn get(&self, kind: EffectKind) -> Option<&EffectDefinition> {
        self.definitions.get(&kind)
    }

    pub fn contains(&self, kind: EffectKind) -> bool {
        self.definitions.contains_key(&kind)
    }

    /// Returns an iterator over all registered definitions.
    pub fn iter(&self) -> impl Iterator<Item = &EffectDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kinds_parse_from_snake_case() {
        assert_eq!("magic_boost".parse(), Ok(EffectKind::MagicBoost));
        assert_eq!("poisoned".parse(), Ok(EffectKind::Poisoned));
        assert!("stunned".parse::<EffectKind>().is_err());

        for kind in EffectKind::iter() {
            assert_eq!(kind.as_ref().parse(), Ok(kind));
        }
    }

    #[test]
    fn duplicate_definitions_are_rejected() {
        let result = EffectCatalog::from_definitions([
            EffectDefinition::new(EffectKind::Frozen, "Frozen", true, 1),
            EffectDefinition::new(EffectKind::Frozen, "Frozen Again", true, 2),
        ]);
        assert_eq!(result, Err(ConfigError::DuplicateEffect(EffectKind::Frozen)));
    }
}
