//! Battle configuration constants and tunable parameters.

use crate::error::ConfigError;

/// Tunable battle rules.
///
/// Defaults reproduce the shipped balance; `config.toml` may override any
/// field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Percentage of *current* health lost per turn while burning.
    pub burning_percent: u32,

    /// Percentage of *max* health lost per turn while poisoned.
    pub poison_percent: u32,

    /// Flat reduction applied to a weakened entity's outgoing damage.
    pub weakness_penalty: i32,

    /// Pacing delay before the enemy acts, in milliseconds.
    ///
    /// Purely cosmetic; skipping it does not change any outcome.
    pub enemy_turn_delay_ms: u64,

    /// Whether the `healing` status effect is capped at max health.
    ///
    /// Skill heals are always capped. Setting this to `false` reproduces the
    /// legacy over-heal where a healing effect could lift health above max.
    pub healing_effect_clamp: bool,

    /// Player max health by level.
    pub level_health: Vec<LevelHealth>,
}

/// One row of the player health table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelHealth {
    pub level: u32,
    pub max_health: i32,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Upper bound on active effects a single entity is expected to carry.
    /// Used only as an allocation hint.
    pub const MAX_ACTIVE_EFFECTS: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BURNING_PERCENT: u32 = 5;
    pub const DEFAULT_POISON_PERCENT: u32 = 10;
    pub const DEFAULT_WEAKNESS_PENALTY: i32 = 2;
    pub const DEFAULT_ENEMY_TURN_DELAY_MS: u64 = 1000;
    pub const DEFAULT_PLAYER_HEALTH: i32 = 100;

    pub fn new() -> Self {
        Self {
            burning_percent: Self::DEFAULT_BURNING_PERCENT,
            poison_percent: Self::DEFAULT_POISON_PERCENT,
            weakness_penalty: Self::DEFAULT_WEAKNESS_PENALTY,
            enemy_turn_delay_ms: Self::DEFAULT_ENEMY_TURN_DELAY_MS,
            healing_effect_clamp: true,
            level_health: vec![LevelHealth {
                level: 1,
                max_health: Self::DEFAULT_PLAYER_HEALTH,
            }],
        }
    }

    /// Looks up the player's max health for `level`.
    pub fn max_health_for_level(&self, level: u32) -> Result<i32, ConfigError> {
        self.level_health
            .iter()
            .find(|row| row.level == level)
            .map(|row| row.max_health)
            .ok_or(ConfigError::MissingLevel(level))
    }

    /// Enemy pacing delay as a [`core::time::Duration`].
    pub fn enemy_turn_delay(&self) -> core::time::Duration {
        core::time::Duration::from_millis(self.enemy_turn_delay_ms)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_table_has_level_one() {
        let config = BattleConfig::default();
        assert_eq!(config.max_health_for_level(1), Ok(100));
        assert_eq!(
            config.max_health_for_level(7),
            Err(ConfigError::MissingLevel(7))
        );
    }
}
