//! Timed status effects carried by one entity.
//!
//! # Turn-based Duration
//!
//! Effects count down once per turn of the entity that carries them. A
//! freshly applied effect is *hanging*: its first tick only clears the flag,
//! so it is never shortened on the turn it was granted.

use crate::catalog::{EffectKind, SkillEffectRule};
use crate::config::BattleConfig;

/// A live status effect on one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub display_name: String,
    pub is_negative: bool,
    /// Skip the next duration decrement.
    pub hanging: bool,
    pub value: Option<i32>,
    pub remaining_duration: u32,
}

impl ActiveEffect {
    /// Creates a hanging effect from a skill rule that just fired.
    pub fn from_rule(rule: &SkillEffectRule) -> Self {
        Self {
            kind: rule.effect_type_id,
            display_name: rule.display_name.clone(),
            is_negative: rule.is_negative,
            hanging: true,
            value: rule.value,
            remaining_duration: rule.duration,
        }
    }

    /// Magnitude for value-driven effects; absent values count as zero.
    pub fn magnitude(&self) -> i32 {
        self.value.unwrap_or(0)
    }
}

/// Ordered list of active effects.
///
/// Order matters: the refresh step applies effects in insertion order, so
/// e.g. a burn applied before a heal sees the lower health.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusEffects {
    effects: Vec<ActiveEffect>,
}

impl StatusEffects {
    /// Creates an empty status effect list.
    pub fn empty() -> Self {
        Self {
            effects: Vec::with_capacity(BattleConfig::MAX_ACTIVE_EFFECTS),
        }
    }

    /// Appends an effect after all existing ones.
    pub fn push(&mut self, effect: ActiveEffect) {
        self.effects.push(effect);
    }

    /// Checks if any effect of `kind` is active.
    pub fn has(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Removes every negative effect. Returns how many were removed.
    pub fn purify(&mut self) -> usize {
        let before = self.effects.len();
        self.effects.retain(|e| !e.is_negative);
        before - self.effects.len()
    }

    /// Advances every effect by one turn and drops the expired ones.
    ///
    /// Hanging effects only lose their flag. Returns the kinds that expired,
    /// in list order.
    pub fn tick(&mut self) -> Vec<EffectKind> {
        for effect in &mut self.effects {
            if effect.hanging {
                effect.hanging = false;
            } else {
                effect.remaining_duration = effect.remaining_duration.saturating_sub(1);
            }
        }

        let expired = self
            .effects
            .iter()
            .filter(|e| e.remaining_duration == 0)
            .map(|e| e.kind)
            .collect();
        self.effects.retain(|e| e.remaining_duration > 0);
        expired
    }

    /// Returns an iterator over effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
