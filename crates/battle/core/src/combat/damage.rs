//! Damage calculation and application.

use crate::catalog::SkillTemplate;
use crate::state::BattleEntity;

/// How a single damage application was split between shield and health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageDealt {
    /// Shield points consumed.
    pub absorbed: i32,
    /// Health points lost.
    pub health_lost: i32,
}

/// Rounds to the nearest integer, ties to even.
///
/// Every health and shield mutation goes through this so that no fractional
/// value survives a turn.
pub fn round_stat(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Calculate the damage a skill deals when used by `attacker`.
///
/// # Formula
///
/// ```text
/// total = (physical + physical_buff) + (magical + magical_buff) - weakness
/// final = max(total, 0)
/// ```
pub fn skill_damage(skill: &SkillTemplate, attacker: &BattleEntity) -> i32 {
    let physical = skill.physical_damage + attacker.physical_buff;
    let magical = skill.magical_damage + attacker.magical_buff;
    (physical + magical - attacker.weakness).max(0)
}

/// Apply damage to an entity, shield first.
///
/// The shield soaks as much as it can; only the overflow reaches health.
/// Health is clamped at zero.
///
/// # Arguments
///
/// * `target` - Entity receiving the damage
/// * `damage` - Raw amount, possibly fractional (percentage-based effects)
///
/// # Returns
///
/// The split between shield and health
pub fn apply_damage(target: &mut BattleEntity, damage: f64) -> DamageDealt {
    let shield_before = target.shield;
    let health_before = target.current_health;

    let remaining_shield = round_stat(f64::from(target.shield) - damage);
    if remaining_shield <= 0 {
        target.current_health += remaining_shield;
        target.shield = 0;
    } else {
        target.shield = remaining_shield;
    }
    target.current_health = target.current_health.max(0);

    tracing::trace!(
        entity = %target.display_name,
        damage,
        shield = target.shield,
        health = target.current_health,
        "damage applied"
    );

    DamageDealt {
        absorbed: shield_before - target.shield,
        health_lost: health_before - target.current_health,
    }
}

/// Damage taken from a percentage of `base`.
pub fn percent_of(base: i32, percent: u32) -> f64 {
    f64::from(base) * (f64::from(percent) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::state::Side;

    fn entity(health: i32, max: i32, shield: i32) -> BattleEntity {
        let no_skills: Vec<Arc<SkillTemplate>> = Vec::new();
        let mut entity = BattleEntity::new(Side::Enemy, "dummy", max, no_skills).unwrap();
        entity.current_health = health;
        entity.shield = shield;
        entity
    }

    #[test]
    fn shield_absorbs_damage_it_can_cover() {
        let mut target = entity(50, 100, 10);
        let dealt = apply_damage(&mut target, 6.0);

        assert_eq!(target.shield, 4);
        assert_eq!(target.current_health, 50);
        assert_eq!(
            dealt,
            DamageDealt {
                absorbed: 6,
                health_lost: 0
            }
        );
    }

    #[test]
    fn overflow_past_the_shield_hits_health() {
        let mut target = entity(50, 100, 10);
        let dealt = apply_damage(&mut target, 15.0);

        assert_eq!(target.shield, 0);
        assert_eq!(target.current_health, 45);
        assert_eq!(
            dealt,
            DamageDealt {
                absorbed: 10,
                health_lost: 5
            }
        );
    }

    #[test]
    fn exact_shield_break_leaves_health_untouched() {
        let mut target = entity(50, 100, 10);
        apply_damage(&mut target, 10.0);

        assert_eq!(target.shield, 0);
        assert_eq!(target.current_health, 50);
    }

    #[test]
    fn health_is_clamped_at_zero() {
        let mut target = entity(10, 30, 0);
        let dealt = apply_damage(&mut target, 20.0);

        assert_eq!(target.current_health, 0);
        assert_eq!(dealt.health_lost, 10);
    }

    #[test]
    fn fractional_damage_rounds_half_to_even() {
        // 5% of 50 is 2.5, which rounds to 2.
        let mut target = entity(50, 100, 0);
        apply_damage(&mut target, percent_of(50, 5));
        assert_eq!(target.current_health, 48);

        // 5% of 70 is 3.5, which rounds to 4.
        let mut target = entity(70, 100, 0);
        apply_damage(&mut target, percent_of(70, 5));
        assert_eq!(target.current_health, 66);
    }

    #[test]
    fn weakness_cannot_push_damage_negative() {
        let skill = SkillTemplate {
            id: "poke".into(),
            display_name: "Poke".into(),
            description: String::new(),
            physical_damage: 1,
            magical_damage: 0,
            heal_amount: 0,
            shield_amount: 0,
            purify: false,
            effect_rules: Vec::new(),
            base_cooldown: 0,
        };
        let mut attacker = entity(10, 10, 0);
        attacker.weakness = 2;
        assert_eq!(skill_damage(&skill, &attacker), 0);

        attacker.weakness = 0;
        attacker.physical_buff = 3;
        attacker.magical_buff = 2;
        assert_eq!(skill_damage(&skill, &attacker), 6);
    }
}
