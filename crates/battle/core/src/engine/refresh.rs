//! Refresh step: rebuild an entity's derived modifiers from its effects.
//!
//! Each effect kind has exactly one handler. Handlers run in effect-list
//! order, so damage-over-time sees health as left by earlier handlers.

use crate::catalog::EffectKind;
use crate::combat::{apply_damage, percent_of};
use crate::config::BattleConfig;
use crate::state::{ActiveEffect, BattleEntity};

use super::report::EffectTick;

type Handler = fn(&mut BattleEntity, &ActiveEffect, &BattleConfig);

fn handler(kind: EffectKind) -> Handler {
    match kind {
        EffectKind::Burning => burn,
        EffectKind::Poisoned => poison,
        EffectKind::Frozen => freeze,
        EffectKind::Weakness => weaken,
        EffectKind::Healing => regenerate,
        EffectKind::MagicBoost => boost_magic,
        EffectKind::PhysicalBoost => boost_physical,
    }
}

fn burn(entity: &mut BattleEntity, _: &ActiveEffect, config: &BattleConfig) {
    let damage = percent_of(entity.current_health, config.burning_percent);
    apply_damage(entity, damage);
}

fn poison(entity: &mut BattleEntity, _: &ActiveEffect, config: &BattleConfig) {
    let damage = percent_of(entity.max_health, config.poison_percent);
    apply_damage(entity, damage);
}

fn freeze(entity: &mut BattleEntity, _: &ActiveEffect, _: &BattleConfig) {
    entity.is_frozen = true;
}

// Non-stacking: several weakness effects still give one penalty.
fn weaken(entity: &mut BattleEntity, _: &ActiveEffect, config: &BattleConfig) {
    entity.weakness = config.weakness_penalty;
}

fn regenerate(entity: &mut BattleEntity, effect: &ActiveEffect, config: &BattleConfig) {
    if config.healing_effect_clamp {
        entity.heal_clamped(effect.magnitude());
    } else {
        entity.current_health += effect.magnitude();
    }
}

fn boost_magic(entity: &mut BattleEntity, effect: &ActiveEffect, _: &BattleConfig) {
    entity.magical_buff += effect.magnitude();
}

fn boost_physical(entity: &mut BattleEntity, effect: &ActiveEffect, _: &BattleConfig) {
    entity.physical_buff += effect.magnitude();
}

/// Resets derived modifiers and re-applies every active effect.
///
/// Returns the health change each effect caused, skipping effects that
/// left health untouched.
pub fn refresh_effects(entity: &mut BattleEntity, config: &BattleConfig) -> Vec<EffectTick> {
    entity.reset_derived();

    // Handlers need `&mut entity`, so iterate over a snapshot of the list.
    let effects: Vec<ActiveEffect> = entity.active_effects.iter().cloned().collect();
    let mut ticks = Vec::new();

    for effect in &effects {
        let before = entity.current_health;
        handler(effect.kind)(entity, effect, config);
        let health_delta = entity.current_health - before;

        tracing::trace!(
            entity = %entity.display_name,
            effect = %effect.kind,
            health_delta,
            "effect refreshed"
        );

        if health_delta != 0 {
            ticks.push(EffectTick {
                kind: effect.kind,
                health_delta,
            });
        }
    }

    ticks
}
