//! Turn resolution.
//!
//! [`TurnEngine::resolve_turn`] is the only place battle state changes. One
//! call runs one side's whole turn, in this order:
//!
//! 1. refresh the actor's derived modifiers from its active effects
//! 2. skip all skills if the actor is frozen
//! 3. execute each selected skill that is off cooldown, in selection order
//! 4. tick the actor's effect durations and drop expired effects
//! 5. tick the actor's cooldowns
//! 6. check for a terminal outcome (player first)
//!
//! Only the actor's effects and cooldowns advance; the target's advance on
//! its own turn.

mod refresh;
mod report;

pub use refresh::refresh_effects;
pub use report::{AppliedEffect, EffectTick, SkillUse, SkipReason, SkippedSkill, TurnReport};

use std::sync::Arc;

use crate::catalog::{EffectTarget, SkillTemplate};
use crate::combat::{TerminalOutcome, apply_damage, skill_damage};
use crate::config::BattleConfig;
use crate::rng::RollSource;
use crate::state::{ActiveEffect, BattleEntity, Side};

/// Resolves turns against a fixed configuration and roll source.
pub struct TurnEngine<'a, R: RollSource + ?Sized> {
    config: &'a BattleConfig,
    rolls: &'a mut R,
}

impl<'a, R: RollSource + ?Sized> TurnEngine<'a, R> {
    pub fn new(config: &'a BattleConfig, rolls: &'a mut R) -> Self {
        Self { config, rolls }
    }

    /// Runs one full turn for `actor` against `target`.
    ///
    /// Selections naming an unknown skill or a skill on cooldown are skipped
    /// and listed in [`TurnReport::skipped`]; they never fail the turn.
    pub fn resolve_turn<S: AsRef<str>>(
        &mut self,
        actor: &mut BattleEntity,
        target: &mut BattleEntity,
        chosen_skill_ids: &[S],
    ) -> TurnReport {
        let mut report = TurnReport::new(actor.side);

        report.effect_ticks = refresh_effects(actor, self.config);
        report.frozen = actor.is_frozen;

        if actor.is_frozen {
            tracing::debug!(actor = %actor.display_name, "frozen, skipping skills");
            for id in chosen_skill_ids {
                report.skip(id.as_ref(), SkipReason::Frozen);
            }
        } else {
            for id in chosen_skill_ids {
                let id = id.as_ref();
                match actor.skills.get(id) {
                    None => {
                        tracing::debug!(
                            actor = %actor.display_name,
                            skill = id,
                            "unknown skill selected"
                        );
                        report.skip(id, SkipReason::UnknownSkill);
                    }
                    Some(skill) if !skill.is_ready() => {
                        tracing::debug!(
                            actor = %actor.display_name,
                            skill = id,
                            cooldown = skill.current_cooldown,
                            "skill on cooldown"
                        );
                        report.skip(id, SkipReason::OnCooldown);
                    }
                    Some(skill) => {
                        let template = Arc::clone(&skill.template);
                        let used = self.use_skill(actor, target, &template);
                        if let Some(skill) = actor.skills.get_mut(id) {
                            skill.mark_used();
                        }
                        report.used.push(used);
                    }
                }
            }
        }

        report.expired = actor.active_effects.tick();
        actor.skills.tick();

        report.outcome = match actor.side {
            Side::Player => TerminalOutcome::evaluate(actor, target),
            Side::Enemy => TerminalOutcome::evaluate(target, actor),
        };

        report
    }

    /// Applies one skill's damage, heal, shield, purify and effect rules.
    fn use_skill(
        &mut self,
        actor: &mut BattleEntity,
        target: &mut BattleEntity,
        skill: &SkillTemplate,
    ) -> SkillUse {
        let damage = skill_damage(skill, actor);
        let dealt = apply_damage(target, f64::from(damage));

        let healed = actor.heal_clamped(skill.heal_amount);
        actor.shield += skill.shield_amount;

        let purified = if skill.purify {
            actor.active_effects.purify()
        } else {
            0
        };

        let mut applied = Vec::new();
        for rule in &skill.effect_rules {
            let roll = self.rolls.roll();
            let lands = roll <= rule.application_chance;
            tracing::debug!(
                skill = %skill.id,
                effect = %rule.effect_type_id,
                roll,
                chance = rule.application_chance,
                lands,
                "effect roll"
            );
            if !lands {
                continue;
            }

            let effect = ActiveEffect::from_rule(rule);
            match rule.target {
                EffectTarget::Caster => actor.active_effects.push(effect),
                EffectTarget::Opponent => target.active_effects.push(effect),
            }
            applied.push(AppliedEffect {
                kind: rule.effect_type_id,
                target: rule.target,
            });
        }

        SkillUse {
            skill_id: skill.id.clone(),
            damage,
            dealt,
            healed,
            shield_gained: skill.shield_amount,
            purified,
            applied,
        }
    }
}

/// Convenience wrapper around [`TurnEngine::resolve_turn`].
pub fn resolve_turn<S: AsRef<str>, R: RollSource + ?Sized>(
    actor: &mut BattleEntity,
    target: &mut BattleEntity,
    chosen_skill_ids: &[S],
    config: &BattleConfig,
    rolls: &mut R,
) -> TurnReport {
    TurnEngine::new(config, rolls).resolve_turn(actor, target, chosen_skill_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        EffectCatalog, EffectDefinition, EffectKind, SkillDefinition, SkillEffectSpec,
        build_skill_templates,
    };
    use crate::rng::{FixedRolls, PcgRolls};

    const HIT: f64 = 0.0;
    const MISS: f64 = 0.99;

    fn effects() -> EffectCatalog {
        EffectCatalog::from_definitions([
            EffectDefinition::new(EffectKind::Burning, "Burning", true, 2),
            EffectDefinition::new(EffectKind::Poisoned, "Poisoned", true, 2),
            EffectDefinition::new(EffectKind::Frozen, "Frozen", true, 1),
            EffectDefinition::new(EffectKind::Weakness, "Weakness", true, 2),
            EffectDefinition::new(EffectKind::Healing, "Healing", false, 2),
            EffectDefinition::new(EffectKind::MagicBoost, "Magic Boost", false, 2),
            EffectDefinition::new(EffectKind::PhysicalBoost, "Physical Boost", false, 2),
        ])
        .unwrap()
    }

    fn rule(kind: EffectKind, target: EffectTarget, duration: Option<u32>) -> SkillEffectSpec {
        SkillEffectSpec {
            effect_type_id: kind,
            target,
            chance: 0.5,
            value: Some(3),
            duration,
        }
    }

    fn skills() -> Vec<SkillDefinition> {
        vec![
            SkillDefinition {
                id: "strike".into(),
                physical_damage: 20,
                ..Default::default()
            },
            SkillDefinition {
                id: "slam".into(),
                physical_damage: 5,
                cooldown: 1,
                ..Default::default()
            },
            SkillDefinition {
                id: "guard".into(),
                shield_amount: 8,
                heal_amount: 15,
                ..Default::default()
            },
            SkillDefinition {
                id: "cleanse".into(),
                purify: true,
                effect_rules: vec![rule(EffectKind::Weakness, EffectTarget::Caster, None)],
                ..Default::default()
            },
            SkillDefinition {
                id: "frost".into(),
                magical_damage: 2,
                effect_rules: vec![rule(EffectKind::Frozen, EffectTarget::Opponent, None)],
                ..Default::default()
            },
            SkillDefinition {
                id: "hex".into(),
                effect_rules: vec![rule(EffectKind::Burning, EffectTarget::Opponent, Some(1))],
                ..Default::default()
            },
            SkillDefinition {
                id: "focus".into(),
                effect_rules: vec![rule(EffectKind::MagicBoost, EffectTarget::Caster, Some(2))],
                ..Default::default()
            },
        ]
    }

    fn entity(side: Side, max_health: i32, loadout: &[&str]) -> BattleEntity {
        let catalog = build_skill_templates(skills(), &effects()).unwrap();
        let templates = catalog.select("test", loadout.iter().copied()).unwrap();
        BattleEntity::new(side, side.to_string(), max_health, templates).unwrap()
    }

    fn resolve(
        actor: &mut BattleEntity,
        target: &mut BattleEntity,
        ids: &[&str],
        roll: f64,
    ) -> TurnReport {
        let mut rolls = FixedRolls::always(roll);
        resolve_turn(actor, target, ids, &BattleConfig::default(), &mut rolls)
    }

    #[test]
    fn two_strikes_defeat_a_weak_enemy() {
        let mut player = entity(Side::Player, 100, &["strike"]);
        let mut enemy = entity(Side::Enemy, 30, &[]);

        let first = resolve(&mut player, &mut enemy, &["strike"], MISS);
        assert_eq!(enemy.current_health, 10);
        assert_eq!(first.outcome, None);

        let second = resolve(&mut player, &mut enemy, &["strike"], MISS);
        assert_eq!(enemy.current_health, 0);
        assert_eq!(second.outcome, Some(TerminalOutcome::PlayerWins));
    }

    #[test]
    fn used_skill_is_gated_on_the_next_turn() {
        let mut player = entity(Side::Player, 100, &["slam"]);
        let mut enemy = entity(Side::Enemy, 100, &[]);

        resolve(&mut player, &mut enemy, &["slam"], MISS);
        assert_eq!(enemy.current_health, 95);
        assert_eq!(player.skills.get("slam").unwrap().current_cooldown, 1);

        let report = resolve(&mut player, &mut enemy, &["slam"], MISS);
        assert_eq!(enemy.current_health, 95);
        assert_eq!(
            report.skipped,
            vec![SkippedSkill {
                skill_id: "slam".into(),
                reason: SkipReason::OnCooldown
            }]
        );
        assert!(player.skills.get("slam").unwrap().is_ready());

        resolve(&mut player, &mut enemy, &["slam"], MISS);
        assert_eq!(enemy.current_health, 90);
    }

    #[test]
    fn unknown_selection_is_skipped_not_fatal() {
        let mut player = entity(Side::Player, 100, &["strike"]);
        let mut enemy = entity(Side::Enemy, 100, &[]);

        let report = resolve(&mut player, &mut enemy, &["meteor", "strike"], MISS);

        assert_eq!(enemy.current_health, 80);
        assert_eq!(report.skipped[0].reason, SkipReason::UnknownSkill);
        assert_eq!(report.used.len(), 1);
    }

    #[test]
    fn heal_is_clamped_and_shield_accumulates() {
        let mut player = entity(Side::Player, 100, &["guard"]);
        let mut enemy = entity(Side::Enemy, 100, &[]);
        player.current_health = 90;
        player.shield = 5;

        let report = resolve(&mut player, &mut enemy, &["guard"], MISS);

        assert_eq!(player.current_health, 100);
        assert_eq!(player.shield, 13);
        assert_eq!(report.used[0].healed, 10);
        assert_eq!(report.used[0].shield_gained, 8);
    }

    #[test]
    fn frozen_actor_uses_nothing_but_still_ticks() {
        let mut player = entity(Side::Player, 100, &["frost"]);
        let mut enemy = entity(Side::Enemy, 100, &["strike", "guard"]);

        resolve(&mut player, &mut enemy, &["frost"], HIT);
        assert!(enemy.active_effects.has(EffectKind::Frozen));
        let player_before = player.current_health;

        let report = resolve(&mut enemy, &mut player, &["strike", "guard"], MISS);
        assert!(report.frozen);
        assert!(report.used.is_empty());
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(player.current_health, player_before);
        assert_eq!(enemy.shield, 0);

        // The freeze was hanging, so this tick only cleared the flag.
        let frozen = enemy.active_effects.iter().next().unwrap();
        assert!(!frozen.hanging);
        assert_eq!(frozen.remaining_duration, 1);

        // Frozen again next turn, then it expires.
        let report = resolve(&mut enemy, &mut player, &["strike"], MISS);
        assert!(report.frozen);
        assert_eq!(report.expired, vec![EffectKind::Frozen]);
        assert!(enemy.active_effects.is_empty());

        let report = resolve(&mut enemy, &mut player, &["strike"], MISS);
        assert!(!report.frozen);
        assert_eq!(report.used.len(), 1);
    }

    #[test]
    fn self_effect_does_not_tick_on_the_turn_it_is_granted() {
        let mut player = entity(Side::Player, 100, &["focus", "strike"]);
        let mut enemy = entity(Side::Enemy, 1000, &[]);

        resolve(&mut player, &mut enemy, &["focus"], HIT);
        let boost = player.active_effects.iter().next().unwrap();
        assert_eq!(boost.remaining_duration, 2);
        assert!(!boost.hanging);

        // Boost applies from the next refresh onwards.
        resolve(&mut player, &mut enemy, &["strike"], MISS);
        assert_eq!(player.magical_buff, 3);
        assert_eq!(enemy.current_health, 1000 - 23);
        assert_eq!(player.active_effects.iter().next().unwrap().remaining_duration, 1);

        let report = resolve(&mut player, &mut enemy, &[] as &[&str], MISS);
        assert_eq!(report.expired, vec![EffectKind::MagicBoost]);
        assert!(player.active_effects.is_empty());
    }

    #[test]
    fn purify_runs_before_the_skill_adds_its_own_effects() {
        let mut player = entity(Side::Player, 100, &["cleanse"]);
        let mut enemy = entity(Side::Enemy, 100, &["hex"]);

        resolve(&mut enemy, &mut player, &["hex"], HIT);
        assert!(player.active_effects.has(EffectKind::Burning));

        let report = resolve(&mut player, &mut enemy, &["cleanse"], HIT);

        assert_eq!(report.used[0].purified, 1);
        assert!(!player.active_effects.has(EffectKind::Burning));
        // The negative weakness granted by the same skill survives.
        assert!(player.active_effects.has(EffectKind::Weakness));
    }

    #[test]
    fn missed_rolls_apply_nothing() {
        let mut player = entity(Side::Player, 100, &["hex"]);
        let mut enemy = entity(Side::Enemy, 100, &[]);

        let report = resolve(&mut player, &mut enemy, &["hex"], MISS);

        assert!(report.used[0].applied.is_empty());
        assert!(enemy.active_effects.is_empty());
    }

    #[test]
    fn burn_on_opponent_lands_on_their_next_refresh() {
        let mut player = entity(Side::Player, 100, &["hex"]);
        let mut enemy = entity(Side::Enemy, 100, &[]);

        resolve(&mut player, &mut enemy, &["hex"], HIT);
        assert_eq!(enemy.current_health, 100);

        let report = resolve(&mut enemy, &mut player, &[] as &[&str], MISS);
        assert_eq!(enemy.current_health, 95);
        assert_eq!(
            report.effect_ticks,
            vec![EffectTick {
                kind: EffectKind::Burning,
                health_delta: -5
            }]
        );
    }

    #[test]
    fn simultaneous_defeat_counts_as_player_loss() {
        let mut player = entity(Side::Player, 100, &["strike"]);
        let mut enemy = entity(Side::Enemy, 100, &[]);
        player.current_health = 5;
        enemy.current_health = 10;
        player.active_effects.push(ActiveEffect {
            kind: EffectKind::Poisoned,
            display_name: "Poisoned".into(),
            is_negative: true,
            hanging: false,
            value: None,
            remaining_duration: 2,
        });

        let report = resolve(&mut player, &mut enemy, &["strike"], MISS);

        assert_eq!(player.current_health, 0);
        assert_eq!(enemy.current_health, 0);
        assert_eq!(report.outcome, Some(TerminalOutcome::PlayerLoses));
    }

    #[test]
    fn enemy_turn_reports_outcome_from_player_perspective() {
        let mut player = entity(Side::Player, 100, &[]);
        let mut enemy = entity(Side::Enemy, 100, &["strike"]);
        player.current_health = 20;

        let report = resolve(&mut enemy, &mut player, &["strike"], MISS);

        assert_eq!(report.actor, Side::Enemy);
        assert_eq!(report.outcome, Some(TerminalOutcome::PlayerLoses));
    }

    #[test]
    fn health_stays_in_bounds_over_random_battles() {
        let loadout = ["strike", "slam", "guard", "cleanse", "frost", "hex", "focus"];

        for seed in 0..32 {
            let mut rolls = PcgRolls::new(seed);
            let config = BattleConfig::default();
            let mut player = entity(Side::Player, 100, &loadout);
            let mut enemy = entity(Side::Enemy, 150, &loadout);

            for _ in 0..40 {
                let ids = player.skills.ready_ids();
                let report = resolve_turn(&mut player, &mut enemy, &ids, &config, &mut rolls);
                for e in [&player, &enemy] {
                    assert!((0..=e.max_health).contains(&e.current_health));
                    assert!(e.shield >= 0);
                    assert!(e.active_effects.iter().all(|f| f.remaining_duration > 0));
                }
                if report.is_terminal() {
                    break;
                }

                let ids = enemy.skills.ready_ids();
                let report = resolve_turn(&mut enemy, &mut player, &ids, &config, &mut rolls);
                for e in [&player, &enemy] {
                    assert!((0..=e.max_health).contains(&e.current_health));
                    assert!(e.shield >= 0);
                }
                if report.is_terminal() {
                    break;
                }
            }
        }
    }
}
