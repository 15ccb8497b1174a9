//! What happened during one resolved turn.

use crate::catalog::{EffectKind, EffectTarget};
use crate::combat::{DamageDealt, TerminalOutcome};
use crate::state::Side;

/// Why a selected skill did not execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// The actor does not know a skill with this id.
    UnknownSkill,
    /// The skill is still cooling down.
    OnCooldown,
    /// The actor is frozen and skips every skill this turn.
    Frozen,
}

/// A selection that was ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedSkill {
    pub skill_id: String,
    pub reason: SkipReason,
}

/// An effect that landed on an entity this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedEffect {
    pub kind: EffectKind,
    pub target: EffectTarget,
}

/// Result of one executed skill.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillUse {
    pub skill_id: String,
    /// Damage computed for the skill, before the target's shield.
    pub damage: i32,
    pub dealt: DamageDealt,
    pub healed: i32,
    pub shield_gained: i32,
    /// Negative effects stripped from the caster.
    pub purified: usize,
    pub applied: Vec<AppliedEffect>,
}

/// Damage or healing an effect caused during the refresh step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectTick {
    pub kind: EffectKind,
    /// Health change on the actor; negative for damage.
    pub health_delta: i32,
}

/// Everything a presentation layer needs to narrate a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub actor: Side,
    /// Health changes from damage-over-time and healing effects.
    pub effect_ticks: Vec<EffectTick>,
    pub frozen: bool,
    pub used: Vec<SkillUse>,
    pub skipped: Vec<SkippedSkill>,
    /// Effects that ran out on the actor at the end of the turn.
    pub expired: Vec<EffectKind>,
    pub outcome: Option<TerminalOutcome>,
}

impl TurnReport {
    pub(crate) fn new(actor: Side) -> Self {
        Self {
            actor,
            effect_ticks: Vec::new(),
            frozen: false,
            used: Vec::new(),
            skipped: Vec::new(),
            expired: Vec::new(),
            outcome: None,
        }
    }

    pub(crate) fn skip(&mut self, skill_id: &str, reason: SkipReason) {
        self.skipped.push(SkippedSkill {
            skill_id: skill_id.to_string(),
            reason,
        });
    }

    /// Total damage dealt to the opponent's shield and health by skills.
    pub fn total_damage(&self) -> i32 {
        self.used
            .iter()
            .map(|u| u.dealt.absorbed + u.dealt.health_lost)
            .sum()
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}
