//! Encounter orchestrator.
//!
//! [`Battle`] drives one encounter through its phases:
//!
//! ```text
//! PlayerChoosing -> PlayerResolving -> Finished | EnemyWaiting
//! EnemyWaiting   -> EnemyResolving  -> Finished | PlayerChoosing
//! PlayerChoosing -> Disengaged (forfeit)
//! ```
//!
//! The resolving phases only exist while [`TurnEngine::resolve_turn`] runs;
//! callers always observe one of the settled phases.
use std::fmt;
use std::time::Duration;

use battle_core::{
    BattleConfig, BattleEntity, EffectKind, RewardTable, RollSource, Side, TerminalOutcome,
    TurnEngine, TurnReport,
};

use crate::error::{Result, RuntimeError};
use crate::hooks::EncounterHooks;

/// Where the encounter currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// The player is toggling skills for the next turn.
    PlayerChoosing,
    PlayerResolving,
    /// Cosmetic pause before the enemy acts.
    EnemyWaiting { elapsed: Duration },
    EnemyResolving,
    Finished(TerminalOutcome),
    /// The player forfeited.
    Disengaged,
}

impl BattlePhase {
    /// Whether the encounter has ended, by outcome or forfeit.
    pub fn is_over(&self) -> bool {
        matches!(self, BattlePhase::Finished(_) | BattlePhase::Disengaged)
    }
}

impl fmt::Display for BattlePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattlePhase::PlayerChoosing => write!(f, "player_choosing"),
            BattlePhase::PlayerResolving => write!(f, "player_resolving"),
            BattlePhase::EnemyWaiting { .. } => write!(f, "enemy_waiting"),
            BattlePhase::EnemyResolving => write!(f, "enemy_resolving"),
            BattlePhase::Finished(outcome) => write!(f, "finished ({})", outcome),
            BattlePhase::Disengaged => write!(f, "disengaged"),
        }
    }
}

/// One encounter between the player and a single NPC.
///
/// Owns both entities for the whole encounter; they are dropped with it.
pub struct Battle {
    npc_name: String,
    player: BattleEntity,
    enemy: BattleEntity,
    config: BattleConfig,
    rolls: Box<dyn RollSource + Send>,
    rewards: RewardTable,
    selection: Vec<String>,
    phase: BattlePhase,
    round: u32,
}

impl Battle {
    /// Starts an encounter with the player choosing first.
    pub fn new(
        npc_name: impl Into<String>,
        player: BattleEntity,
        enemy: BattleEntity,
        config: BattleConfig,
        rewards: RewardTable,
        rolls: Box<dyn RollSource + Send>,
    ) -> Self {
        let npc_name = npc_name.into();
        tracing::info!(
            npc = %npc_name,
            player_health = player.current_health,
            enemy_health = enemy.current_health,
            "battle started"
        );

        Self {
            npc_name,
            player,
            enemy,
            config,
            rolls,
            rewards,
            selection: Vec::new(),
            phase: BattlePhase::PlayerChoosing,
            round: 1,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn player(&self) -> &BattleEntity {
        &self.player
    }

    pub fn enemy(&self) -> &BattleEntity {
        &self.enemy
    }

    pub fn npc_name(&self) -> &str {
        &self.npc_name
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    /// Skills toggled on for the next player turn, in toggle order.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Current round, starting at 1 and advancing after each enemy turn.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<TerminalOutcome> {
        match self.phase {
            BattlePhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Whether `side` will lose its next turn to a freeze.
    ///
    /// Lets the presentation layer warn before the player commits a
    /// selection that will be skipped.
    pub fn is_frozen_next_turn(&self, side: Side) -> bool {
        let entity = match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        };
        entity.active_effects.has(EffectKind::Frozen)
    }

    /// Toggles `skill_id` in the pending selection.
    ///
    /// Returns whether the skill is selected afterwards. Ids are not checked
    /// here; the turn reports anything it could not use.
    pub fn toggle_skill(&mut self, skill_id: &str) -> Result<bool> {
        self.expect_phase("toggle a skill", |phase| {
            matches!(phase, BattlePhase::PlayerChoosing)
        })?;

        if let Some(pos) = self.selection.iter().position(|id| id == skill_id) {
            self.selection.remove(pos);
            Ok(false)
        } else {
            self.selection.push(skill_id.to_string());
            Ok(true)
        }
    }

    /// Resolves the player's turn with the current selection.
    ///
    /// The selection is cleared afterwards. Unless the battle ended, the
    /// enemy's pacing delay starts.
    pub fn confirm<H: EncounterHooks + ?Sized>(&mut self, hooks: &mut H) -> Result<TurnReport> {
        self.expect_phase("confirm a turn", |phase| {
            matches!(phase, BattlePhase::PlayerChoosing)
        })?;

        self.transition(BattlePhase::PlayerResolving);
        let selection = std::mem::take(&mut self.selection);
        let report = TurnEngine::new(&self.config, &mut self.rolls).resolve_turn(
            &mut self.player,
            &mut self.enemy,
            &selection,
        );

        match report.outcome {
            Some(outcome) => self.finish(outcome, hooks),
            None => self.transition(BattlePhase::EnemyWaiting {
                elapsed: Duration::ZERO,
            }),
        }
        Ok(report)
    }

    /// Advances the enemy's pacing timer.
    ///
    /// Once the configured delay has passed, runs the enemy turn and returns
    /// its report. Outside the waiting phase this does nothing.
    pub fn update<H: EncounterHooks + ?Sized>(
        &mut self,
        delta: Duration,
        hooks: &mut H,
    ) -> Result<Option<TurnReport>> {
        let BattlePhase::EnemyWaiting { elapsed } = self.phase else {
            return Ok(None);
        };

        let elapsed = elapsed.saturating_add(delta);
        if elapsed < self.config.enemy_turn_delay() {
            self.phase = BattlePhase::EnemyWaiting { elapsed };
            return Ok(None);
        }

        self.run_enemy_turn(hooks).map(Some)
    }

    /// Runs the enemy turn immediately, skipping the pacing delay.
    ///
    /// The enemy uses every skill that is off cooldown, in loadout order.
    pub fn run_enemy_turn<H: EncounterHooks + ?Sized>(
        &mut self,
        hooks: &mut H,
    ) -> Result<TurnReport> {
        self.expect_phase("run the enemy turn", |phase| {
            matches!(phase, BattlePhase::EnemyWaiting { .. })
        })?;

        self.transition(BattlePhase::EnemyResolving);
        let chosen = self.enemy.skills.ready_ids();
        let report = TurnEngine::new(&self.config, &mut self.rolls).resolve_turn(
            &mut self.enemy,
            &mut self.player,
            &chosen,
        );

        match report.outcome {
            Some(outcome) => self.finish(outcome, hooks),
            None => {
                self.round += 1;
                self.transition(BattlePhase::PlayerChoosing);
            }
        }
        Ok(report)
    }

    /// Abandons the encounter. Only allowed while the player is choosing.
    pub fn forfeit<H: EncounterHooks + ?Sized>(&mut self, hooks: &mut H) -> Result<()> {
        self.expect_phase("forfeit", |phase| {
            matches!(phase, BattlePhase::PlayerChoosing)
        })?;

        self.selection.clear();
        self.transition(BattlePhase::Disengaged);
        tracing::info!(npc = %self.npc_name, round = self.round, "battle abandoned");
        hooks.on_disengage(&self.npc_name);
        Ok(())
    }

    fn finish<H: EncounterHooks + ?Sized>(&mut self, outcome: TerminalOutcome, hooks: &mut H) {
        self.transition(BattlePhase::Finished(outcome));
        tracing::info!(
            npc = %self.npc_name,
            round = self.round,
            %outcome,
            "battle finished"
        );

        match outcome {
            TerminalOutcome::PlayerWins => hooks.on_victory(&self.npc_name, &self.rewards),
            TerminalOutcome::PlayerLoses => hooks.on_defeat(&self.npc_name),
        }
    }

    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: impl FnOnce(&BattlePhase) -> bool,
    ) -> Result<()> {
        if allowed(&self.phase) {
            return Ok(());
        }

        tracing::warn!(operation, phase = %self.phase, "operation rejected");
        if self.phase.is_over() {
            Err(RuntimeError::BattleFinished)
        } else {
            Err(RuntimeError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn transition(&mut self, next: BattlePhase) {
        tracing::debug!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
    }
}
