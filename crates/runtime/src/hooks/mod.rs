//! Caller-side consequences of a finished encounter.
//!
//! The battle itself never grants items or removes NPCs. When an encounter
//! ends, the orchestrator calls exactly one hook and leaves the follow-up
//! (rewards, leveling, despawning, respawn) to the implementor.
//!
//! - `on_victory`: the enemy fell; receives its reward table
//! - `on_defeat`: the player fell
//! - `on_disengage`: the player forfeited during skill selection

mod progression;

pub use progression::Progression;

use battle_core::RewardTable;

/// Receives the end of an encounter.
///
/// Every method defaults to doing nothing, so implementors only override the
/// outcomes they care about.
pub trait EncounterHooks {
    /// Called once when the player wins.
    fn on_victory(&mut self, _npc_name: &str, _rewards: &RewardTable) {}

    /// Called once when the player loses.
    fn on_defeat(&mut self, _npc_name: &str) {}

    /// Called once when the player forfeits.
    fn on_disengage(&mut self, _npc_name: &str) {}
}

/// Ignores every outcome.
impl EncounterHooks for () {}
