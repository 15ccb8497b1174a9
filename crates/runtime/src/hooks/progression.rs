//! Progression ledger kept across encounters.

use std::collections::{BTreeMap, BTreeSet};

use battle_core::RewardTable;

use super::EncounterHooks;

/// Tracks what outlives a single battle: beaten NPCs, collected items and
/// how often the player lost or fled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progression {
    defeated_npcs: BTreeSet<String>,
    items: BTreeMap<String, u64>,
    defeats: u32,
    disengages: u32,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `npc_name` has been beaten at least once.
    ///
    /// World code uses this to keep defeated NPCs out of the map.
    pub fn has_defeated(&self, npc_name: &str) -> bool {
        self.defeated_npcs.contains(npc_name)
    }

    pub fn defeated_npcs(&self) -> impl Iterator<Item = &str> {
        self.defeated_npcs.iter().map(String::as_str)
    }

    /// Total quantity of `item_id` collected from rewards.
    pub fn quantity(&self, item_id: &str) -> u64 {
        self.items.get(item_id).copied().unwrap_or(0)
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    pub fn defeats(&self) -> u32 {
        self.defeats
    }

    pub fn disengages(&self) -> u32 {
        self.disengages
    }
}

impl EncounterHooks for Progression {
    fn on_victory(&mut self, npc_name: &str, rewards: &RewardTable) {
        self.defeated_npcs.insert(npc_name.to_string());
        for reward in rewards.iter() {
            *self.items.entry(reward.item_id.clone()).or_default() += u64::from(reward.quantity);
        }
        tracing::info!(npc = npc_name, "encounter won");
    }

    fn on_defeat(&mut self, npc_name: &str) {
        self.defeats += 1;
        tracing::info!(npc = npc_name, defeats = self.defeats, "encounter lost");
    }

    fn on_disengage(&mut self, npc_name: &str) {
        self.disengages += 1;
        tracing::info!(npc = npc_name, "player disengaged");
    }
}
