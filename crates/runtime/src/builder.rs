//! Wires loaded content into a ready-to-run [`Battle`].

use anyhow::Context;
use battle_content::{ContentFactory, LoadResult};
use battle_core::{
    BattleConfig, BattleEntity, EffectCatalog, NpcCombatProfile, PcgRolls, PlayerProfile,
    RollSource, SkillCatalog,
};

use crate::battle::Battle;
use crate::error::{Result, RuntimeError};
use crate::rolls::RngRolls;

/// Builder for [`Battle`].
///
/// Effects, player skills, the player profile and the NPC profile are
/// required. Without an explicit roll source or seed, rolls are seeded from
/// OS entropy.
#[derive(Default)]
pub struct BattleBuilder {
    config: BattleConfig,
    effects: Option<EffectCatalog>,
    player_skills: Option<SkillCatalog>,
    player: Option<PlayerProfile>,
    npc: Option<NpcCombatProfile>,
    seed: Option<u64>,
    rolls: Option<Box<dyn RollSource + Send>>,
}

impl BattleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads everything an encounter with `npc_name` needs from `factory`.
    pub fn from_content(factory: &ContentFactory, npc_name: &str) -> LoadResult<Self> {
        let config = factory.load_config()?;
        let effects = factory.load_effects()?;
        let player_skills = factory.load_player_skills(&effects)?;
        let player = factory.load_player_profile()?;
        let npc = factory
            .load_npc(npc_name)
            .with_context(|| format!("Failed to load encounter with '{}'", npc_name))?;

        Ok(Self::new()
            .config(config)
            .effects(effects)
            .player_skills(player_skills)
            .player(player)
            .npc(npc))
    }

    /// Override the battle configuration (default: [`BattleConfig::default`]).
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn effects(mut self, effects: EffectCatalog) -> Self {
        self.effects = Some(effects);
        self
    }

    pub fn player_skills(mut self, skills: SkillCatalog) -> Self {
        self.player_skills = Some(skills);
        self
    }

    pub fn player(mut self, profile: PlayerProfile) -> Self {
        self.player = Some(profile);
        self
    }

    pub fn npc(mut self, profile: NpcCombatProfile) -> Self {
        self.npc = Some(profile);
        self
    }

    /// Seed deterministic [`PcgRolls`].
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom roll source. Takes precedence over [`seed`](Self::seed).
    pub fn rolls(mut self, rolls: impl RollSource + Send + 'static) -> Self {
        self.rolls = Some(Box::new(rolls));
        self
    }

    pub fn build(self) -> Result<Battle> {
        let effects = self.effects.ok_or(RuntimeError::MissingContent("an effect catalog"))?;
        let player_skills = self
            .player_skills
            .ok_or(RuntimeError::MissingContent("a player skill catalog"))?;
        let player_profile = self
            .player
            .ok_or(RuntimeError::MissingContent("a player profile"))?;
        let npc = self
            .npc
            .ok_or(RuntimeError::MissingContent("an npc profile"))?;

        let player = BattleEntity::player(&player_profile, &player_skills, &self.config)?;
        let enemy = BattleEntity::npc(&npc, &effects)?;

        let rolls: Box<dyn RollSource + Send> = match (self.rolls, self.seed) {
            (Some(rolls), _) => rolls,
            (None, Some(seed)) => Box::new(PcgRolls::new(seed)),
            (None, None) => Box::new(RngRolls::from_entropy()),
        };

        Ok(Battle::new(
            npc.name.clone(),
            player,
            enemy,
            self.config,
            npc.rewards.clone(),
            rolls,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_content_is_reported() {
        let err = BattleBuilder::new().build().err();
        assert_eq!(err, Some(RuntimeError::MissingContent("an effect catalog")));
    }

    #[test]
    fn bundled_content_builds_every_encounter() {
        let factory = ContentFactory::bundled();
        for name in factory.npc_names().unwrap() {
            let battle = BattleBuilder::from_content(&factory, &name)
                .unwrap()
                .seed(1)
                .build()
                .unwrap();
            assert_eq!(battle.npc_name(), name);
            assert!(!battle.rewards().is_empty());
        }
    }

    #[test]
    fn unknown_npc_names_the_encounter() {
        let factory = ContentFactory::bundled();
        let err = BattleBuilder::from_content(&factory, "dragon").err().unwrap();
        assert!(format!("{err:#}").contains("encounter with 'dragon'"));
    }
}
