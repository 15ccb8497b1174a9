//! Terminal battle outcome.

use crate::state::BattleEntity;

/// How a battle ended, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminalOutcome {
    PlayerWins,
    PlayerLoses,
}

impl TerminalOutcome {
    /// Checks whether the battle is over.
    ///
    /// The player is checked first, so if both sides are down at once the
    /// player loses.
    pub fn evaluate(player: &BattleEntity, enemy: &BattleEntity) -> Option<Self> {
        if player.is_defeated() {
            Some(Self::PlayerLoses)
        } else if enemy.is_defeated() {
            Some(Self::PlayerWins)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::catalog::SkillTemplate;
    use crate::state::Side;

    fn entity(side: Side, health: i32) -> BattleEntity {
        let no_skills: Vec<Arc<SkillTemplate>> = Vec::new();
        let mut entity = BattleEntity::new(side, "x", 10, no_skills).unwrap();
        entity.current_health = health;
        entity
    }

    #[test]
    fn player_is_checked_before_enemy() {
        let player = entity(Side::Player, 0);
        let enemy = entity(Side::Enemy, 0);
        assert_eq!(
            TerminalOutcome::evaluate(&player, &enemy),
            Some(TerminalOutcome::PlayerLoses)
        );
    }

    #[test]
    fn battle_continues_while_both_stand() {
        let player = entity(Side::Player, 1);
        let enemy = entity(Side::Enemy, 1);
        assert_eq!(TerminalOutcome::evaluate(&player, &enemy), None);

        let enemy = entity(Side::Enemy, 0);
        assert_eq!(
            TerminalOutcome::evaluate(&player, &enemy),
            Some(TerminalOutcome::PlayerWins)
        );
    }
}
