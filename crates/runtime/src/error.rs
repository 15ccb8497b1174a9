//! Errors surfaced by the battle orchestrator.
//!
//! Turn-level problems (unknown or cooling-down skills) never show up here;
//! the engine records them in the turn report. These errors cover misuse of
//! the orchestrator itself and broken content.
use battle_core::{BattleError, ConfigError, ErrorSeverity};
use thiserror::Error;

use crate::battle::BattlePhase;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: BattlePhase,
    },

    #[error("battle is already over")]
    BattleFinished,

    #[error("battle builder requires {0} before building")]
    MissingContent(&'static str),
}

impl BattleError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(err) => err.severity(),
            Self::InvalidPhase { .. } | Self::BattleFinished => ErrorSeverity::Validation,
            Self::MissingContent(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.error_code(),
            Self::InvalidPhase { .. } => "RUNTIME_INVALID_PHASE",
            Self::BattleFinished => "RUNTIME_BATTLE_FINISHED",
            Self::MissingContent(_) => "RUNTIME_MISSING_CONTENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::TerminalOutcome;

    #[test]
    fn messages_name_the_phase() {
        let err = RuntimeError::InvalidPhase {
            operation: "forfeit",
            phase: BattlePhase::EnemyResolving,
        };
        assert_eq!(err.to_string(), "cannot forfeit while enemy_resolving");

        let err = RuntimeError::InvalidPhase {
            operation: "toggle a skill",
            phase: BattlePhase::Finished(TerminalOutcome::PlayerWins),
        };
        assert_eq!(
            err.to_string(),
            "cannot toggle a skill while finished (player_wins)"
        );
    }

    #[test]
    fn config_errors_pass_through() {
        let err = RuntimeError::from(ConfigError::MissingLevel(9));
        assert_eq!(err.to_string(), ConfigError::MissingLevel(9).to_string());
        assert_eq!(err.error_code(), "CONFIG_MISSING_LEVEL");
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn phase_misuse_is_recoverable() {
        assert!(RuntimeError::BattleFinished.severity().is_recoverable());
        assert!(
            !RuntimeError::MissingContent("a player profile")
                .severity()
                .is_recoverable()
        );
    }
}
