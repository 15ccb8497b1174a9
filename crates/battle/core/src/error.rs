//! Common error infrastructure for battle-core.
//!
//! Turn resolution itself never fails once entities are built: unknown or
//! cooling-down skill selections are skipped and reported, not raised. The
//! only errors surfaced here come from resolving static content into
//! catalogs and entities, and they must be handled before a battle starts.

use crate::catalog::EffectKind;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: operation attempted in the wrong battle phase
    Validation,

    /// Content is inconsistent; the battle cannot be constructed.
    ///
    /// Examples: skill references an effect missing from the catalog
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller can continue after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Common trait for all battle errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Content resolution failures.
///
/// Raised while building catalogs or entities from static definitions.
/// Always fatal to battle construction.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("skill '{skill}' references effect '{effect}' which is not in the effect catalog")]
    UnknownEffect { skill: String, effect: EffectKind },

    #[error("{owner} references skill '{skill}' which is not in the skill catalog")]
    UnknownSkill { owner: String, skill: String },

    #[error("skill '{0}' is defined more than once")]
    DuplicateSkill(String),

    #[error("effect '{0}' is defined more than once")]
    DuplicateEffect(EffectKind),

    #[error("skill '{skill}' has an effect chance of {chance}, expected a value in [0, 1]")]
    InvalidChance { skill: String, chance: f64 },

    #[error("skill '{skill}' has a negative {field}")]
    NegativeAmount { skill: String, field: &'static str },

    #[error("{owner} has max health {max_health}, expected a positive value")]
    NonPositiveHealth { owner: String, max_health: i32 },

    #[error("no max health configured for player level {0}")]
    MissingLevel(u32),
}

impl BattleError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEffect { .. } => "CONFIG_UNKNOWN_EFFECT",
            Self::UnknownSkill { .. } => "CONFIG_UNKNOWN_SKILL",
            Self::DuplicateSkill(_) => "CONFIG_DUPLICATE_SKILL",
            Self::DuplicateEffect(_) => "CONFIG_DUPLICATE_EFFECT",
            Self::InvalidChance { .. } => "CONFIG_INVALID_CHANCE",
            Self::NegativeAmount { .. } => "CONFIG_NEGATIVE_AMOUNT",
            Self::NonPositiveHealth { .. } => "CONFIG_NON_POSITIVE_HEALTH",
            Self::MissingLevel(_) => "CONFIG_MISSING_LEVEL",
        }
    }
}
