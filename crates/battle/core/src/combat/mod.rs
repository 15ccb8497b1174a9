//! Combat resolution primitives.
//!
//! Pure helpers shared by the turn engine:
//!
//! - `skill_damage`: outgoing damage after buffs and weakness
//! - `apply_damage`: shield-first damage application, clamped at zero
//! - `TerminalOutcome::evaluate`: win/loss check, player first

pub mod damage;
pub mod outcome;

pub use damage::{DamageDealt, apply_damage, percent_of, round_stat, skill_damage};
pub use outcome::TerminalOutcome;
