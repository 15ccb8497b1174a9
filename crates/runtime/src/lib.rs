//! Encounter orchestration on top of the battle rules.
//!
//! `battle-core` resolves single turns; this crate sequences them into a
//! full encounter that a game loop can drive one update at a time.
//!
//! Modules are organized by responsibility:
//! - [`battle`] hosts the phase state machine
//! - [`builder`] wires loaded content into a battle
//! - [`hooks`] lets the caller react when an encounter ends
//! - [`rolls`] adapts `rand` generators for effect rolls
pub mod battle;
pub mod builder;
pub mod error;
pub mod hooks;
pub mod rolls;

pub use battle::{Battle, BattlePhase};
pub use builder::BattleBuilder;
pub use error::{Result, RuntimeError};
pub use hooks::{EncounterHooks, Progression};
pub use rolls::RngRolls;
