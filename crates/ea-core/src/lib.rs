//! Core game types for Empire's Ascent.
//!
//! Provides the player [`Character`], [`Mission`] resolution with its
//! success-chance formula, the fixed [`MissionBoard`], and injectable
//! percentile [`RollSource`]s.

pub mod campaign;
pub mod character;
pub mod mission;
pub mod roll;

pub use campaign::MissionBoard;
pub use character::{Character, ProgressEvent};
pub use mission::{Mission, MissionOutcome, MissionReport, success_chance};
pub use roll::{RollSource, ScriptedRolls, SeededRolls};
