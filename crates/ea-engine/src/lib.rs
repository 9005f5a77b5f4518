//! Game loop and engine collaborators for Empire's Ascent.
//!
//! [`GameWorld`] runs character creation and the mission menu loop. Physics,
//! audio, and scripting sit behind traits in [`collab`] and are invoked for
//! side effects only.

pub mod collab;
pub mod config;
pub mod error;
pub mod world;

pub use collab::{
    AudioManager, Collaborators, ConsoleAudio, ConsolePhysics, NoopScriptRunner, PhysicsEngine,
    ProcessScriptRunner, ScriptOutcome, ScriptRunner,
};
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use world::{GamePhase, GameWorld, MenuChoice, TurnOutcome};
