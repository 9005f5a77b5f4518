//! External collaborators the game drives for side effects only.
//!
//! Nothing the collaborators do feeds back into game state. The console
//! implementations log through `tracing`; tests substitute recorders.

pub mod audio;
pub mod physics;
pub mod script;

pub use audio::{AudioManager, ConsoleAudio};
pub use physics::{ConsolePhysics, PhysicsEngine};
pub use script::{NoopScriptRunner, ProcessScriptRunner, ScriptOutcome, ScriptRunner};

/// The set of collaborators a game session drives.
#[derive(Debug)]
pub struct Collaborators {
    /// Physics backend.
    pub physics: Box<dyn PhysicsEngine>,
    /// Audio backend.
    pub audio: Box<dyn AudioManager>,
    /// Script runner.
    pub scripting: Box<dyn ScriptRunner>,
}

impl Collaborators {
    /// Bundle collaborators.
    pub fn new(
        physics: impl PhysicsEngine + 'static,
        audio: impl AudioManager + 'static,
        scripting: impl ScriptRunner + 'static,
    ) -> Self {
        Self {
            physics: Box::new(physics),
            audio: Box::new(audio),
            scripting: Box::new(scripting),
        }
    }

    /// Console physics and audio with the given script runner.
    pub fn console(scripting: impl ScriptRunner + 'static) -> Self {
        Self::new(ConsolePhysics, ConsoleAudio, scripting)
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::console(ProcessScriptRunner::default())
    }
}
