//! Physics collaborator.

/// A physics backend driven once per loop iteration.
pub trait PhysicsEngine: std::fmt::Debug {
    /// Prepare the backend. Called once during game initialization.
    fn initialize(&mut self);

    /// Advance the simulation by `delta_seconds`.
    fn simulate(&mut self, delta_seconds: f32);
}

/// Stand-in physics that only logs what it would do.
#[derive(Debug, Default)]
pub struct ConsolePhysics;

impl PhysicsEngine for ConsolePhysics {
    fn initialize(&mut self) {
        tracing::info!("Physics Engine Initialized.");
    }

    fn simulate(&mut self, delta_seconds: f32) {
        tracing::info!("Simulating physics for {delta_seconds} seconds...");
    }
}
