//! Configuration for a game session.

use std::path::PathBuf;

use ea_core::SeededRolls;

/// Script fired once at startup unless overridden.
pub const DEFAULT_SCRIPT_PATH: &str = "scripts/npc_behavior.py";

/// Physics step per loop iteration (60 FPS).
pub const DEFAULT_DELTA_TIME: f32 = 0.016;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible mission rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Path handed to the script runner during initialization.
    pub script_path: PathBuf,
    /// Seconds passed to the physics engine on every simulate call.
    pub delta_time: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            delta_time: DEFAULT_DELTA_TIME,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the startup script path.
    pub fn with_script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = path.into();
        self
    }

    /// Set the physics delta. Negative or non-finite values fall back to the default.
    pub fn with_delta_time(mut self, seconds: f32) -> Self {
        self.delta_time = if seconds.is_finite() && seconds >= 0.0 {
            seconds
        } else {
            DEFAULT_DELTA_TIME
        };
        self
    }

    /// Build the roll source described by this config.
    pub fn roll_source(&self) -> SeededRolls {
        match self.seed {
            Some(seed) => SeededRolls::from_seed_u64(seed),
            None => SeededRolls::from_entropy(),
        }
    }
}
