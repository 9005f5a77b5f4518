//! Audio collaborator.

/// An audio backend.
pub trait AudioManager: std::fmt::Debug {
    /// Prepare the backend. Called once during game initialization.
    fn initialize(&mut self);

    /// Start playing the named sound.
    fn play_sound(&mut self, name: &str);

    /// Per-iteration housekeeping.
    fn update(&mut self);
}

/// Stand-in audio that only logs what it would do.
#[derive(Debug, Default)]
pub struct ConsoleAudio;

impl AudioManager for ConsoleAudio {
    fn initialize(&mut self) {
        tracing::info!("Audio Engine Initialized.");
    }

    fn play_sound(&mut self, name: &str) {
        tracing::info!("Playing sound: {name}");
    }

    fn update(&mut self) {
        tracing::info!("Updating audio...");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_audio_smoke() {
        let mut audio = ConsoleAudio;
        audio.initialize();
        audio.play_sound("mission_start.wav");
        audio.update();
    }
}
