//! Error types for the game engine.

use thiserror::Error;

use crate::world::GamePhase;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a value was still required.
    #[error("input closed while waiting for: {prompt}")]
    InputClosed {
        /// The prompt that went unanswered.
        prompt: String,
    },

    /// An operation was called in the wrong phase of the game.
    #[error("expected game phase {expected}, but game is {actual}")]
    InvalidPhase {
        /// Phase the operation requires.
        expected: GamePhase,
        /// Phase the game is actually in.
        actual: GamePhase,
    },
}
