//! The player character and its progression counters.
//!
//! Rank and level both start at 1 and only ever move up, one step per
//! successful mission.

use serde::{Deserialize, Serialize};

/// A notification produced when a character progresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressEvent {
    /// The character gained a level.
    LeveledUp {
        /// Character name.
        name: String,
        /// The new level.
        level: u32,
    },
    /// The character was promoted in rank.
    Promoted {
        /// Character name.
        name: String,
        /// The new rank.
        rank: u32,
    },
}

impl std::fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeveledUp { name, level } => write!(f, "{name} leveled up to Level {level}!"),
            Self::Promoted { name, rank } => {
                write!(f, "{name} has been promoted to Rank {rank}!")
            }
        }
    }
}

/// The player's character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    species: String,
    backstory: String,
    rank: u32,
    level: u32,
}

impl Character {
    /// Create a new character at rank 1, level 1.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            backstory: backstory.into(),
            rank: 1,
            level: 1,
        }
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Species chosen at creation.
    pub fn species(&self) -> &str {
        &self.species
    }

    /// Backstory given at creation.
    pub fn backstory(&self) -> &str {
        &self.backstory
    }

    /// Current rank.
    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Raise rank by one.
    pub fn promote(&mut self) -> ProgressEvent {
        self.rank += 1;
        tracing::debug!(name = %self.name, rank = self.rank, "character promoted");
        ProgressEvent::Promoted {
            name: self.name.clone(),
            rank: self.rank,
        }
    }

    /// Raise level by one.
    pub fn level_up(&mut self) -> ProgressEvent {
        self.level += 1;
        tracing::debug!(name = %self.name, level = self.level, "character leveled up");
        ProgressEvent::LeveledUp {
            name: self.name.clone(),
            level: self.level,
        }
    }
}
