//! Missions and their resolution against a character.
//!
//! A mission succeeds when a percentile draw lands below its success
//! chance. The chance is `50 + level * 5 - difficulty * 10` and is not
//! clamped: values above 100 always succeed, values at or below 0 never do.

use serde::{Deserialize, Serialize};

use crate::character::{Character, ProgressEvent};
use crate::roll::RollSource;

/// Success chance (percent) for a character of `level` against `difficulty`.
pub fn success_chance(level: u32, difficulty: u32) -> i64 {
    50 + i64::from(level) * 5 - i64::from(difficulty) * 10
}

/// Whether a mission attempt succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionOutcome {
    /// The roll came in under the success chance.
    Success,
    /// The roll missed; the mission stays open.
    Failure,
}

impl std::fmt::Display for MissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Mission Successful!"),
            Self::Failure => write!(f, "Mission Failed."),
        }
    }
}

/// A single mission on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    title: String,
    description: String,
    difficulty: u32,
    completed: bool,
}

impl Mission {
    /// Create an open mission.
    pub fn new(title: impl Into<String>, description: impl Into<String>, difficulty: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty,
            completed: false,
        }
    }

    /// Mission title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Mission briefing.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Difficulty rating.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Whether the mission has been completed.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Attempt the mission with `character`, drawing one roll from `rolls`.
    ///
    /// On success the mission is marked complete and the character levels
    /// up and is then promoted. On failure nothing changes.
    pub fn execute(
        &mut self,
        character: &mut Character,
        rolls: &mut dyn RollSource,
    ) -> MissionReport {
        let chance = success_chance(character.level(), self.difficulty);
        let roll = rolls.roll_percentile();

        let (outcome, progress) = if i64::from(roll) < chance {
            self.completed = true;
            let leveled = character.level_up();
            let promoted = character.promote();
            (MissionOutcome::Success, vec![leveled, promoted])
        } else {
            (MissionOutcome::Failure, Vec::new())
        };

        tracing::debug!(
            mission = %self.title,
            chance,
            roll,
            ?outcome,
            "mission resolved"
        );

        MissionReport {
            title: self.title.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty,
            chance,
            roll,
            outcome,
            progress,
        }
    }
}

/// The result of one mission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionReport {
    /// Mission title.
    pub title: String,
    /// Mission briefing.
    pub description: String,
    /// Difficulty rating.
    pub difficulty: u32,
    /// Success chance the roll was compared against.
    pub chance: i64,
    /// The percentile draw (0-99).
    pub roll: u32,
    /// Success or failure.
    pub outcome: MissionOutcome,
    /// Progression notifications, level before rank.
    pub progress: Vec<ProgressEvent>,
}

impl MissionReport {
    /// Whether the attempt succeeded.
    pub fn succeeded(&self) -> bool {
        self.outcome == MissionOutcome::Success
    }
}

impl std::fmt::Display for MissionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "Mission: {}", self.title)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Difficulty: {}", self.difficulty)?;
        writeln!(f, "{}", self.outcome)?;
        for event in &self.progress {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}
