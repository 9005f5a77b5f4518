//! The game world: character creation, mission loading, and the menu loop.
//!
//! `GameWorld` moves through [`GamePhase`]s in a fixed order. Input and
//! output are generic so the loop can be driven from stdin/stdout or from
//! in-memory buffers.

use std::io::{BufRead, Write};

use ea_core::{Character, MissionBoard, MissionReport, RollSource};

use crate::collab::Collaborators;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};

/// Sound played when a mission starts.
pub const MISSION_START_SOUND: &str = "mission_start.wav";

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Nothing has happened yet.
    Uninitialized,
    /// The player character exists.
    CharacterCreated,
    /// The mission board is loaded.
    MissionsLoaded,
    /// The menu loop is running.
    Playing,
    /// The player left the game.
    Exited,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::CharacterCreated => write!(f, "character created"),
            Self::MissionsLoaded => write!(f, "missions loaded"),
            Self::Playing => write!(f, "playing"),
            Self::Exited => write!(f, "exited"),
        }
    }
}

/// A main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: attempt the next open mission.
    UndertakeMission,
    /// 2: show name, rank, and level.
    ViewCharacter,
    /// 3: leave the game.
    Exit,
}

impl MenuChoice {
    /// Parse a menu line. Anything but 1, 2, or 3 is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Self::UndertakeMission),
            2 => Some(Self::ViewCharacter),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop should keep going after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Show the menu again.
    Continue,
    /// Stop the loop.
    Exit,
}

/// An interactive game session.
pub struct GameWorld {
    config: GameConfig,
    phase: GamePhase,
    character: Option<Character>,
    missions: MissionBoard,
    collaborators: Collaborators,
    rolls: Box<dyn RollSource>,
    turns: u64,
}

impl std::fmt::Debug for GameWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameWorld")
            .field("phase", &self.phase)
            .field("character", &self.character)
            .field("missions", &self.missions.len())
            .field("turns", &self.turns)
            .finish()
    }
}

impl GameWorld {
    /// Create a session. Mission rolls come from the config's seed.
    pub fn new(config: GameConfig, collaborators: Collaborators) -> Self {
        let rolls = Box::new(config.roll_source());
        Self {
            config,
            phase: GamePhase::Uninitialized,
            character: None,
            missions: MissionBoard::default(),
            collaborators,
            rolls,
            turns: 0,
        }
    }

    /// Replace the roll source.
    pub fn with_rolls(mut self, rolls: impl RollSource + 'static) -> Self {
        self.rolls = Box::new(rolls);
        self
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The player character, once created.
    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    /// The mission board.
    pub fn missions(&self) -> &MissionBoard {
        &self.missions
    }

    /// Number of completed menu turns (exit excluded).
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Create the character, load missions, and start the collaborators.
    pub fn initialize_game<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> GameResult<()> {
        self.create_character(input, output)?;
        self.load_missions()?;

        self.collaborators.physics.initialize();
        self.collaborators.audio.initialize();
        self.collaborators
            .scripting
            .execute_script(&self.config.script_path);

        tracing::debug!(phase = %self.phase, "game initialized");
        Ok(())
    }

    /// Prompt for name, species, and backstory.
    pub fn create_character<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> GameResult<()> {
        self.expect_phase(GamePhase::Uninitialized)?;

        let name = require_line(input, output, "Enter character name: ")?;
        let species = require_line(input, output, "Choose species (Human/Twi'lek): ")?;
        let backstory = require_line(input, output, "Provide backstory: ")?;

        writeln!(output, "Character Created: {name}, {species}")?;
        self.character = Some(Character::new(name, species, backstory));
        self.phase = GamePhase::CharacterCreated;
        Ok(())
    }

    /// Load the fixed Imperial campaign.
    pub fn load_missions(&mut self) -> GameResult<()> {
        self.expect_phase(GamePhase::CharacterCreated)?;
        self.missions = MissionBoard::imperial_campaign();
        self.phase = GamePhase::MissionsLoaded;
        tracing::debug!(count = self.missions.len(), "missions loaded");
        Ok(())
    }

    /// Run the menu loop until the player exits or input ends.
    pub fn play_game<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> GameResult<()> {
        self.expect_phase(GamePhase::MissionsLoaded)?;
        self.phase = GamePhase::Playing;

        loop {
            self.write_menu(output)?;
            let Some(line) = read_line(input)? else {
                tracing::debug!("input closed, leaving game");
                self.phase = GamePhase::Exited;
                break;
            };

            if self.take_turn(&line, output)? == TurnOutcome::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Handle one menu line, then run the per-iteration physics and audio
    /// update unless the player exited.
    pub fn take_turn<W: Write>(&mut self, line: &str, output: &mut W) -> GameResult<TurnOutcome> {
        self.expect_phase(GamePhase::Playing)?;

        match MenuChoice::parse(line) {
            Some(MenuChoice::UndertakeMission) => {
                if let Some(report) = self.undertake_mission()? {
                    write!(output, "{report}")?;
                }
            }
            Some(MenuChoice::ViewCharacter) => self.write_character(output)?,
            Some(MenuChoice::Exit) => {
                writeln!(output, "Exiting game...")?;
                self.phase = GamePhase::Exited;
                return Ok(TurnOutcome::Exit);
            }
            None => {
                tracing::debug!(input = line.trim(), "unrecognized menu choice");
                writeln!(output, "Invalid choice. Try again.")?;
            }
        }

        self.collaborators.physics.simulate(self.config.delta_time);
        self.collaborators.audio.update();
        self.turns += 1;
        Ok(TurnOutcome::Continue)
    }

    /// Attempt the first open mission. Returns `None` when every mission is
    /// already complete.
    pub fn undertake_mission(&mut self) -> GameResult<Option<MissionReport>> {
        self.expect_phase(GamePhase::Playing)?;

        // A character always exists once play has started.
        let (Some(character), Some(mission)) =
            (self.character.as_mut(), self.missions.next_open_mut())
        else {
            tracing::debug!("no open missions remain");
            return Ok(None);
        };

        self.collaborators.audio.play_sound(MISSION_START_SOUND);
        self.collaborators.physics.simulate(self.config.delta_time);
        Ok(Some(mission.execute(character, self.rolls.as_mut())))
    }

    fn write_menu<W: Write>(&self, output: &mut W) -> GameResult<()> {
        let (rank, level) = self
            .character
            .as_ref()
            .map(|c| (c.rank(), c.level()))
            .unwrap_or((1, 1));
        writeln!(output)?;
        writeln!(output, "Current Rank: {rank} | Level: {level}")?;
        writeln!(output, "1. Undertake a Mission")?;
        writeln!(output, "2. View Character Info")?;
        writeln!(output, "3. Exit Game")?;
        write!(output, "> ")?;
        output.flush()?;
        Ok(())
    }

    fn write_character<W: Write>(&self, output: &mut W) -> GameResult<()> {
        if let Some(c) = &self.character {
            writeln!(output, "Name: {}", c.name())?;
            writeln!(output, "Rank: {}", c.rank())?;
            writeln!(output, "Level: {}", c.level())?;
        }
        Ok(())
    }

    fn expect_phase(&self, expected: GamePhase) -> GameResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }
}

/// Read one line without its line ending. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> GameResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Print a prompt and read the answer, failing if input has ended.
fn require_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> GameResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    read_line(input)?.ok_or_else(|| GameError::InputClosed {
        prompt: prompt.trim_end().to_string(),
    })
}
