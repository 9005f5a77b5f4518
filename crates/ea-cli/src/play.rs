use std::io;
use std::path::PathBuf;

use colored::Colorize;

use ea_engine::{Collaborators, GameConfig, GameWorld, NoopScriptRunner, ProcessScriptRunner};

/// Settings gathered from the command line.
pub struct Options {
    pub seed: Option<u64>,
    pub script: PathBuf,
    pub interpreter: PathBuf,
    pub run_script: bool,
    pub delta_time: f32,
}

pub fn run(options: Options) -> Result<(), String> {
    let mut config = GameConfig::default()
        .with_script_path(options.script)
        .with_delta_time(options.delta_time);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }

    let collaborators = if options.run_script {
        Collaborators::console(ProcessScriptRunner::new(options.interpreter))
    } else {
        Collaborators::console(NoopScriptRunner)
    };

    let mut game = GameWorld::new(config, collaborators);

    println!("  {} Empire's Ascent", "Starting".bold());
    if let Some(seed) = options.seed {
        println!("  {}", format!("Seed: {seed}").dimmed());
    }
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    game.initialize_game(&mut input, &mut output)
        .map_err(|e| format!("failed to start game: {e}"))?;
    game.play_game(&mut input, &mut output)
        .map_err(|e| format!("game aborted: {e}"))?;

    Ok(())
}
