//! Console frontend for Empire's Ascent.

mod play;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ea_engine::collab::script::DEFAULT_INTERPRETER;
use ea_engine::config::{DEFAULT_DELTA_TIME, DEFAULT_SCRIPT_PATH};

#[derive(Parser)]
#[command(
    name = "empires-ascent",
    about = "Empire's Ascent: rise through the ranks one mission at a time",
    version
)]
struct Cli {
    /// RNG seed for reproducible mission rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Script run once at startup
    #[arg(long, default_value = DEFAULT_SCRIPT_PATH)]
    script: PathBuf,

    /// Program used to run the startup script
    #[arg(long, default_value = DEFAULT_INTERPRETER)]
    interpreter: PathBuf,

    /// Do not run the startup script
    #[arg(long)]
    no_script: bool,

    /// Seconds of physics simulated per loop iteration
    #[arg(long, default_value_t = DEFAULT_DELTA_TIME)]
    delta_time: f32,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let options = play::Options {
        seed: cli.seed,
        script: cli.script,
        interpreter: cli.interpreter,
        run_script: !cli.no_script,
        delta_time: cli.delta_time,
    };

    if let Err(e) = play::run(options) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

/// Log to stderr so stdout carries only the game itself.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}
