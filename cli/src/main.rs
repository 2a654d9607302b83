mod config;
mod input;
mod session;
mod ui;

use clap::Parser;
use common::config::{load_yaml_file, Validate};
use common::games::SessionRng;
use common::log;
use config::CliConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Console Tic-Tac-Toe against a tiered computer opponent")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = "tictactoe.yaml")]
    config: PathBuf,

    /// Starting difficulty level (1-3), overriding the config file.
    #[arg(long)]
    level: Option<u8>,

    /// Seed for the bot's randomness, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Log bot decisions and round results to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        common::logger::init_logger(Some("tictactoe".to_string()));
    }

    let mut config: CliConfig = load_yaml_file(&args.config)?;
    if let Some(level) = args.level {
        config.start_level = level;
        config.validate()?;
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("session seed: {}", rng.seed());

    session::run_session(&config, &mut rng)?;
    Ok(())
}
