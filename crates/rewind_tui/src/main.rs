//! Rewind - tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tui::{
    Cli, Command, TuiConfig, init_file_logging, init_stderr_logging, replay, run_tui,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(config.logging())?;
            run_tui(&config)
        }
        Command::Replay { cells, jump, json } => {
            init_stderr_logging(config.logging());
            let output = replay(&cells, jump, json)?;
            print!("{}", output);
            Ok(())
        }
    }
}
