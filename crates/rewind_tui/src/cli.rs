//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply cell clicks (0-8) from a fresh game and print the result
    Replay {
        /// Cell indices to click, in order
        cells: Vec<usize>,

        /// Jump to this step after the clicks
        #[arg(long)]
        jump: Option<usize>,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["rewind"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli =
            Cli::try_parse_from(["rewind", "replay", "0", "1", "3", "--jump", "2", "--json"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                cells: vec![0, 1, 3],
                jump: Some(2),
                json: true,
            })
        );
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["rewind", "play", "--config", "other.toml"]).unwrap();
        assert_eq!(cli.command, Some(Command::Play));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }
}
