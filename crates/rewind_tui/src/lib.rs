//! Terminal front end for rewind tic-tac-toe.
//!
//! The game itself lives in [`rewind_game`]; this crate draws it with
//! ratatui and turns key presses and mouse clicks into controller calls.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod board_view;
mod cli;
mod config;
mod game_info;
mod input;
mod logging;
mod replay;
mod terminal;
mod ui;

pub use app::App;
pub use board_view::{BoardView, render_text};
pub use cli::{Cli, Command};
pub use config::{ConfigError, DisplayConfig, LoggingConfig, TuiConfig};
pub use game_info::{MoveListView, render_status};
pub use input::{Action, action_for, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::replay;
pub use terminal::run_tui;
pub use ui::{AppLayout, HELP_TEXT, draw};
