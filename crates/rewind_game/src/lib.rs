//! Pure tic-tac-toe logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`] and named [`Position`]s
//! - **Rules**: win and draw detection as pure functions over a board
//! - **History**: snapshots of every board, branching by truncation
//! - **Controller**: [`GameController`] owns the history, the step pointer
//!   and the turn flag, and turns clicks and jumps into new states
//! - **Invariants**: properties checked after every transition
//!
//! # Example
//!
//! ```
//! use rewind_game::GameController;
//!
//! let mut game = GameController::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.handle_cell_click(cell);
//! }
//! assert_eq!(game.status_line(), "Winner: X");
//!
//! game.jump_to(3).unwrap();
//! assert_eq!(game.status_line(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use controller::{
    ClickOutcome, GameController, GameState, IgnoreReason, JumpError, MoveListEntry, Phase,
    Snapshot, Status,
};
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::detect_winner;
pub use types::{Board, Player, Square};
