//! Game controller: history, step pointer and turn flag.
//!
//! [`GameState`] is a plain value. Every accepted click or jump builds a new
//! state from the old one and the controller swaps it in whole, so a
//! transition either fully happens or leaves the game untouched.

use super::history::{History, HistoryEntry};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{detect_winner, is_draw};
use super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Outcomes and errors
// ─────────────────────────────────────────────────────────────

/// Why a click was ignored.
///
/// Ignored clicks are not errors; the game simply does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The board at the current step already has a winner.
    #[display("Game already won by {_0}")]
    GameOver(Player),
    /// The clicked square is taken.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The clicked index is not on the board.
    #[display("Index {_0} is off the board")]
    OutOfBounds(usize),
}

/// Result of a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A mark was placed and recorded as a new history entry.
    Placed {
        /// Step number of the new entry.
        step: usize,
        /// Player whose mark was placed.
        player: Player,
        /// Where it was placed.
        position: Position,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl ClickOutcome {
    /// Returns true if the click changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, ClickOutcome::Placed { .. })
    }
}

/// Error returned by [`GameController::jump_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The requested step is past the end of history.
    #[display("Step {requested} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Requested step.
        requested: usize,
        /// Number of entries in history.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

// ─────────────────────────────────────────────────────────────
//  Derived views
// ─────────────────────────────────────────────────────────────

/// Game phase at the current step, derived from the board on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are still accepted.
    Playing,
    /// Someone completed a line; forward play from this step is closed.
    Won(Player),
}

/// Status line shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The current board has a winning line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// No winner yet.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveListEntry {
    /// History index this row jumps to.
    step: usize,
    /// Button text.
    label: String,
}

impl MoveListEntry {
    /// Builds the row for a history index.
    pub fn new(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self { step, label }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game state
// ─────────────────────────────────────────────────────────────

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) step_number: usize,
    pub(crate) x_is_next: bool,
}

impl GameState {
    /// Creates the start-of-game state.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            x_is_next: true,
        }
    }

    /// Recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// The snapshot at the current step.
    pub fn current(&self) -> &HistoryEntry {
        &self.history.entries()[self.step_number]
    }

    /// Player whose turn it is at the current step.
    pub fn to_move(&self) -> Player {
        Player::from_turn_flag(self.x_is_next)
    }

    /// Builds the state that follows a click at `pos`.
    ///
    /// Clicks on a won board or an occupied square are refused.
    #[instrument(skip(self), fields(step = self.step_number, to_move = %self.to_move()))]
    pub fn with_move(&self, pos: Position) -> Result<GameState, IgnoreReason> {
        let board = self.current().board();

        if let Some(winner) = detect_winner(board) {
            return Err(IgnoreReason::GameOver(winner));
        }
        if !board.is_empty(pos) {
            return Err(IgnoreReason::SquareOccupied(pos));
        }

        let next_board = board.with(pos, Square::Occupied(self.to_move()));
        let history = self.history.branch_from(self.step_number, next_board);
        let step_number = history.last_step();

        Ok(GameState {
            history,
            step_number,
            x_is_next: !self.x_is_next,
        })
    }

    /// Builds the state positioned at `step`, history unchanged.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jumped(&self, step: usize) -> Result<GameState, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                requested: step,
                len: self.history.len(),
            });
        }

        Ok(GameState {
            history: self.history.clone(),
            step_number: step,
            x_is_next: step % 2 == 0,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable picture of the game for headless output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Status line text.
    status: String,
    /// Current step.
    step_number: usize,
    /// Turn flag.
    x_is_next: bool,
    /// Current board.
    board: Board,
    /// Move list rows.
    moves: Vec<MoveListEntry>,
}

// ─────────────────────────────────────────────────────────────
//  Controller
// ─────────────────────────────────────────────────────────────

/// Owns the [`GameState`] and mediates clicks and jumps.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a controller at game start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &Board {
        self.state.current().board()
    }

    /// Index of the displayed snapshot.
    pub fn step_number(&self) -> usize {
        self.state.step_number
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.state.x_is_next
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    /// Handles a click on board index `index` (0-8).
    #[instrument(skip(self))]
    pub fn handle_cell_click(&mut self, index: usize) -> ClickOutcome {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => {
                debug!(index, "Click off the board ignored");
                ClickOutcome::Ignored(IgnoreReason::OutOfBounds(index))
            }
        }
    }

    /// Places the current player's mark at `pos` if the move is legal.
    #[instrument(skip(self), fields(step = self.state.step_number))]
    pub fn place(&mut self, pos: Position) -> ClickOutcome {
        let player = self.state.to_move();
        match self.state.with_move(pos) {
            Ok(next) => {
                assert_invariants(&next);
                self.state = next;
                info!(
                    player = %player,
                    position = %pos,
                    step = self.state.step_number,
                    "Move placed"
                );
                ClickOutcome::Placed {
                    step: self.state.step_number,
                    player,
                    position: pos,
                }
            }
            Err(reason) => {
                debug!(%reason, "Click ignored");
                ClickOutcome::Ignored(reason)
            }
        }
    }

    /// Repositions the view at `step` without altering history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        match self.state.jumped(step) {
            Ok(next) => {
                assert_invariants(&next);
                self.state = next;
                info!(step, "Jumped");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                Err(e)
            }
        }
    }

    /// Phase at the current step.
    pub fn phase(&self) -> Phase {
        match detect_winner(self.current_board()) {
            Some(winner) => Phase::Won(winner),
            None => Phase::Playing,
        }
    }

    /// Status at the current step.
    pub fn status(&self) -> Status {
        match self.phase() {
            Phase::Won(winner) => Status::Winner(winner),
            Phase::Playing => Status::NextPlayer(self.state.to_move()),
        }
    }

    /// Status text, e.g. `"Next player: X"`.
    pub fn status_line(&self) -> String {
        self.status().to_string()
    }

    /// True when the current board is full with no winner.
    pub fn is_draw(&self) -> bool {
        is_draw(self.current_board())
    }

    /// One row per history entry.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        (0..self.state.history.len()).map(MoveListEntry::new).collect()
    }

    /// Serializable view of the current game.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status_line(),
            step_number: self.state.step_number,
            x_is_next: self.state.x_is_next,
            board: *self.current_board(),
            moves: self.move_list(),
        }
    }
}

/// Checks every game invariant; panics in debug builds on violation.
fn assert_invariants(state: &GameState) {
    let result = GameInvariants::check_all(state);
    debug_assert!(result.is_ok(), "Game invariants violated: {:?}", result);
}
