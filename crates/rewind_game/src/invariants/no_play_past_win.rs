//! No play past a win: a won board is always the tip of history.

use super::Invariant;
use crate::GameState;
use crate::rules::detect_winner;

/// Invariant: no entry follows a board with a winning line.
pub struct NoPlayPastWinInvariant;

impl Invariant<GameState> for NoPlayPastWinInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();
        entries
            .iter()
            .position(|entry| detect_winner(entry.board()).is_some())
            .is_none_or(|won_at| won_at == entries.len() - 1)
    }

    fn description() -> &'static str {
        "No history entry follows a won board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameController, HistoryEntry, Player, Position, Square};

    fn x_wins_left_column() -> GameController {
        let mut controller = GameController::new();
        for cell in [0, 1, 3, 4, 6] {
            controller.handle_cell_click(cell);
        }
        controller
    }

    #[test]
    fn test_holds_when_win_is_tip() {
        let controller = x_wins_left_column();
        assert!(NoPlayPastWinInvariant::holds(controller.state()));
    }

    #[test]
    fn test_entry_after_win_violates() {
        let controller = x_wins_left_column();
        let mut state = controller.state().clone();
        let board = controller
            .current_board()
            .with(Position::TopRight, Square::Occupied(Player::O));
        state.history.entries.push(HistoryEntry::new(board));
        assert!(!NoPlayPastWinInvariant::holds(&state));
    }
}
