//! Empty origin invariant: history starts from a blank board.

use super::Invariant;
use crate::GameState;

/// Invariant: `history[0]` is the empty board.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .get(0)
            .map(|entry| entry.board().is_blank())
            .unwrap_or(false)
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameController, HistoryEntry, Player, Position, Square};

    #[test]
    fn test_holds_after_branching_from_start() {
        let mut controller = GameController::new();
        controller.handle_cell_click(0);
        controller.jump_to(0).unwrap();
        controller.handle_cell_click(8);
        assert!(EmptyOriginInvariant::holds(controller.state()));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut state = GameState::new();
        state.history.entries[0] =
            HistoryEntry::new(Board::new().with(Position::TopLeft, Square::Occupied(Player::O)));
        assert!(!EmptyOriginInvariant::holds(&state));
    }
}
