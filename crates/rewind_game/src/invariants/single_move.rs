//! Single move invariant: consecutive snapshots differ by one new mark.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: each snapshot adds exactly one mark to the previous one.
///
/// The new mark lands on a square that was empty and belongs to X on even
/// steps and O on odd steps.
pub struct SingleMoveInvariant;

impl Invariant<GameState> for SingleMoveInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let before = pair[0].board().squares();
                let after = pair[1].board().squares();
                let expected = Square::Occupied(Player::from_turn_flag(step % 2 == 0));

                let mut changed = before.iter().zip(after.iter()).filter(|(b, a)| b != a);
                matches!(
                    (changed.next(), changed.next()),
                    (Some((Square::Empty, placed)), None) if *placed == expected
                )
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player on turn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameController, HistoryEntry, Position};

    #[test]
    fn test_holds_for_played_game() {
        let mut controller = GameController::new();
        for cell in [4, 0, 8, 2, 1] {
            controller.handle_cell_click(cell);
        }
        assert!(SingleMoveInvariant::holds(controller.state()));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut controller = GameController::new();
        controller.handle_cell_click(4);
        let mut state = controller.state().clone();
        let board = state.history.entries[1]
            .board()
            .with(Position::TopLeft, Square::Occupied(Player::O));
        state.history.entries[1] = HistoryEntry::new(board);
        assert!(!SingleMoveInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut controller = GameController::new();
        controller.handle_cell_click(4);
        let mut state = controller.state().clone();
        let board = state.history.entries[0]
            .board()
            .with(Position::Center, Square::Occupied(Player::O));
        state.history.entries[1] = HistoryEntry::new(board);
        assert!(!SingleMoveInvariant::holds(&state));
    }
}
