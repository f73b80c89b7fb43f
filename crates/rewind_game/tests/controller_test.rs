//! Tests for the game controller: moves, wins, draws and time travel.

use rewind_game::invariants::{GameInvariants, InvariantSet};
use rewind_game::{
    ClickOutcome, GameController, IgnoreReason, JumpError, Phase, Player, Position, Square, Status,
};

fn play(controller: &mut GameController, cells: &[usize]) {
    for &cell in cells {
        let outcome = controller.handle_cell_click(cell);
        assert!(outcome.is_placed(), "cell {} rejected: {:?}", cell, outcome);
    }
}

#[test]
fn test_column_win_then_click_is_ignored() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 3, 4, 6]);

    assert_eq!(game.status_line(), "Winner: X");
    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(game.phase(), Phase::Won(Player::X));
    assert_eq!(game.history_len(), 6);

    let outcome = game.handle_cell_click(2);
    assert_eq!(
        outcome,
        ClickOutcome::Ignored(IgnoreReason::GameOver(Player::X))
    );
    assert_eq!(game.history_len(), 6);
    assert_eq!(game.step_number(), 5);
}

#[test]
fn test_jump_back_and_branch_discards_future() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 3, 4, 6]);

    game.jump_to(2).expect("step 2 exists");
    assert_eq!(game.step_number(), 2);
    // Two marks on the board, so X is on turn.
    assert!(game.x_is_next());
    assert_eq!(game.status_line(), "Next player: X");
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.history_len(), 6, "jumping keeps future entries");

    let outcome = game.handle_cell_click(2);
    assert_eq!(
        outcome,
        ClickOutcome::Placed {
            step: 3,
            player: Player::X,
            position: Position::TopRight,
        }
    );
    assert_eq!(game.history_len(), 4);
    assert_eq!(game.step_number(), 3);

    let board = game.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
    assert_eq!(board.get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::MiddleLeft), Square::Empty);
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_jump_from_won_board_reopens_play() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 3, 4, 6]);
    game.jump_to(4).unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.status_line(), "Next player: X");

    game.jump_to(5).unwrap();
    assert_eq!(game.phase(), Phase::Won(Player::X));
}

#[test]
fn test_draw_keeps_next_player_status() {
    // X O X / X O O / O X X
    let mut game = GameController::new();
    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(game.handle_cell_click(cell).is_placed());
        assert!(
            game.status_line().starts_with("Next player: "),
            "unexpected status {}",
            game.status_line()
        );
    }

    assert!(game.is_draw());
    assert_eq!(game.history_len(), 10);
    for cell in 0..9 {
        assert!(!game.handle_cell_click(cell).is_placed());
    }
    assert_eq!(game.history_len(), 10);
    assert_eq!(game.step_number(), 9);
}

#[test]
fn test_out_of_range_jump_leaves_state() {
    let mut game = GameController::new();
    play(&mut game, &[4]);

    assert_eq!(
        game.jump_to(7),
        Err(JumpError::OutOfRange {
            requested: 7,
            len: 2
        })
    );
    assert_eq!(game.step_number(), 1);
    assert!(!game.x_is_next());
}

#[test]
fn test_move_list_tracks_branching() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2, 3]);
    assert_eq!(game.move_list().len(), 5);

    game.jump_to(1).unwrap();
    assert_eq!(game.move_list().len(), 5);

    play(&mut game, &[8]);
    let moves = game.move_list();
    assert_eq!(moves.len(), 3);
    assert_eq!(moves[0].label(), "Go to game start");
    assert_eq!(moves[2].label(), "Go to move #2");
    assert_eq!(*moves[2].step(), 2);
}

/// Walks every click sequence up to five moves deep, checking the
/// reachable-state properties at each node.
#[test]
fn test_reachable_states_keep_invariants() {
    fn walk(game: &GameController, depth: usize) {
        let state = game.state();
        assert!(GameInvariants::check_all(state).is_ok());
        assert!(state.history().entries()[0].board().is_blank());
        assert_eq!(state.x_is_next(), state.step_number() % 2 == 0);

        let won = matches!(game.phase(), Phase::Won(_));
        for index in 0..9 {
            let mut next = game.clone();
            let occupied = game.current_board().squares()[index] != Square::Empty;
            let outcome = next.handle_cell_click(index);

            if won || occupied {
                assert!(!outcome.is_placed());
                assert_eq!(next.history_len(), game.history_len());
                assert_eq!(next.step_number(), game.step_number());
            } else {
                assert!(outcome.is_placed());
                assert_eq!(next.step_number(), game.step_number() + 1);
                if depth > 0 {
                    walk(&next, depth - 1);
                }
            }
        }
    }

    walk(&GameController::new(), 5);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut game = GameController::new();
    play(&mut game, &[4]);

    let json = serde_json::to_value(game.snapshot()).expect("serializable");
    assert_eq!(json["status"], "Next player: O");
    assert_eq!(json["step_number"], 1);
    assert_eq!(json["x_is_next"], false);
    assert_eq!(json["moves"][1]["label"], "Go to move #1");
}
