//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent};
use rewind_game::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at a position.
    Place(Position),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Jump one step back.
    StepBack,
    /// Jump one step forward.
    StepForward,
    /// Jump to the empty board.
    JumpStart,
    /// Jump to the newest entry.
    JumpLatest,
    /// Leave the app.
    Quit,
    /// Key has no binding.
    Ignore,
}

/// Maps a key event to an [`Action`].
pub fn action_for(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::Ignore, Action::Place),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Action::MoveCursor(code)
        }
        KeyCode::Char(',') | KeyCode::Char('<') => Action::StepBack,
        KeyCode::Char('.') | KeyCode::Char('>') => Action::StepForward,
        KeyCode::Home => Action::JumpStart,
        KeyCode::End => Action::JumpLatest,
        _ => Action::Ignore,
    }
}

/// Moves cursor based on arrow keys. Edges do not wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
