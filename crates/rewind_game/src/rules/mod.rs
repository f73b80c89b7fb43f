//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here stores a
//! result; callers recompute from the board whenever they need an answer.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, detect_winner, winning_line};
