//! Turn parity invariant: X moves on even steps.

use super::Invariant;
use crate::GameState;

/// Invariant: `x_is_next` equals "step number is even".
///
/// The flag is redundant with the step number; this keeps the two in sync.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        state.x_is_next() == (state.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "X moves next exactly when the step number is even"
    }
}
