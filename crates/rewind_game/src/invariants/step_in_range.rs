//! Step pointer invariant.

use super::Invariant;
use crate::GameState;

/// Invariant: history is non-empty and the step points inside it.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        !state.history().is_empty() && state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Step number points inside a non-empty history"
    }
}
