//! Headless replay of a click sequence.

use anyhow::{Context, Result};
use rewind_game::{ClickOutcome, GameController};
use tracing::{info, instrument, warn};

use crate::board_view::render_text;

/// Plays `cells` from a fresh game, optionally jumps, and formats the result.
///
/// Ignored clicks are logged and skipped. An out-of-range jump is an error.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>, json: bool) -> Result<String> {
    let mut controller = GameController::new();

    for &cell in cells {
        if let ClickOutcome::Ignored(reason) = controller.handle_cell_click(cell) {
            warn!(cell, %reason, "Replay click ignored");
        }
    }

    if let Some(step) = jump {
        controller
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    info!(
        steps = controller.history_len(),
        status = %controller.status(),
        "Replay finished"
    );

    if json {
        return serde_json::to_string_pretty(&controller.snapshot())
            .context("Failed to serialize snapshot");
    }

    let mut out = render_text(controller.current_board());
    out.push_str("\n\n");
    out.push_str(&controller.status_line());
    out.push('\n');
    for entry in controller.move_list() {
        let marker = if *entry.step() == controller.step_number() {
            ">"
        } else {
            " "
        };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    Ok(out)
}
