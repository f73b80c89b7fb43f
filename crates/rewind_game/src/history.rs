//! Linear move history with branching by truncation.

use super::types::Board;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One recorded board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct HistoryEntry {
    /// The board as it stood after this step.
    board: Board,
}

/// Ordered board snapshots. Index 0 is always the empty board.
///
/// The list is never empty. It only grows at the tip; playing from an
/// earlier step discards everything after that step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    pub(crate) entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Number of recorded snapshots (at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns the entry at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns a new history that keeps `0..=step` and appends `board`.
    ///
    /// Entries after `step` are dropped.
    #[instrument(skip(self, board), fields(len = self.entries.len()))]
    pub fn branch_from(&self, step: usize, board: Board) -> Self {
        let keep = (step + 1).min(self.entries.len());
        let discarded = self.entries.len() - keep;
        if discarded > 0 {
            debug!(step, discarded, "Discarding future entries");
        }

        let mut entries = Vec::with_capacity(keep + 1);
        entries.extend_from_slice(&self.entries[..keep]);
        entries.push(HistoryEntry::new(board));
        Self { entries }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    fn mark(board: Board, index: usize, player: Player) -> Board {
        let pos = Position::from_index(index).expect("index in range");
        board.with(pos, Square::Occupied(player))
    }

    #[test]
    fn test_new_history_has_empty_origin() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.last_step(), 0);
        assert!(history.get(0).map(|e| e.board().is_blank()).unwrap_or(false));
    }

    #[test]
    fn test_branch_from_tip_appends() {
        let history = History::new();
        let b1 = mark(Board::new(), 4, Player::X);
        let next = history.branch_from(0, b1);

        assert_eq!(history.len(), 1, "original is untouched");
        assert_eq!(next.len(), 2);
        assert_eq!(next.get(1).map(|e| *e.board()), Some(b1));
    }

    #[test]
    fn test_branch_from_middle_discards_future() {
        let b1 = mark(Board::new(), 0, Player::X);
        let b2 = mark(b1, 1, Player::O);
        let b3 = mark(b2, 2, Player::X);
        let history = History::new()
            .branch_from(0, b1)
            .branch_from(1, b2)
            .branch_from(2, b3);
        assert_eq!(history.len(), 4);

        let alt = mark(b1, 4, Player::O);
        let branched = history.branch_from(1, alt);
        assert_eq!(branched.len(), 3);
        assert_eq!(branched.get(2).map(|e| *e.board()), Some(alt));
        assert_eq!(branched.get(3), None);
    }
}
