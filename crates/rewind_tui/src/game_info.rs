//! Status line and move list panels.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_game::{MoveListEntry, Status};
use tracing::{debug, instrument};

/// Renders the status line plus optional hint lines.
#[instrument(skip(frame))]
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    status: Status,
    draw: bool,
    notice: Option<&str>,
) {
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::NextPlayer(_) => Color::Yellow,
    };

    let mut lines = vec![Line::styled(
        status.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if draw {
        lines.push(Line::styled(
            "Board full: draw",
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(notice) = notice {
        lines.push(Line::styled(
            notice.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}

/// Move list panel with the current step selected.
#[derive(Debug, Clone, Copy)]
pub struct MoveListView<'a> {
    entries: &'a [MoveListEntry],
    current_step: usize,
}

impl<'a> MoveListView<'a> {
    /// Creates the view.
    pub fn new(entries: &'a [MoveListEntry], current_step: usize) -> Self {
        Self {
            entries,
            current_step,
        }
    }

    /// Index of the first visible row, keeping the current step on screen.
    pub fn scroll_offset(&self, area: Rect) -> usize {
        let visible = Self::inner(area).height as usize;
        if visible == 0 {
            return 0;
        }
        self.current_step.saturating_sub(visible - 1)
    }

    /// Draws the list into `area`.
    #[instrument(skip(self, frame))]
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(entry.label().clone()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Moves"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut state = ListState::default()
            .with_offset(self.scroll_offset(area))
            .with_selected(Some(self.current_step));
        frame.render_stateful_widget(list, area, &mut state);
    }

    /// Maps a terminal coordinate to the step of the row under it.
    #[instrument(skip(self))]
    pub fn step_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let inner = Self::inner(area);
        if column < inner.x
            || column >= inner.x + inner.width
            || row < inner.y
            || row >= inner.y + inner.height
        {
            return None;
        }

        let step = self.scroll_offset(area) + (row - inner.y) as usize;
        let hit = self.entries.get(step).map(|entry| *entry.step());
        debug!(?hit, "Move list hit");
        hit
    }

    fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }
}
