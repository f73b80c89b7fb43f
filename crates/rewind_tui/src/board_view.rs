//! Stateless board rendering and hit-testing.
//!
//! A [`BoardView`] is a projection of a [`Board`]: it draws the grid and maps
//! terminal coordinates back to a [`Position`]. It never decides whether a
//! click is legal; it only reports which cell was clicked.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rewind_game::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Cell width in columns.
pub const CELL_WIDTH: u16 = 7;
/// Cell height in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Grid width including the two vertical separators.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Grid height including the two horizontal separators.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Projection of a board onto the terminal.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    cursor: Option<Position>,
    highlight: Option<[Position; 3]>,
    show_cell_numbers: bool,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` with no cursor or highlight.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
            highlight: None,
            show_cell_numbers: true,
        }
    }

    /// Marks the keyboard cursor cell.
    pub fn cursor(mut self, pos: Position) -> Self {
        self.cursor = Some(pos);
        self
    }

    /// Highlights a winning line.
    pub fn highlight(mut self, line: Option<[Position; 3]>) -> Self {
        self.highlight = line;
        self
    }

    /// Shows or hides the 1-9 hints in empty cells.
    pub fn show_cell_numbers(mut self, show: bool) -> Self {
        self.show_cell_numbers = show;
        self
    }

    /// Screen rectangles of the nine cells, in position order.
    ///
    /// Rendering and hit-testing share this layout.
    pub fn cell_areas(area: Rect) -> [Rect; 9] {
        let grid = center_rect(area, GRID_WIDTH, GRID_HEIGHT);
        Position::ALL.map(|pos| {
            let x = grid.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = grid.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid)
        })
    }

    /// Maps a terminal coordinate to a cell and reports it through `on_click`.
    ///
    /// Returns true if the coordinate landed on a cell.
    #[instrument(skip(on_click))]
    pub fn click_at(area: Rect, column: u16, row: u16, mut on_click: impl FnMut(Position)) -> bool {
        let hit = Position::ALL
            .into_iter()
            .zip(Self::cell_areas(area))
            .find(|(_, cell)| contains(*cell, column, row))
            .map(|(pos, _)| pos);

        match hit {
            Some(pos) => {
                debug!(position = %pos, "Cell clicked");
                on_click(pos);
                true
            }
            None => false,
        }
    }

    /// Draws the grid into `area`.
    #[instrument(skip(self, frame))]
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let grid = center_rect(area, GRID_WIDTH, GRID_HEIGHT);
        let cells = Self::cell_areas(area);

        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            self.render_cell(frame, cell, pos);
        }

        let separator_style = Style::default().fg(Color::DarkGray);
        for row in 0..3u16 {
            let y = grid.y + row * (CELL_HEIGHT + 1);
            for col in 1..3u16 {
                let x = grid.x + col * (CELL_WIDTH + 1) - 1;
                let sep = Rect::new(x, y, 1, CELL_HEIGHT).intersection(grid);
                let bar = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize])
                    .style(separator_style);
                frame.render_widget(bar, sep);
            }
        }
        for row in 1..3u16 {
            let y = grid.y + row * (CELL_HEIGHT + 1) - 1;
            let sep = Rect::new(grid.x, y, GRID_WIDTH, 1).intersection(grid);
            frame.render_widget(Paragraph::new(horizontal_rule()).style(separator_style), sep);
        }
    }

    fn render_cell(&self, frame: &mut Frame, area: Rect, pos: Position) {
        let (symbol, mut style) = match self.board.get(pos) {
            Square::Empty if self.show_cell_numbers => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Empty => (" ".to_string(), Style::default()),
            Square::Occupied(Player::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        if self.highlight.is_some_and(|line| line.contains(&pos)) {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if self.cursor == Some(pos) {
            style = style.bg(Color::White).fg(Color::Black);
        }

        let middle = (CELL_HEIGHT / 2) as usize;
        let lines: Vec<Line> = (0..CELL_HEIGHT as usize)
            .map(|i| {
                if i == middle {
                    Line::from(Span::styled(symbol.clone(), style))
                } else {
                    Line::from("")
                }
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

/// Plain-text grid for non-interactive output.
pub fn render_text(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| match board.get(pos) {
                Square::Empty => " ".to_string(),
                Square::Occupied(player) => player.to_string(),
            })
            .map(|mark| format!(" {} ", mark))
            .collect();
        result.push_str(&cells.join("|"));
        if row < 2 {
            result.push_str("\n---+---+---\n");
        }
    }
    result
}

fn horizontal_rule() -> String {
    let segment = "─".repeat(CELL_WIDTH as usize);
    format!("{segment}┼{segment}┼{segment}")
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
