//! Screen layout and top-level drawing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_game::rules::winning_line;
use tracing::instrument;

use crate::app::App;
use crate::board_view::BoardView;
use crate::game_info::{MoveListView, render_status};

/// Key help shown at the bottom of the screen.
pub const HELP_TEXT: &str =
    "1-9/click: Move | Arrows+Enter: Cursor | ,/.: Step | Home/End | q: Quit";

/// Regions of the screen.
///
/// Drawing and mouse hit-testing both derive their rectangles from here, so
/// a click always lands where the widget was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar.
    pub title: Rect,
    /// Border around the board.
    pub board_frame: Rect,
    /// Inside of the board border.
    pub board: Rect,
    /// Status panel.
    pub status: Rect,
    /// Move list panel.
    pub moves: Rect,
    /// Help bar.
    pub help: Rect,
}

impl AppLayout {
    /// Splits the terminal area.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(13),   // Board and info
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(31), Constraint::Min(24)])
            .split(rows[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(body[1]);

        let board_frame = body[0];
        Self {
            title: rows[0],
            board_frame,
            board: board_block().inner(board_frame),
            status: info[0],
            moves: info[1],
            help: rows[2],
        }
    }
}

fn board_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title("Board")
}

/// Draws the whole UI.
#[instrument(skip_all)]
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let controller = app.controller();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    frame.render_widget(board_block(), layout.board_frame);
    BoardView::new(controller.current_board())
        .cursor(app.cursor())
        .highlight(winning_line(controller.current_board()))
        .show_cell_numbers(app.show_cell_numbers())
        .render(frame, layout.board);

    render_status(
        frame,
        layout.status,
        controller.status(),
        controller.is_draw(),
        app.notice(),
    );

    let moves = controller.move_list();
    MoveListView::new(&moves, controller.step_number()).render(frame, layout.moves);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}
