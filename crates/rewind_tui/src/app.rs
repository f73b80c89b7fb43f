//! Application state: the game controller plus view-only UI state.

use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use rewind_game::{ClickOutcome, GameController, Position};
use tracing::{debug, info, instrument};

use crate::board_view::BoardView;
use crate::config::TuiConfig;
use crate::game_info::MoveListView;
use crate::input::{Action, action_for, move_cursor};
use crate::ui::AppLayout;

/// Main application state.
///
/// The controller owns every piece of game state. The cursor and the notice
/// line are presentation only.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    cursor: Position,
    notice: Option<String>,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application at game start.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            controller: GameController::new(),
            cursor: Position::Center,
            notice: None,
            show_cell_numbers: *config.display().show_cell_numbers(),
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last feedback message, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether empty cells show their key hint.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match action_for(key) {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(code) => self.cursor = move_cursor(self.cursor, code),
            Action::StepBack => match self.controller.step_number().checked_sub(1) {
                Some(step) => self.jump(step),
                None => self.notice = Some("Already at game start".to_string()),
            },
            Action::StepForward => self.jump(self.controller.step_number() + 1),
            Action::JumpStart => self.jump(0),
            Action::JumpLatest => self.jump(self.controller.history_len() - 1),
            Action::Ignore => debug!(?key, "Unbound key"),
        }
    }

    /// Handles a mouse event inside a terminal of size `area`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = AppLayout::new(area);
        let mut clicked = None;
        if BoardView::click_at(layout.board, mouse.column, mouse.row, |pos| {
            clicked = Some(pos)
        }) {
            if let Some(pos) = clicked {
                self.cursor = pos;
                self.place(pos);
            }
            return;
        }

        let moves = self.controller.move_list();
        let view = MoveListView::new(&moves, self.controller.step_number());
        if let Some(step) = view.step_at(layout.moves, mouse.column, mouse.row) {
            self.jump(step);
        }
    }

    /// Forwards a cell click to the controller.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) {
        self.notice = match self.controller.place(pos) {
            ClickOutcome::Placed { player, position, .. } => {
                Some(format!("{} played {}", player, position.label()))
            }
            ClickOutcome::Ignored(reason) => Some(reason.to_string()),
        };
    }

    /// Forwards a jump to the controller.
    #[instrument(skip(self))]
    pub fn jump(&mut self, step: usize) {
        self.notice = match self.controller.jump_to(step) {
            Ok(()) => Some(rewind_game::MoveListEntry::new(step).label().clone()),
            Err(e) => Some(e.to_string()),
        };
    }
}
