//! Application state and logic.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use strictly_timeline::{GameEngine, MoveOutcome, Position, Rejection, is_draw};
use tracing::{debug, instrument, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    message: String,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application around an engine.
    pub fn new(engine: GameEngine, show_cell_numbers: bool) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            message: "Press 1-9 to play, [ and ] to travel through history.".to_string(),
            show_cell_numbers,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the last feedback message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Status line for the viewed board.
    ///
    /// The engine reports a full board without a line as "next player"; the
    /// UI calls it a draw.
    pub fn status_line(&self) -> String {
        let board = self.engine.current_board();
        if self.engine.current_winner().is_none() && is_draw(board) {
            "Draw".to_string()
        } else {
            self.engine.status().to_string()
        }
    }

    /// One label per history step, for the move list.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.engine.history_length())
            .map(|step| {
                if step == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", step)
                }
            })
            .collect()
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c) if digit_cell(c).is_some() => {
                if let Some(cell) = digit_cell(c) {
                    self.play(cell);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Char('[') | KeyCode::PageUp => {
                let step = self.engine.current_step().saturating_sub(1);
                self.jump(step);
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                let last = self.engine.history_length() - 1;
                let step = (self.engine.current_step() + 1).min(last);
                self.jump(step);
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.engine.history_length() - 1),
            _ => {}
        }
        Control::Continue
    }

    /// Plays a cell on the viewed board.
    fn play(&mut self, cell: usize) {
        match self.engine.apply_move(cell) {
            Ok(outcome @ MoveOutcome::Placed { cell, .. }) => {
                self.cursor = Position::from_index(cell).unwrap_or(self.cursor);
                self.message = outcome.to_string();
            }
            Ok(MoveOutcome::Ignored(Rejection::CellOccupied(cell))) => {
                let label = Position::from_index(cell).map_or("That cell", |p| p.label());
                self.message = format!("{} is already taken", label);
            }
            Ok(MoveOutcome::Ignored(rejection)) => {
                self.message = rejection.to_string();
            }
            Err(e) => {
                warn!(error = %e, "Move failed");
                self.message = e.to_string();
            }
        }
    }

    /// Views a history step.
    fn jump(&mut self, step: usize) {
        match self.engine.jump_to(step) {
            Ok(()) => {
                self.message = match step {
                    0 => "Viewing game start".to_string(),
                    n => format!("Viewing move #{}", n),
                };
            }
            Err(e) => {
                warn!(error = %e, "Jump failed");
                self.message = e.to_string();
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine = GameEngine::new();
        self.cursor = Position::Center;
        self.message = "Game restarted. Player X's turn.".to_string();
    }
}
