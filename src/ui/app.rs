use crate::config::UiConfig;
use crate::error::EngineError;
use crate::game::{DropResult, GameEngine, GameStatus, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    config: UiConfig,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        App {
            engine: GameEngine::new(),
            selected_column: config.starting_column,
            should_quit: false,
            message: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.tick_rate_ms))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='7') => {
                // Digit keys act as the column headers: select and drop
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.config.starting_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the current player's piece in the selected column
    fn drop_piece(&mut self) {
        match self.engine.drop_piece(self.selected_column) {
            Ok(DropResult::Placed { status, .. }) => match status {
                GameStatus::Won(player) => {
                    self.message = Some(format!("{} won!", player.name()));
                }
                GameStatus::Tied => {
                    self.message = Some("Tie!".to_string());
                }
                GameStatus::InProgress => {}
            },
            Ok(DropResult::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(EngineError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err @ EngineError::InvalidColumn(_)) => {
                // Selection is clamped to the board, so reaching this is a
                // UI bug; surface it rather than swallowing it.
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            &self.config,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
