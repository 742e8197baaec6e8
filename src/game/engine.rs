use crate::error::EngineError;

use super::board::{Board, COLS};
use super::player::Player;

/// Whether the game is still accepting moves, and how it ended if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    /// Terminal statuses accept no further drops until reset.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Outcome of a successful `drop_piece` call. Both variants carry the
/// status the engine was left in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// The piece came to rest at (row, column).
    Placed {
        row: usize,
        column: usize,
        player: Player,
        status: GameStatus,
    },
    /// The column was full: the move was ignored and the turn did not
    /// advance.
    ColumnFull { status: GameStatus },
}

/// Sole authority over board contents, whose turn it is, and whether the
/// game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine for a fresh game: empty board, Player 1 to move.
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Get reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player due to move next
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Current game status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Row a piece dropped into `column` would land in, without dropping
    /// it. `Ok(None)` when the column is full.
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, EngineError> {
        if column >= COLS {
            return Err(EngineError::InvalidColumn(column));
        }
        Ok(self.board.landing_row(column))
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column is a legitimate outcome of play, reported as
    /// `DropResult::ColumnFull` with board, turn, and status untouched.
    /// An out-of-range column or a drop after the game has ended is an
    /// integration error and aborts the call instead.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropResult, EngineError> {
        if column >= COLS {
            return Err(EngineError::InvalidColumn(column));
        }
        if self.status.is_terminal() {
            return Err(EngineError::GameOver);
        }

        let Some(row) = self.board.landing_row(column) else {
            return Ok(DropResult::ColumnFull {
                status: self.status,
            });
        };

        let player = self.current_player;
        self.board.place(row, column, player.to_cell());

        // Win is checked before tie: a winning move into the last empty
        // cell is a win. The turn only advances while the game is still
        // in progress.
        if self.board.check_win(player.to_cell()) {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
        } else {
            self.current_player = player.other();
        }

        Ok(DropResult::Placed {
            row,
            column,
            player,
            status: self.status,
        })
    }

    /// Check whether `player` has four-in-a-row on the current board.
    pub fn check_win(&self, player: Player) -> bool {
        self.board.check_win(player.to_cell())
    }

    /// Reinitialize to a fresh game: empty board, Player 1 to move,
    /// status `InProgress`. Callable from any state.
    pub fn reset(&mut self) {
        *self = GameEngine::new();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
