use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to the mark it leaves on the board
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}
