use serde::{Deserialize, Serialize};

/// Owned, serializable view of a game.
///
/// `board[row][col]` uses the same bottom-left origin as the board, with 0
/// for empty cells, so it can be fed back into `GameState::from_values`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: usize,
    pub board: Vec<Vec<u32>>,
    pub score: u32,
    pub max_score: u32,
    pub game_over: bool,
    pub max_piece: u32,
}

impl GameSnapshot {
    /// Largest tile value on the board, 0 if empty
    pub fn highest_tile(&self) -> u32 {
        self.board.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Whether the game ended because the winning tile was reached
    pub fn won(&self) -> bool {
        self.board.iter().flatten().any(|&v| v == self.max_piece)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Value at (col, row), 0 if empty
    pub fn value(&self, col: usize, row: usize) -> u32 {
        self.board[row][col]
    }
}
