//! Terminal-state rules
//!
//! A game ends when a tile reaches the winning value, or when the board is
//! full and no two neighbouring tiles are equal. A winning tile ends the game
//! even if moves remain.
//!
//! All checks read canonical coordinates and ignore the board's perspective.

use crate::board::Board;

/// True if at least one cell is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    board.empty_cells().next().is_some()
}

/// True if any tile equals `max_piece`.
pub fn max_tile_exists(board: &Board, max_piece: u32) -> bool {
    board.tiles().any(|tile| tile.value() == max_piece)
}

/// True if some tilt could still change the board.
///
/// That is the case when a cell is empty or when two horizontally or
/// vertically adjacent tiles hold the same value.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }

    let size = board.size();
    let value = |col, row| board.raw_tile(col, row).map(|t| t.value());

    for row in 0..size {
        for col in 0..size - 1 {
            if value(col, row) == value(col + 1, row) {
                return true;
            }
        }
    }
    for col in 0..size {
        for row in 0..size - 1 {
            if value(col, row) == value(col, row + 1) {
                return true;
            }
        }
    }
    false
}

/// Whether the game on `board` is over.
pub fn is_game_over(board: &Board, max_piece: u32) -> bool {
    max_tile_exists(board, max_piece) || !at_least_one_move_exists(board)
}
