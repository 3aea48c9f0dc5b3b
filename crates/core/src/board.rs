//! Board module - the square tile grid
//!
//! The board is an N x N grid where each cell is empty or holds one [`Tile`].
//! Uses a flat vector in row-major order (`row * size + col`).
//! Coordinates: (col, row) like (x, y), with (0, 0) in the bottom-left corner.
//!
//! Every access through [`Board::tile`] and [`Board::move_tile`] goes through
//! the current *viewing perspective*. Seen from side `S`, increasing row
//! points toward `S`, so code written for North works for every side.
//! [`Board::raw_tile`] ignores the perspective.

use std::ops::{Deref, DerefMut};

use crate::error::BoardError;
use crate::types::{Side, Tile, MAX_BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells in canonical coordinates
    cells: Vec<Option<Tile>>,
    perspective: Side,
}

impl Board {
    /// Create a new empty board of `size` x `size` cells.
    ///
    /// Panics if `size` is zero or larger than [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(
            size > 0 && size <= MAX_BOARD_SIZE,
            "board size must be between 1 and {}, got {}",
            MAX_BOARD_SIZE,
            size
        );
        Self {
            size,
            cells: vec![None; size * size],
            perspective: Side::North,
        }
    }

    /// Build a board from raw values, `rows[row][col]`, 0 meaning empty.
    ///
    /// `rows[0]` is the bottom row, so `Board::from_values(m)?.values() == m`.
    /// Every tile value must be a power of two and the values together must
    /// fit in a `u32`, so no sequence of merges can overflow.
    pub fn from_values<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if size > MAX_BOARD_SIZE {
            return Err(BoardError::TooLarge(size));
        }

        let mut board = Self::new(size);
        let mut total = 0u64;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if !value.is_power_of_two() {
                    return Err(BoardError::InvalidValue { col, row, value });
                }
                total += u64::from(value);
                board.cells[row * size + col] = Some(Tile::new(value, col, row));
            }
        }
        if total > u64::from(u32::MAX) {
            return Err(BoardError::TotalTooLarge(total));
        }
        Ok(board)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// The side the board is currently viewed from
    pub fn perspective(&self) -> Side {
        self.perspective
    }

    /// View the board from `side` until the perspective is changed again.
    ///
    /// Prefer [`Board::view`], which restores North automatically.
    pub fn set_perspective(&mut self, side: Side) {
        self.perspective = side;
    }

    /// View the board from `side` for the lifetime of the returned guard.
    ///
    /// The perspective returns to North when the guard is dropped, including
    /// on early return and unwinding.
    pub fn view(&mut self, side: Side) -> PerspectiveGuard<'_> {
        self.perspective = side;
        PerspectiveGuard { board: self }
    }

    #[inline(always)]
    fn index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.size && row < self.size,
            "({}, {}) is outside a {}x{} board",
            col,
            row,
            self.size,
            self.size
        );
        row * self.size + col
    }

    /// Map perspective coordinates to canonical coordinates
    #[inline(always)]
    fn canonical(&self, col: usize, row: usize) -> (usize, usize) {
        assert!(
            col < self.size && row < self.size,
            "({}, {}) is outside a {}x{} board",
            col,
            row,
            self.size,
            self.size
        );
        (
            self.perspective.col(col, row, self.size),
            self.perspective.row(col, row, self.size),
        )
    }

    /// Tile at (col, row) under the current perspective.
    ///
    /// The returned tile reports its canonical position.
    /// Panics if (col, row) is off the board.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        let (c, r) = self.canonical(col, row);
        self.cells[self.index(c, r)]
    }

    /// Tile at canonical (col, row), ignoring the perspective.
    pub fn raw_tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.cells[self.index(col, row)]
    }

    /// Place `tile` at its own canonical position.
    ///
    /// Panics if that cell is already occupied, if the value is not a power
    /// of two, or if the board's values would no longer fit in a `u32`.
    pub fn add_tile(&mut self, tile: Tile) {
        let idx = self.index(tile.col(), tile.row());
        assert!(
            self.cells[idx].is_none(),
            "cell ({}, {}) is already occupied",
            tile.col(),
            tile.row()
        );
        assert!(
            tile.value().is_power_of_two(),
            "{} is not a power of two",
            tile.value()
        );
        let total = self.total() + u64::from(tile.value());
        assert!(
            total <= u64::from(u32::MAX),
            "tile values would add up to {}",
            total
        );
        self.cells[idx] = Some(tile);
    }

    /// Move `tile` to (col, row) in perspective coordinates.
    ///
    /// If the destination holds a tile, the two merge into one tile of
    /// double value and `true` is returned. Moving a tile onto its own cell
    /// does nothing.
    pub fn move_tile(&mut self, col: usize, row: usize, tile: Tile) -> bool {
        let (c, r) = self.canonical(col, row);
        if tile.col() == c && tile.row() == r {
            return false;
        }

        let from = self.index(tile.col(), tile.row());
        let to = self.index(c, r);
        debug_assert_eq!(self.cells[from], Some(tile), "moved tile is not on the board");

        self.cells[from] = None;
        match self.cells[to] {
            Some(next) => {
                debug_assert_eq!(next.value(), tile.value(), "merging unequal tiles");
                self.cells[to] = Some(next.merged_at(c, r));
                true
            }
            None => {
                self.cells[to] = Some(tile.moved_to(c, r));
                false
            }
        }
    }

    /// Remove every tile
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// All placed tiles, bottom row first
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Canonical (col, row) of every empty cell, bottom row first
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| (idx % size, idx / size))
    }

    /// Sum of all tile values. Tilts never change it.
    pub fn total(&self) -> u64 {
        self.tiles().map(|t| u64::from(t.value())).sum()
    }

    /// Raw values in canonical order, `values()[row][col]`, 0 meaning empty
    pub fn values(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.map_or(0, |t| t.value())).collect())
            .collect()
    }
}

/// Scoped perspective on a [`Board`]; restores North on drop.
pub struct PerspectiveGuard<'a> {
    board: &'a mut Board,
}

impl Deref for PerspectiveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PerspectiveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PerspectiveGuard<'_> {
    fn drop(&mut self) {
        self.board.perspective = Side::North;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4);
        assert_eq!(board.index(0, 0), 0);
        assert_eq!(board.index(3, 0), 3);
        assert_eq!(board.index(0, 1), 4);
        assert_eq!(board.index(3, 3), 15);
    }

    #[test]
    #[should_panic(expected = "outside a 4x4 board")]
    fn test_index_out_of_range_panics() {
        let board = Board::new(4);
        board.tile(4, 0);
    }

    #[test]
    fn test_perspective_lookup() {
        // Single tile in the canonical bottom-right corner.
        let mut board = Board::new(4);
        board.add_tile(Tile::new(2, 3, 0));

        board.set_perspective(Side::North);
        assert!(board.tile(3, 0).is_some());

        // Facing East, the right edge is "up" and the bottom edge is on the
        // right: canonical (3, 0) is the view's top-right corner.
        board.set_perspective(Side::East);
        assert_eq!(board.tile(3, 3), Some(Tile::new(2, 3, 0)));

        // Facing South, the board is upside down.
        board.set_perspective(Side::South);
        assert_eq!(board.tile(0, 3), Some(Tile::new(2, 3, 0)));

        // Facing West, the left edge is "up".
        board.set_perspective(Side::West);
        assert_eq!(board.tile(0, 0), Some(Tile::new(2, 3, 0)));
    }

    #[test]
    fn test_move_in_perspective_uses_canonical_positions() {
        let mut board = Board::new(4);
        let tile = Tile::new(4, 0, 0);
        board.add_tile(tile);

        {
            let mut view = board.view(Side::East);
            // Canonical (0, 0) is seen at (3, 0) from the East.
            let seen = view.tile(3, 0).unwrap();
            assert_eq!(seen, tile);
            assert!(!view.move_tile(3, 3, seen));
        }

        assert_eq!(board.perspective(), Side::North);
        assert_eq!(board.raw_tile(0, 0), None);
        assert_eq!(board.raw_tile(3, 0), Some(Tile::new(4, 3, 0)));
    }

    #[test]
    fn test_move_onto_equal_tile_merges() {
        let mut board = Board::from_values(&[[2, 0, 2]; 3]).unwrap();
        let tile = board.tile(0, 0).unwrap();
        assert!(board.move_tile(2, 0, tile));
        assert_eq!(board.raw_tile(0, 0), None);
        assert_eq!(board.raw_tile(2, 0), Some(Tile::new(4, 2, 0)));
    }

    #[test]
    fn test_move_to_self_is_noop() {
        let mut board = Board::new(3);
        let tile = Tile::new(2, 1, 1);
        board.add_tile(tile);
        let before = board.clone();
        assert!(!board.move_tile(1, 1, tile));
        assert_eq!(board, before);
    }

    #[test]
    fn test_guard_restores_north_after_panic() {
        let mut board = Board::new(4);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let view = board.view(Side::West);
            view.tile(9, 9);
        }));
        assert!(result.is_err());
        assert_eq!(board.perspective(), Side::North);
    }

    #[test]
    fn test_empty_cells_and_tiles() {
        let board = Board::from_values(&[[2, 0], [0, 4]]).unwrap();
        let empty: Vec<_> = board.empty_cells().collect();
        assert_eq!(empty, vec![(1, 0), (0, 1)]);
        let values: Vec<_> = board.tiles().map(|t| t.value()).collect();
        assert_eq!(values, vec![2, 4]);
    }

    #[test]
    fn test_from_values_rejects_bad_input() {
        let empty: [[u32; 0]; 0] = [];
        assert_eq!(Board::from_values(&empty), Err(BoardError::Empty));
        assert_eq!(
            Board::from_values(&[vec![2, 0], vec![0]]),
            Err(BoardError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Board::from_values(&[[3, 0], [0, 0]]),
            Err(BoardError::InvalidValue {
                col: 0,
                row: 0,
                value: 3
            })
        );
        assert_eq!(
            Board::from_values(&[[1u32 << 31, 1 << 31], [0, 0]]),
            Err(BoardError::TotalTooLarge(1 << 32))
        );
    }

    #[test]
    fn test_from_values_accepts_one() {
        let board = Board::from_values(&[[1, 0], [0, 2]]).unwrap();
        assert_eq!(board.raw_tile(0, 0), Some(Tile::new(1, 0, 0)));
        assert_eq!(board.total(), 3);
    }

    #[test]
    #[should_panic(expected = "would add up to")]
    fn test_add_tile_past_u32_total_panics() {
        let mut board = Board::from_values(&[[1u32 << 31, 0], [0, 0]]).unwrap();
        board.add_tile(Tile::new(1 << 31, 1, 1));
    }
}
