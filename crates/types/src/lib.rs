//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures, making them usable in any context
//! (core logic, terminal rendering, scripted play).
//!
//! # Coordinates
//!
//! Boards are square. Cells are addressed as `(col, row)`, like `(x, y)`
//! coordinates, with `(0, 0)` in the **bottom-left** corner.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Side length of a standard board |
//! | `MAX_BOARD_SIZE` | 16 | Largest supported side length |
//! | `MAX_PIECE` | 2048 | Tile value that wins the game |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance that a spawned tile is a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{GameAction, Side, Tile};
//!
//! // Parse a direction (case-insensitive)
//! assert_eq!(Side::from_str("east"), Some(Side::East));
//! assert_eq!(Side::from_str("u"), Some(Side::North));
//!
//! // Opposite directions
//! assert_eq!(Side::North.opposite(), Side::South);
//!
//! // Parse game action
//! let action = GameAction::from_str("tiltWest").unwrap();
//! assert_eq!(action, GameAction::Tilt(Side::West));
//!
//! // Tiles are immutable values
//! let tile = Tile::new(2, 0, 3);
//! assert_eq!(tile.merged_at(1, 3).value(), 4);
//! ```

use serde::{Deserialize, Serialize};

/// Side length of a standard board
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: usize = 16;

/// Maximum number of cells on the largest board
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Tile value that ends the game as a win
pub const MAX_PIECE: u32 = 2048;

/// Percent chance that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PERCENT: u8 = 10;

/// Number of tiles placed when a game starts
pub const INITIAL_TILES: usize = 2;

/// The four board edges a tilt can move tiles toward.
///
/// A side doubles as a *viewing perspective*: looking at the board from
/// `side`, "up" (increasing row) points toward that edge. The tilt algorithm
/// is written once for `North` and reused for the others through
/// [`Side::col`] and [`Side::row`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// All four sides, clockwise from North.
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Canonical column of the cell seen at `(col, row)` from this side.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Side;
    ///
    /// // On a 4x4 board, the view's top-left corner when facing East
    /// // is the canonical top-right corner.
    /// assert_eq!(Side::East.col(0, 3, 4), 3);
    /// assert_eq!(Side::East.row(0, 3, 4), 3);
    /// ```
    pub fn col(&self, col: usize, row: usize, size: usize) -> usize {
        let s = size - 1;
        match self {
            Side::North => col,
            Side::East => row,
            Side::South => s - col,
            Side::West => s - row,
        }
    }

    /// Canonical row of the cell seen at `(col, row)` from this side.
    pub fn row(&self, col: usize, row: usize, size: usize) -> usize {
        let s = size - 1;
        match self {
            Side::North => row,
            Side::East => s - col,
            Side::South => s - row,
            Side::West => col,
        }
    }

    /// The side facing this one.
    pub fn opposite(&self) -> Self {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }

    /// Parse a side from a string (case-insensitive).
    ///
    /// Accepts full names, compass letters and arrow-style aliases:
    /// "north" | "n" | "up" | "u", "east" | "e" | "right" | "r",
    /// "south" | "s" | "down" | "d", "west" | "w" | "left" | "l"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" | "up" | "u" => Some(Side::North),
            "east" | "e" | "right" | "r" => Some(Side::East),
            "south" | "s" | "down" | "d" => Some(Side::South),
            "west" | "w" | "left" | "l" => Some(Side::West),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        }
    }
}

/// A numbered tile at a fixed canonical position.
///
/// Tiles never change after creation. Moving a tile creates a new one at
/// the destination; merging two tiles creates a single tile holding the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    pub fn new(value: u32, col: usize, row: usize) -> Self {
        Self { value, col, row }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Same value, new position.
    pub fn moved_to(&self, col: usize, row: usize) -> Self {
        Self::new(self.value, col, row)
    }

    /// The tile produced by merging this tile with an equal one at `(col, row)`.
    ///
    /// Panics in debug builds if the doubled value overflows; a board keeps
    /// the sum of its values within `u32`, which rules that out.
    pub fn merged_at(&self, col: usize, row: usize) -> Self {
        Self::new(self.value * 2, col, row)
    }
}

/// Game actions that can be applied to a running game
///
/// These actions are produced by both keyboard input and scripted play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide and merge every tile toward the given side
    Tilt(Side),
    /// Clear the board and start a new game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{GameAction, Side};
    ///
    /// assert_eq!(GameAction::from_str("tiltNorth"), Some(GameAction::Tilt(Side::North)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if lower == "restart" {
            return Some(GameAction::Restart);
        }
        lower
            .strip_prefix("tilt")
            .and_then(Side::from_str)
            .map(GameAction::Tilt)
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tilt(Side::North) => "tiltNorth",
            GameAction::Tilt(Side::East) => "tiltEast",
            GameAction::Tilt(Side::South) => "tiltSouth",
            GameAction::Tilt(Side::West) => "tiltWest",
            GameAction::Restart => "restart",
        }
    }
}

/// Tunable rules for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board side length
    pub size: usize,
    /// Tile value that ends the game
    pub max_piece: u32,
    /// Percent chance (0..=100) that a spawned tile is a 4
    pub four_percent: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            max_piece: MAX_PIECE,
            four_percent: SPAWN_FOUR_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_standard_game() {
        let config = GameConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.max_piece, 2048);
        assert_eq!(config.four_percent, 10);
    }

    #[test]
    fn perspective_maps_are_bijections() {
        for side in Side::ALL {
            for size in 1..=5 {
                let mut seen = vec![false; size * size];
                for col in 0..size {
                    for row in 0..size {
                        let c = side.col(col, row, size);
                        let r = side.row(col, row, size);
                        assert!(c < size && r < size);
                        assert!(!seen[r * size + c], "{:?} maps twice to ({}, {})", side, c, r);
                        seen[r * size + c] = true;
                    }
                }
            }
        }
    }

    #[test]
    fn perspective_up_points_toward_side() {
        // Moving one row "up" in the view moves one cell toward the side.
        let size = 4;
        let (c0, r0) = (Side::East.col(1, 1, size), Side::East.row(1, 1, size));
        let (c1, r1) = (Side::East.col(1, 2, size), Side::East.row(1, 2, size));
        assert_eq!((c1 as i32 - c0 as i32, r1 as i32 - r0 as i32), (1, 0));

        let (c0, r0) = (Side::South.col(1, 1, size), Side::South.row(1, 1, size));
        let (c1, r1) = (Side::South.col(1, 2, size), Side::South.row(1, 2, size));
        assert_eq!((c1 as i32 - c0 as i32, r1 as i32 - r0 as i32), (0, -1));

        let (c0, r0) = (Side::West.col(1, 1, size), Side::West.row(1, 1, size));
        let (c1, r1) = (Side::West.col(1, 2, size), Side::West.row(1, 2, size));
        assert_eq!((c1 as i32 - c0 as i32, r1 as i32 - r0 as i32), (-1, 0));
    }

    #[test]
    fn side_string_roundtrip() {
        for side in Side::ALL {
            assert_eq!(Side::from_str(side.as_str()), Some(side));
            assert_eq!(side.opposite().opposite(), side);
        }
        assert_eq!(Side::from_str("LEFT"), Some(Side::West));
        assert_eq!(Side::from_str("x"), None);
    }

    #[test]
    fn action_string_roundtrip() {
        for side in Side::ALL {
            let action = GameAction::Tilt(side);
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
        assert_eq!(GameAction::from_str("tilt"), None);
    }

    #[test]
    fn tiles_are_replaced_not_mutated() {
        let tile = Tile::new(8, 1, 2);
        let moved = tile.moved_to(1, 3);
        assert_eq!(tile.row(), 2);
        assert_eq!(moved.row(), 3);
        assert_eq!(moved.value(), 8);
        assert_eq!(tile.merged_at(1, 3), Tile::new(16, 1, 3));
    }
}
