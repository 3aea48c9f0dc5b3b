//! Spawn module - placing new tiles
//!
//! After every move that changes the board a new tile appears on a random
//! empty cell: a 2 most of the time, a 4 otherwise. Randomness comes from a
//! small LCG so that a seed fully determines a game.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Tile, MAX_CELLS, SPAWN_FOUR_PERCENT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Picks the position and value of new tiles.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
    seed: u32,
    four_percent: u8,
}

impl TileSpawner {
    pub fn new(seed: u32, four_percent: u8) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
            four_percent: four_percent.min(100),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Choose a tile for a random empty cell of `board`.
    ///
    /// Returns `None` when the board is full. The board is not modified.
    pub fn next_tile(&mut self, board: &Board) -> Option<Tile> {
        let empty: ArrayVec<(usize, usize), MAX_CELLS> = board.empty_cells().collect();
        if empty.is_empty() {
            return None;
        }

        let (col, row) = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_range(100) < self.four_percent as u32 {
            4
        } else {
            2
        };
        Some(Tile::new(value, col, row))
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new(1, SPAWN_FOUR_PERCENT)
    }
}
