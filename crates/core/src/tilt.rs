//! Tilt module - slide and merge every tile toward one side
//!
//! The algorithm is written once, for tiles moving toward increasing row.
//! Other sides are handled by viewing the board from that side for the
//! duration of the tilt (see [`Board::view`]).
//!
//! Merge rules:
//! - Rows are processed from the second-highest down to the lowest, columns
//!   left to right. The top row never moves.
//! - A tile slides up to the nearest occupied cell. It merges into that cell
//!   when the values match and the cell has not absorbed a merge yet during
//!   this tilt; otherwise it stops just below it.
//! - A merge scores the value of the resulting tile.

use crate::board::Board;
use crate::types::Side;

/// Result of a single tilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether any tile moved or merged
    pub changed: bool,
    /// Sum of the values of all tiles produced by merges
    pub score: u32,
}

/// Tilt `board` toward `side`.
///
/// The board is viewed from North again when this returns.
pub fn tilt(board: &mut Board, side: Side) -> MoveOutcome {
    let size = board.size();
    let mut view = board.view(side);

    // Indexed [row][col] by merge destination, in view coordinates.
    let mut already_merged = vec![vec![false; size]; size];
    let mut outcome = MoveOutcome::default();

    for row in (0..size - 1).rev() {
        for col in 0..size {
            let Some(tile) = view.tile(col, row) else {
                continue;
            };

            for k in row + 1..size {
                let next = view.tile(col, k);
                if next.is_none() && k < size - 1 {
                    continue;
                }

                if let Some(next) = next {
                    if next.value() != tile.value() || already_merged[k][col] {
                        if k - 1 != row {
                            view.move_tile(col, k - 1, tile);
                            outcome.changed = true;
                        }
                        break;
                    }
                }

                // Empty top cell or an equal, unmerged tile.
                let merged = view.move_tile(col, k, tile);
                outcome.changed = true;
                if merged {
                    let value = view.tile(col, k).map_or(0, |t| t.value());
                    outcome.score = outcome.score.saturating_add(value);
                    already_merged[k][col] = true;
                    break;
                }
            }
        }
    }

    tracing::debug!(
        side = side.as_str(),
        changed = outcome.changed,
        score = outcome.score,
        "tilt"
    );
    outcome
}
