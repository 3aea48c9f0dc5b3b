//! Recoverable construction errors.
//!
//! Contract violations during play (out-of-range coordinates, placing onto an
//! occupied cell) panic instead; these errors only cover input that comes
//! from outside the engine, such as test matrices or command-line options.

use crate::types::{GameConfig, MAX_BOARD_SIZE};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has no rows")]
    Empty,
    #[error("board size {0} exceeds the maximum of {max}", max = MAX_BOARD_SIZE)]
    TooLarge(usize),
    #[error("row {row} has {len} values, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("value {value} at ({col}, {row}) is not a power of two")]
    InvalidValue { col: usize, row: usize, value: u32 },
    #[error("tile values add up to {0}, more than a u32 holds")]
    TotalTooLarge(u64),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {0}", max = MAX_BOARD_SIZE)]
    Size(usize),
    #[error("winning tile must be a power of two of at least 4, got {0}")]
    MaxPiece(u32),
    #[error("four-tile chance must be a percentage, got {0}")]
    FourPercent(u8),
}

/// Check that a configuration describes a playable game.
pub fn validate_config(config: &GameConfig) -> Result<(), ConfigError> {
    if config.size == 0 || config.size > MAX_BOARD_SIZE {
        return Err(ConfigError::Size(config.size));
    }
    if config.max_piece < 4 || !config.max_piece.is_power_of_two() {
        return Err(ConfigError::MaxPiece(config.max_piece));
    }
    if config.four_percent > 100 {
        return Err(ConfigError::FourPercent(config.four_percent));
    }
    Ok(())
}
