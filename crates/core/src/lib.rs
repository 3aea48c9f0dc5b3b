//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and tile spawning.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, integration tests at the crate root
//! - **Portable**: Can run in any environment (terminal, headless scripts)
//!
//! # Module Structure
//!
//! - [`board`]: N x N tile grid with a viewing perspective
//! - [`tilt`]: Slide-and-merge transition for one direction
//! - [`rules`]: Terminal-state detection (win tile, no moves left)
//! - [`game_state`]: Score, best score and game-over tracking
//! - [`spawn`]: Seeded placement of new 2 and 4 tiles
//! - [`session`]: Play loop glue (opening tiles, spawn after moves, restart)
//! - [`snapshot`]: Serializable view of a game
//! - [`error`]: Construction and configuration errors
//!
//! # Game Rules
//!
//! - **Tilt**: Every tile slides as far as possible toward the chosen side
//! - **Merge**: Two equal tiles that meet become one tile of double value;
//!   a tile produced by a merge cannot merge again in the same tilt
//! - **Score**: Each merge adds the value of the new tile
//! - **End**: A tile reaches the winning value, or the board is full with no
//!   equal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::Side;
//!
//! // Bottom row [2, 2, 4, 4], everything else empty
//! let mut game = GameState::from_values(
//!     &[[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]],
//!     0,
//!     0,
//!     false,
//! )
//! .unwrap();
//!
//! assert!(game.tilt(Side::West));
//! assert_eq!(game.board().values()[0], vec![4, 8, 0, 0]);
//! assert_eq!(game.score(), 12);
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod tilt;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, PerspectiveGuard};
pub use error::{validate_config, BoardError, ConfigError};
pub use game_state::GameState;
pub use rules::{at_least_one_move_exists, empty_space_exists, is_game_over, max_tile_exists};
pub use session::Session;
pub use snapshot::GameSnapshot;
pub use spawn::{SimpleRng, TileSpawner};
pub use tilt::{tilt, MoveOutcome};
