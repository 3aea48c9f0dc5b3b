//! Session module - a playable game
//!
//! Wraps a [`GameState`] with a [`TileSpawner`] and applies the usual play
//! loop: two tiles at the start, one new tile after every tilt that changes
//! the board, no tilts once the game is over.

use crate::error::ConfigError;
use crate::game_state::GameState;
use crate::snapshot::GameSnapshot;
use crate::spawn::TileSpawner;
use crate::types::{GameAction, GameConfig, INITIAL_TILES};

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    spawner: TileSpawner,
    /// Number of tilts that changed the board in the current game
    moves: u32,
    /// Monotonic game counter (increments on restart)
    episode_id: u32,
}

impl Session {
    pub fn new(config: &GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::with_config(config)?,
            spawner: TileSpawner::new(seed, config.four_percent),
            moves: 0,
            episode_id: 0,
        })
    }

    /// Clear the board and place the opening tiles
    pub fn start(&mut self) {
        self.state.clear();
        self.moves = 0;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        tracing::info!(
            episode = self.episode_id,
            seed = self.spawner.seed(),
            "game started"
        );
    }

    /// Apply an action. Returns true if the game changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Tilt(side) => {
                if self.state.game_over() {
                    return false;
                }
                let changed = self.state.tilt(side);
                if changed {
                    self.moves += 1;
                    self.spawn_tile();
                }
                changed
            }
            GameAction::Restart => {
                // Record the finished game's score before it is cleared.
                self.state.game_over();
                self.episode_id = self.episode_id.wrapping_add(1);
                self.start();
                true
            }
        }
    }

    fn spawn_tile(&mut self) -> bool {
        match self.spawner.next_tile(self.state.board()) {
            Some(tile) => {
                tracing::trace!(value = tile.value(), col = tile.col(), row = tile.row(), "spawn");
                self.state.add_tile(tile);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn game_over(&mut self) -> bool {
        self.state.game_over()
    }

    /// Snapshot with the best score brought up to date
    pub fn snapshot(&mut self) -> GameSnapshot {
        self.state.game_over();
        self.state.snapshot()
    }
}
