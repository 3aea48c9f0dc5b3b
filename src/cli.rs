//! Command-line arguments.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::core::validate_config;
use crate::types::{GameConfig, Side, DEFAULT_BOARD_SIZE, MAX_PIECE, SPAWN_FOUR_PERCENT};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", version, about = "Play 2048 in the terminal")]
pub struct Cli {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Tile value that ends the game
    #[arg(long = "win", value_name = "VALUE", default_value_t = MAX_PIECE)]
    pub max_piece: u32,

    /// Seed for tile placement
    #[arg(long, default_value_t = 1)]
    pub seed: u32,

    /// Percent chance that a new tile is a 4
    #[arg(long, value_name = "PERCENT", default_value_t = SPAWN_FOUR_PERCENT)]
    pub four_percent: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a fixed sequence of tilts and print JSON instead of drawing
    Script {
        /// One character per tilt: n/e/s/w or u/r/d/l
        #[arg(long)]
        moves: String,

        /// Print only the final snapshot
        #[arg(long)]
        final_only: bool,
    },
}

impl Cli {
    /// The validated game rules selected on the command line
    pub fn config(&self) -> Result<GameConfig> {
        let config = GameConfig {
            size: self.size,
            max_piece: self.max_piece,
            four_percent: self.four_percent,
        };
        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse a move string such as `"nnwse"` into tilt directions.
///
/// Whitespace is ignored; any other unknown character is an error.
pub fn parse_moves(moves: &str) -> Result<Vec<Side>> {
    moves
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(i, ch)| {
            Side::from_str(ch.encode_utf8(&mut [0u8; 4]))
                .ok_or_else(|| anyhow!("script: unknown move '{}' at position {}", ch, i))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_standard_game() {
        let cli = Cli::parse_from(["tui-2048"]);
        assert_eq!(cli.config().unwrap(), GameConfig::default());
        assert_eq!(cli.seed, 1);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_script_subcommand() {
        let cli = Cli::parse_from([
            "tui-2048", "--size", "5", "--win", "64", "--seed", "9", "script", "--moves", "nesw",
            "--final-only",
        ]);
        let config = cli.config().unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.max_piece, 64);
        assert_eq!(cli.seed, 9);
        match cli.command {
            Some(Command::Script { moves, final_only }) => {
                assert_eq!(moves, "nesw");
                assert!(final_only);
            }
            None => panic!("expected script subcommand"),
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let cli = Cli::parse_from(["tui-2048", "--win", "100"]);
        let err = cli.config().unwrap_err();
        assert!(err.to_string().contains("power of two"));
    }

    #[test]
    fn parse_moves_accepts_aliases() {
        assert_eq!(
            parse_moves("n e\ts w u r d l").unwrap(),
            vec![
                Side::North,
                Side::East,
                Side::South,
                Side::West,
                Side::North,
                Side::East,
                Side::South,
                Side::West,
            ]
        );
        let err = parse_moves("nnx").unwrap_err();
        assert!(err.to_string().contains("'x' at position 2"));
    }
}
