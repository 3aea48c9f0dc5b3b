//! Headless scripted play.
//!
//! Applies a fixed list of tilts to a fresh session and writes JSON lines:
//! one [`StepRecord`] per applied tilt followed by a [`Summary`], or only the
//! final [`GameSnapshot`] when `final_only` is set.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::core::{GameSnapshot, Session};
use crate::types::{GameAction, Side};

#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub side: Side,
    pub changed: bool,
    pub snapshot: GameSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Tilts that changed the board
    pub moves: u32,
    /// Tilts skipped because the game had already ended
    pub skipped: usize,
    pub score: u32,
    pub max_score: u32,
    pub highest_tile: u32,
    pub game_over: bool,
    pub won: bool,
}

/// Start `session` and play `sides` in order, writing JSON lines to `out`.
///
/// Tilts after the game ends are skipped. Returns the summary that was (or,
/// with `final_only`, would have been) written.
pub fn run_script<W: Write>(
    session: &mut Session,
    sides: &[Side],
    final_only: bool,
    out: &mut W,
) -> Result<Summary> {
    session.start();

    let mut skipped = 0;
    for (step, &side) in sides.iter().enumerate() {
        if session.game_over() {
            skipped = sides.len() - step;
            tracing::warn!(step, skipped, "game over before the script ended");
            break;
        }

        let changed = session.apply_action(GameAction::Tilt(side));
        if !final_only {
            let record = StepRecord {
                step,
                side,
                changed,
                snapshot: session.snapshot(),
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }

    let snapshot = session.snapshot();
    let summary = Summary {
        moves: session.moves(),
        skipped,
        score: snapshot.score,
        max_score: snapshot.max_score,
        highest_tile: snapshot.highest_tile(),
        game_over: snapshot.game_over,
        won: snapshot.won(),
    };

    if final_only {
        serde_json::to_writer(&mut *out, &snapshot)?;
    } else {
        serde_json::to_writer(&mut *out, &summary)?;
    }
    writeln!(out)?;
    out.flush()?;

    tracing::info!(moves = summary.moves, score = summary.score, "script finished");
    Ok(summary)
}
