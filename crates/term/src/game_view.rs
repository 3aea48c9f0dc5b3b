//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const BOARD_BG: Rgb = Rgb::new(60, 56, 52);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Rows above the board frame (title line + spacer).
const HEADER_H: u16 = 2;
/// Rows below the board frame (spacer + help line).
const FOOTER_H: u16 = 2;

const HELP: &str = "arrows/wasd/hjkl tilt  r restart  q quit";

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for six-digit values and roughly square tiles.
        Self {
            tile_w: 7,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Render the game into an existing framebuffer, resizing it to the
    /// viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(LIGHT_TEXT, BACKGROUND).into_cell(' '));

        let size = snap.size as u16;
        let frame_w = size * self.tile_w + 2;
        let frame_h = size * self.tile_h + 2;
        let total_h = HEADER_H + frame_h + FOOTER_H;

        if viewport.width < frame_w || viewport.height < total_h {
            let style = CellStyle::new(LIGHT_TEXT, BACKGROUND).bold();
            fb.put_str_centered(0, viewport.height / 2, viewport.width, "terminal too small", style);
            return;
        }

        let start_x = (viewport.width - frame_w) / 2;
        let start_y = (viewport.height - total_h) / 2;
        let frame_y = start_y + HEADER_H;

        self.draw_header(fb, snap, start_x, start_y, frame_w);

        fb.fill_rect(start_x, frame_y, frame_w, frame_h, ' ', CellStyle::new(LIGHT_TEXT, BOARD_BG));
        self.draw_border(fb, start_x, frame_y, frame_w, frame_h);

        for row in 0..size {
            for col in 0..size {
                let value = snap.value(col as usize, row as usize);
                // Row 0 is the bottom of the board and the bottom of the screen.
                let px = start_x + 1 + col * self.tile_w;
                let py = frame_y + 1 + (size - 1 - row) * self.tile_h;
                self.draw_tile(fb, px, py, value);
            }
        }

        let help = CellStyle::new(DARK_TEXT, BACKGROUND);
        fb.put_str_centered(0, frame_y + frame_h + 1, viewport.width, HELP, help);

        if snap.game_over {
            let text = if snap.won() { " YOU WIN! " } else { " GAME OVER " };
            self.draw_overlay(fb, start_x, frame_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16, w: u16) {
        let title = CellStyle::new(Rgb::new(237, 194, 46), BACKGROUND).bold();
        fb.put_str(x, y, &snap.max_piece.to_string(), title);

        let stats = format!("score {}  best {}", snap.score, snap.max_score);
        let len = stats.chars().count() as u16;
        fb.put_str(
            (x + w).saturating_sub(len),
            y,
            &stats,
            CellStyle::new(LIGHT_TEXT, BACKGROUND),
        );
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(187, 173, 160), BOARD_BG);
        let right = x + w - 1;
        let bottom = y + h - 1;

        for dx in 1..w - 1 {
            fb.put_str(x + dx, y, "─", style);
            fb.put_str(x + dx, bottom, "─", style);
        }
        for dy in 1..h - 1 {
            fb.put_str(x, y + dy, "│", style);
            fb.put_str(right, y + dy, "│", style);
        }
        fb.put_str(x, y, "┌", style);
        fb.put_str(right, y, "┐", style);
        fb.put_str(x, bottom, "└", style);
        fb.put_str(right, bottom, "┘", style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let mid = y + self.tile_h / 2;
        if value == 0 {
            let style = CellStyle::new(Rgb::new(120, 110, 100), Rgb::new(80, 74, 68));
            fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
            fb.put_str_centered(x, mid, self.tile_w, "·", style);
            return;
        }

        let style = tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
        fb.put_str_centered(x, mid, self.tile_w, &value.to_string(), style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle::new(LIGHT_TEXT, BACKGROUND).bold();
        let mid_y = y + h / 2;
        fb.put_str_centered(x, mid_y, w, text, style);
        fb.put_str_centered(x, mid_y + 1, w, " r: new game ", CellStyle::new(LIGHT_TEXT, BACKGROUND));
    }
}

/// Colors for a tile, following the classic palette.
pub fn tile_style(value: u32) -> CellStyle {
    let (bg, fg) = match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    };
    CellStyle::new(fg, bg).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(board: Vec<Vec<u32>>, game_over: bool) -> GameSnapshot {
        GameSnapshot {
            size: board.len(),
            board,
            score: 12,
            max_score: 40,
            game_over,
            max_piece: 2048,
        }
    }

    fn all_text(fb: &FrameBuffer) -> Vec<String> {
        (0..fb.height()).map(|y| fb.row_text(y)).collect()
    }

    #[test]
    fn renders_values_with_bottom_row_last() {
        let snap = snapshot(
            vec![
                vec![2, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 1024],
            ],
            false,
        );
        let fb = GameView::default().render(&snap, Viewport::new(60, 30));
        let rows = all_text(&fb);

        let row_of = |needle: &str| rows.iter().position(|r| r.contains(needle)).unwrap();
        assert!(row_of("1024") < row_of("   2   "));
        assert!(rows.iter().any(|r| r.contains("score 12  best 40")));
        assert!(!rows.iter().any(|r| r.contains("GAME OVER")));
    }

    #[test]
    fn shows_game_over_banner() {
        let snap = snapshot(vec![vec![2, 4], vec![4, 2]], true);
        let fb = GameView::default().render(&snap, Viewport::new(40, 20));
        assert!(all_text(&fb).iter().any(|r| r.contains("GAME OVER")));
    }

    #[test]
    fn shows_win_banner() {
        let snap = snapshot(vec![vec![2048, 4], vec![4, 2]], true);
        let fb = GameView::default().render(&snap, Viewport::new(40, 20));
        assert!(all_text(&fb).iter().any(|r| r.contains("YOU WIN!")));
    }

    #[test]
    fn small_terminal_message() {
        let snap = snapshot(vec![vec![0; 4]; 4], false);
        let fb = GameView::default().render(&snap, Viewport::new(20, 5));
        assert!(all_text(&fb).iter().any(|r| r.contains("terminal too small")));
    }

    #[test]
    fn palette_distinguishes_small_tiles() {
        assert_ne!(tile_style(2), tile_style(4));
        assert_eq!(tile_style(8192), tile_style(16384));
    }
}
