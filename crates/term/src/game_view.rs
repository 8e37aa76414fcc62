//! GameView: maps a core [`GridSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Only the twenty visible board rows are drawn; the hidden sentinel row
//! above them never reaches the screen, even when the stack or the active
//! piece occupies it.

use crate::core::GridSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BlockColor, BOARD_HEIGHT, BOARD_WIDTH, VISIBLE_ROWS};

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

/// Driver-owned state the view displays but the core knows nothing about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView<'a> {
    pub paused: bool,
    pub message: Option<&'a str>,
}

/// A lightweight terminal renderer for the falling-block board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only pay for a resize when the terminal changes.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_with_status(snap, None, viewport, fb);
    }

    pub fn render_with_status(
        &self,
        snap: &GridSnapshot,
        status: Option<&StatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::default(),
        });

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (VISIBLE_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Play area background, then the frame around it.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, visible rows only.
        for vy in 0..VISIBLE_ROWS as u16 {
            let by = (vy + 1) as usize;
            for x in 0..BOARD_WIDTH as u16 {
                match snap.board[by][x as usize] {
                    Some(color) => {
                        self.draw_board_cell(fb, start_x, start_y, x, vy, block_rgb(color));
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x, vy),
                }
            }
        }

        // Active piece, clipped to the visible window.
        let active_rgb = block_rgb(snap.active.color);
        for &(x, y) in snap.active.cells().iter() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 1 && y < BOARD_HEIGHT as i8 {
                self.draw_board_cell(fb, start_x, start_y, x as u16, (y - 1) as u16, active_rgb);
            }
        }

        // Side panel: score, level, stage, reward table, status message.
        self.draw_side_panel(fb, snap, status, viewport, start_x, start_y, frame_w);

        // Overlays.
        let paused = status.map(|s| s.paused).unwrap_or(false);
        if paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        fg: Rgb,
    ) {
        let style = CellStyle {
            fg,
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        status: Option<&StatusView>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.difficulty, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STAGE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.stage, value);
        fb.put_str(panel_x + 3, y, "/ 20", dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "REWARDS", label);
        y = y.saturating_add(1);
        for (lines, reward) in snap.rewards.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            fb.put_u32(panel_x, y, lines as u32, dim);
            fb.put_u32(panel_x + 3, y, *reward, value);
            y = y.saturating_add(1);
        }

        if let Some(message) = status.and_then(|s| s.message) {
            y = y.saturating_add(1);
            if y < viewport.height {
                fb.put_str(panel_x, y, message, label);
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Terminal palette for the seven block colors.
fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Cyan => Rgb::new(80, 220, 220),
        BlockColor::Yellow => Rgb::new(240, 220, 80),
        BlockColor::Purple => Rgb::new(200, 120, 220),
        BlockColor::Green => Rgb::new(100, 220, 120),
        BlockColor::Red => Rgb::new(220, 80, 80),
        BlockColor::Blue => Rgb::new(80, 120, 220),
        BlockColor::Orange => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let snap = GridSnapshot::default();
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into(&snap, Viewport::new(10, 5), &mut fb);
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }

    #[test]
    fn test_palette_is_distinct_per_color() {
        let colors = [
            BlockColor::Blue,
            BlockColor::Cyan,
            BlockColor::Green,
            BlockColor::Orange,
            BlockColor::Purple,
            BlockColor::Red,
            BlockColor::Yellow,
        ];
        for a in colors {
            for b in colors {
                if a != b {
                    assert_ne!(block_rgb(a), block_rgb(b));
                }
            }
        }
    }
}
