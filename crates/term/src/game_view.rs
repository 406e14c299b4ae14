//! GameView: maps a board snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::Palette;
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render into an existing framebuffer (reused across frames).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let well_w = (FIELD_WIDTH as u16) * self.cell_w;
        let well_h = (FIELD_HEIGHT as u16) * self.cell_h;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h, border);

        for row in 0..FIELD_HEIGHT as usize {
            for col in 0..FIELD_WIDTH as usize {
                let index = snap.color_at(row, col);
                let (ch, style) = if index == 0 {
                    ('·', CellStyle::new(Rgb::new(90, 90, 100), WELL_BG))
                } else {
                    ('█', CellStyle::new(self.palette.color(index), WELL_BG).bold())
                };
                let px = origin_x + 1 + (col as u16) * self.cell_w;
                let py = origin_y + 1 + (row as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if snap.game_over {
            let style = CellStyle::new(Rgb::new(255, 90, 90), Rgb::new(0, 0, 0)).bold();
            let mid_y = origin_y + frame_h / 2;
            self.draw_centered(fb, origin_x, frame_w, mid_y.saturating_sub(1), "GAME OVER", style);
            self.draw_centered(fb, origin_x, frame_w, mid_y + 1, "UP: restart", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if viewport.width.saturating_sub(panel_x) < 8 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = top;
        let stats = [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)];
        for (name, number) in stats {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }
    }

    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        frame_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = frame_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_renders_dotted_well() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        assert_eq!(fb.get(1, 1).unwrap().ch, '·');
        assert_eq!(fb.get(20, 20).unwrap().ch, '·');
    }

    #[test]
    fn filled_cell_uses_palette_color() {
        let mut snap = GameSnapshot::default();
        snap.board[19][9] = 4;

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(22, 22));
        let cell = fb.get(1 + 9 * 2, 1 + 19).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, view.palette().color(4));
    }
}
