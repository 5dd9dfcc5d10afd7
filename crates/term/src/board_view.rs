//! BoardView: maps a `core::Board` into a terminal framebuffer.
//!
//! Pure (no I/O). The board's row 0 is the floor, so rows are flipped: board
//! row `y` lands on screen row `height - 1 - y` inside the frame.

use crate::core::Board;
use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};
use crate::types::CellColor;

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Minimum free columns right of the frame before the side panel is drawn.
const PANEL_MIN_WIDTH: u16 = 12;

pub fn color_rgb(color: CellColor) -> Rgb {
    match color {
        CellColor::Red => Rgb::new(220, 80, 80),
        CellColor::Green => Rgb::new(100, 220, 120),
        CellColor::Blue => Rgb::new(80, 120, 220),
    }
}

/// Terminal renderer for one board.
#[derive(Debug, Clone)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Top-left corner of the framed playfield.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Frame size including the border.
    pub fn frame_size(&self, board: &Board) -> (u16, u16) {
        (
            board.width() as u16 * self.cell_w + 2,
            board.height() as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, board: &Board, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(board);
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).glyph('·'),
        );
        draw_border(fb, origin, frame_w, frame_h);

        for cell in board.drawable_cells() {
            let style = CellStyle::new(color_rgb(cell.color), PLAYFIELD_BG).bold();
            self.fill_cell(fb, board, origin, cell.col, cell.row, style.glyph('█'));
        }

        self.draw_side_panel(fb, board, viewport, origin, frame_w);

        if board.is_game_over() {
            draw_centered(fb, origin, frame_w, frame_h / 2, "GAME OVER");
            draw_centered(fb, origin, frame_w, frame_h / 2 + 1, "r restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        board: &Board,
        origin: Origin,
        col: u8,
        row: u8,
        glyph: Glyph,
    ) {
        let flipped = (board.height() - 1 - row) as u16;
        let px = origin.x + 1 + col as u16 * self.cell_w;
        let py = origin.y + 1 + flipped * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        board: &Board,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let x = origin.x.saturating_add(frame_w).saturating_add(2);
        if x >= viewport.width || viewport.width - x < PANEL_MIN_WIDTH {
            return;
        }

        let mut y = origin.y;
        fb.put_str(x, y, "LINES", LABEL);
        fb.put_u32(x, y + 1, board.lines_cleared(), VALUE);
        y += 3;

        fb.put_str(x, y, "PIECES", LABEL);
        fb.put_u32(x, y + 1, board.pieces_settled(), VALUE);
        y += 3;

        fb.put_str(x, y, "KEYS", LABEL);
        fb.put_str(x, y + 1, "←→ move", VALUE);
        fb.put_str(x, y + 2, "↓  drop", VALUE);
        fb.put_str(x, y + 3, "↑  rotate", VALUE);
        fb.put_str(x, y + 4, "q  quit", VALUE);
    }
}

fn draw_border(fb: &mut FrameBuffer, origin: Origin, w: u16, h: u16) {
    let Origin { x, y } = origin;
    fb.put(x, y, BORDER.glyph('┌'));
    fb.put(x + w - 1, y, BORDER.glyph('┐'));
    fb.put(x, y + h - 1, BORDER.glyph('└'));
    fb.put(x + w - 1, y + h - 1, BORDER.glyph('┘'));

    for dx in 1..w - 1 {
        fb.put(x + dx, y, BORDER.glyph('─'));
        fb.put(x + dx, y + h - 1, BORDER.glyph('─'));
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, BORDER.glyph('│'));
        fb.put(x + w - 1, y + dy, BORDER.glyph('│'));
    }
}

fn draw_centered(fb: &mut FrameBuffer, origin: Origin, frame_w: u16, dy: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = origin.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, origin.y.saturating_add(dy), text, style);
}
