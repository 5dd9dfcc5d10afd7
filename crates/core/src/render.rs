//! Render query - the board as a sequence of colored cells
//!
//! Pure read-only projection for an external renderer. Settled cells come
//! first in row-major order from the bottom row, followed by the active
//! piece. Anything outside the visible grid is skipped.

use crate::piece::PieceCells;
use crate::types::CellColor;

/// Color of every settled cell
pub const SETTLED_COLOR: CellColor = CellColor::Green;

/// Color of every cell of the falling piece
pub const ACTIVE_COLOR: CellColor = CellColor::Blue;

/// One cell to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawCell {
    pub col: u8,
    pub row: u8,
    pub color: CellColor,
}

/// Lazy iterator over the drawable cells of a board
///
/// Borrowing iterator; call [`crate::Board::drawable_cells`] again to restart.
#[derive(Debug, Clone)]
pub struct DrawableCells<'a> {
    occupancy: &'a [bool],
    width: u8,
    height: u8,
    next_settled: usize,
    active: Option<PieceCells>,
    next_active: usize,
}

impl<'a> DrawableCells<'a> {
    /// `occupancy` is row-major, `width * height` long, row 0 first
    pub fn new(
        occupancy: &'a [bool],
        width: u8,
        height: u8,
        active: Option<PieceCells>,
    ) -> Self {
        debug_assert_eq!(occupancy.len(), width as usize * height as usize);
        Self {
            occupancy,
            width,
            height,
            next_settled: 0,
            active,
            next_active: 0,
        }
    }
}

impl Iterator for DrawableCells<'_> {
    type Item = DrawCell;

    fn next(&mut self) -> Option<DrawCell> {
        let width = self.width as usize;
        while self.next_settled < self.occupancy.len() {
            let idx = self.next_settled;
            self.next_settled += 1;
            if self.occupancy[idx] {
                return Some(DrawCell {
                    col: (idx % width) as u8,
                    row: (idx / width) as u8,
                    color: SETTLED_COLOR,
                });
            }
        }

        let active = self.active?;
        while self.next_active < active.len() {
            let (x, y) = active[self.next_active];
            self.next_active += 1;
            if x >= 0 && x < self.width as i8 && y >= 0 && y < self.height as i8 {
                return Some(DrawCell {
                    col: x as u8,
                    row: y as u8,
                    color: ACTIVE_COLOR,
                });
            }
        }

        None
    }
}
