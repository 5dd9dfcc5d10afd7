//! Pieces module - tetromino shapes and 90° rotation
//!
//! Each piece is four cell offsets relative to a pivot, y pointing up.
//! Rotation transforms every offset independently:
//!
//! - clockwise: `(x, y) -> (y, -x)`
//! - counter-clockwise: `(x, y) -> (-y, x)`
//!
//! The O piece never rotates. There are no wall kicks; the board tests a
//! rotated piece in place and rolls back on collision.

use crate::rng::PieceRng;
use crate::types::PieceKind;

/// Offset of a single cell relative to the piece pivot
pub type CellOffset = (i8, i8);

/// The four cell offsets of a piece
pub type PieceCells = [CellOffset; 4];

/// Spawn orientation of every kind, indexed by [`PieceKind::index`].
const SPAWN_CELLS: [PieceCells; 7] = [
    // O
    [(-1, 0), (0, 0), (-1, -1), (0, -1)],
    // I
    [(-2, 0), (-1, 0), (0, 0), (1, 0)],
    // S
    [(-1, -1), (0, -1), (0, 0), (1, 0)],
    // Z
    [(-1, 0), (0, -1), (0, 0), (1, 0)],
    // L
    [(-1, -1), (-1, 0), (0, 0), (1, 0)],
    // J
    [(-1, 0), (0, 0), (1, 0), (1, -1)],
    // T
    [(-1, 0), (0, 0), (1, 0), (0, -1)],
];

/// Get the spawn orientation offsets for a kind
///
/// Returns a copy; the table itself is never mutated.
pub fn spawn_cells(kind: PieceKind) -> PieceCells {
    SPAWN_CELLS[kind.index()]
}

/// A falling piece: its kind and current offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    cells: PieceCells,
}

impl Piece {
    /// Create a piece of the given kind in spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            cells: spawn_cells(kind),
        }
    }

    /// Create a piece of a uniformly random kind
    pub fn random(rng: &mut PieceRng) -> Self {
        Self::new(rng.draw())
    }

    /// Create a piece of `kind`, or of a random kind when `None`
    pub fn create(kind: Option<PieceKind>, rng: &mut PieceRng) -> Self {
        match kind {
            Some(kind) => Self::new(kind),
            None => Self::random(rng),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Snapshot of the current offsets
    pub fn current_cells(&self) -> PieceCells {
        self.cells
    }

    pub fn rotates(&self) -> bool {
        self.kind != PieceKind::O
    }

    /// Rotate 90° clockwise in place (no-op for O)
    pub fn rotate_cw(&mut self) {
        if !self.rotates() {
            return;
        }
        for cell in &mut self.cells {
            *cell = (cell.1, -cell.0);
        }
    }

    /// Rotate 90° counter-clockwise in place (no-op for O)
    pub fn rotate_ccw(&mut self) {
        if !self.rotates() {
            return;
        }
        for cell in &mut self.cells {
            *cell = (-cell.1, cell.0);
        }
    }

    /// Offsets translated to absolute coordinates around pivot `(x, y)`
    pub fn cells_at(&self, x: i8, y: i8) -> PieceCells {
        self.cells.map(|(dx, dy)| (x + dx, y + dy))
    }
}
