//! Board module - playfield, falling piece, collision and line clears
//!
//! The board is a `width` x `height` grid of booleans (canonical 10x20) stored
//! as a flat row-major array. Coordinates are `(x, y)` with the origin at the
//! bottom-left: x grows to the right, y grows upward, row 0 is the floor.
//!
//! New pieces spawn with their pivot at `(width / 2, height - 1)`. Cells above
//! the top row are legal while falling and are dropped when a piece settles.
//!
//! Every mutating operation takes the current monotonic time. Moves are
//! rejected while less than `move_interval` has passed since the last
//! accepted move; gravity fires once more than `auto_drop_interval` has passed
//! since the last gravity drop.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{BoardConfig, ConfigError};
use crate::piece::{Piece, PieceCells};
use crate::render::DrawableCells;
use crate::rng::PieceRng;
use crate::types::PieceKind;

/// Lifecycle of the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    /// A piece is falling and accepts moves
    Falling,
    /// The last spawn overlapped settled cells; only [`Board::reset`] recovers
    GameOver,
}

/// Result of a lateral move or rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was committed
    Applied,
    /// The move would leave the board or overlap settled cells
    Collided,
    /// Requested before the move interval elapsed; nothing changed
    Throttled,
    /// The board is in game over
    Halted,
}

impl MoveOutcome {
    pub fn applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// Result of a soft-drop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece could not fall; it was merged into the grid and a new one spawned
    Settled { lines_cleared: u32 },
    /// Requested before the move interval elapsed; nothing changed
    Throttled,
    /// The board is in game over
    Halted,
}

/// Emitted each time a piece settles.
///
/// Consumed by observers such as an external scoring collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
}

/// The game board and its falling piece
#[derive(Debug, Clone)]
pub struct Board {
    width: u8,
    height: u8,
    move_interval: Duration,
    auto_drop_interval: Duration,
    /// Flat array of cells, row-major order (y * width + x), row 0 at the bottom
    occupancy: Vec<bool>,
    active: Piece,
    /// Pivot of the active piece
    position: (i8, i8),
    last_move: Option<Instant>,
    last_auto_drop: Option<Instant>,
    status: BoardStatus,
    rng: PieceRng,
    lines_cleared: u32,
    pieces_settled: u32,
    last_event: Option<SettleEvent>,
}

impl Board {
    /// Create a canonical 10x20 board whose pieces follow `seed`
    pub fn new(seed: u64) -> Self {
        Self::from_valid_config(BoardConfig::default().with_seed(seed))
    }

    /// Create a board from a runtime configuration
    pub fn with_config(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: BoardConfig) -> Self {
        let mut rng = config
            .seed
            .map(PieceRng::new)
            .unwrap_or_else(PieceRng::from_entropy);
        let first = Piece::random(&mut rng);
        let cells = (config.width as usize) * (config.height as usize);

        let mut board = Self {
            width: config.width,
            height: config.height,
            move_interval: config.move_interval,
            auto_drop_interval: config.auto_drop_interval,
            occupancy: vec![false; cells],
            active: first,
            position: (0, 0),
            last_move: None,
            last_auto_drop: None,
            status: BoardStatus::Falling,
            rng,
            lines_cleared: 0,
            pieces_settled: 0,
            last_event: None,
        };
        board.spawn(first);
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn status(&self) -> BoardStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == BoardStatus::GameOver
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// Pivot of the active piece
    pub fn position(&self) -> (i8, i8) {
        self.position
    }

    pub fn spawn_position(&self) -> (i8, i8) {
        ((self.width / 2) as i8, self.height as i8 - 1)
    }

    /// Active piece cells in board coordinates
    pub fn active_cells(&self) -> PieceCells {
        self.active.cells_at(self.position.0, self.position.1)
    }

    pub fn last_move_time(&self) -> Option<Instant> {
        self.last_move
    }

    pub fn last_auto_drop_time(&self) -> Option<Instant> {
        self.last_auto_drop
    }

    /// Total rows cleared since construction or the last reset
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_settled(&self) -> u32 {
        self.pieces_settled
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether `(x, y)` is a filled cell; out of bounds reads as empty
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        self.index(x, y).is_some_and(|idx| self.occupancy[idx])
    }

    /// Set a settled cell. Returns false if out of bounds
    pub fn set_cell(&mut self, x: i8, y: i8, filled: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.occupancy[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.occupancy[y * width..(y + 1) * width])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&filled| filled))
    }

    /// Flat row-major occupancy, row 0 first
    pub fn occupancy(&self) -> &[bool] {
        &self.occupancy
    }

    /// Would the active piece collide if shifted by `(dx, dy)`
    ///
    /// Cells above the top row are only checked against the side walls.
    pub fn collides(&self, (dx, dy): (i8, i8)) -> bool {
        let (px, py) = self.position;
        self.active
            .cells_at(px + dx, py + dy)
            .iter()
            .any(|&(x, y)| {
                x < 0
                    || x >= self.width as i8
                    || y < 0
                    || (y < self.height as i8 && self.is_filled(x, y))
            })
    }

    fn move_too_fast(&self, now: Instant) -> bool {
        match self.last_move {
            Some(t) => now.saturating_duration_since(t) < self.move_interval,
            None => false,
        }
    }

    fn auto_drop_due(&self, now: Instant) -> bool {
        match self.last_auto_drop {
            Some(t) => now.saturating_duration_since(t) > self.auto_drop_interval,
            None => true,
        }
    }

    pub fn move_left(&mut self, now: Instant) -> MoveOutcome {
        self.try_shift(-1, now)
    }

    pub fn move_right(&mut self, now: Instant) -> MoveOutcome {
        self.try_shift(1, now)
    }

    fn try_shift(&mut self, dx: i8, now: Instant) -> MoveOutcome {
        if self.is_game_over() {
            return MoveOutcome::Halted;
        }
        if self.move_too_fast(now) {
            return MoveOutcome::Throttled;
        }
        if self.collides((dx, 0)) {
            return MoveOutcome::Collided;
        }

        self.position.0 += dx;
        self.last_move = Some(now);
        MoveOutcome::Applied
    }

    /// Move the piece down one row, or settle it when it cannot fall
    pub fn soft_drop(&mut self, now: Instant) -> DropOutcome {
        if self.is_game_over() {
            return DropOutcome::Halted;
        }
        if self.move_too_fast(now) {
            return DropOutcome::Throttled;
        }

        if !self.collides((0, -1)) {
            self.position.1 -= 1;
            self.last_move = Some(now);
            if self.auto_drop_due(now) {
                self.last_auto_drop = Some(now);
            }
            return DropOutcome::Fell;
        }

        let lines_cleared = self.settle();
        DropOutcome::Settled { lines_cleared }
    }

    pub fn rotate_cw(&mut self, now: Instant) -> MoveOutcome {
        self.try_rotate(true, now)
    }

    pub fn rotate_ccw(&mut self, now: Instant) -> MoveOutcome {
        self.try_rotate(false, now)
    }

    /// Rotate in place; on collision apply the inverse rotation
    fn try_rotate(&mut self, clockwise: bool, now: Instant) -> MoveOutcome {
        if self.is_game_over() {
            return MoveOutcome::Halted;
        }
        if self.move_too_fast(now) {
            return MoveOutcome::Throttled;
        }

        if clockwise {
            self.active.rotate_cw();
        } else {
            self.active.rotate_ccw();
        }

        if self.collides((0, 0)) {
            if clockwise {
                self.active.rotate_ccw();
            } else {
                self.active.rotate_cw();
            }
            return MoveOutcome::Collided;
        }

        self.last_move = Some(now);
        MoveOutcome::Applied
    }

    /// Gravity: once the auto-drop interval has elapsed, force a soft drop
    ///
    /// The move throttle is cleared before the drop so gravity is never
    /// blocked by recent input. Returns `None` when gravity is not due.
    pub fn auto_tick(&mut self, now: Instant) -> Option<DropOutcome> {
        if self.is_game_over() || !self.auto_drop_due(now) {
            return None;
        }
        self.last_move = None;
        Some(self.soft_drop(now))
    }

    /// Merge the active piece, clear lines and spawn the next piece
    fn settle(&mut self) -> u32 {
        let kind = self.active.kind();
        for (x, y) in self.active_cells() {
            // Cells above the top row are dropped.
            self.set_cell(x, y, true);
        }

        let lines_cleared = self.clear_completed_lines();
        self.lines_cleared += lines_cleared;
        self.pieces_settled += 1;
        self.last_event = Some(SettleEvent {
            kind,
            lines_cleared,
        });
        debug!(
            kind = kind.as_str(),
            x = self.position.0,
            y = self.position.1,
            lines_cleared,
            "piece settled"
        );

        let next = Piece::random(&mut self.rng);
        self.spawn(next);
        lines_cleared
    }

    /// Remove full rows, shifting everything above down. Returns the count
    ///
    /// Rows are scanned bottom to top; after a clear the same row index is
    /// examined again because a new row has moved into it. The top row is
    /// emptied on every shift.
    pub fn clear_completed_lines(&mut self) -> u32 {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut y = 0;

        while y < height {
            if !self.is_row_full(y) {
                y += 1;
                continue;
            }
            cleared += 1;
            self.occupancy
                .copy_within((y + 1) * width..height * width, y * width);
            self.occupancy[(height - 1) * width..].fill(false);
        }

        if cleared > 0 {
            debug!(cleared, "lines cleared");
        }
        cleared
    }

    /// Replace the active piece with `piece` at the spawn position
    ///
    /// Returns false, entering game over, when the spawned piece overlaps
    /// settled cells. Refused outright while already in game over.
    pub fn spawn(&mut self, piece: Piece) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.active = piece;
        self.position = self.spawn_position();

        if self.collides((0, 0)) {
            self.status = BoardStatus::GameOver;
            info!(
                kind = piece.kind().as_str(),
                pieces_settled = self.pieces_settled,
                lines_cleared = self.lines_cleared,
                "spawn blocked, game over"
            );
            return false;
        }

        debug!(kind = piece.kind().as_str(), "piece spawned");
        true
    }

    /// Take and clear the last settle event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    /// Empty the grid, zero counters and timers, and spawn a fresh piece
    ///
    /// The piece generator keeps its position in the sequence.
    pub fn reset(&mut self) {
        self.occupancy.fill(false);
        self.status = BoardStatus::Falling;
        self.last_move = None;
        self.last_auto_drop = None;
        self.lines_cleared = 0;
        self.pieces_settled = 0;
        self.last_event = None;

        let next = Piece::random(&mut self.rng);
        self.spawn(next);
        info!(seed = self.rng.seed(), "board reset");
    }

    /// Settled cells followed by the active piece, for an external renderer
    pub fn drawable_cells(&self) -> DrawableCells<'_> {
        DrawableCells::new(
            &self.occupancy,
            self.width,
            self.height,
            Some(self.active_cells()),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_valid_config(BoardConfig::default())
    }
}
