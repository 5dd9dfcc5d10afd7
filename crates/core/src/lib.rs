//! Core game logic module - pure, deterministic, and testable
//!
//! This crate owns the falling-block simulation: the playfield, the falling
//! piece, collision, line clears and the time gates on every move. It has
//! **zero dependencies** on terminals, windowing or input devices:
//!
//! - **Deterministic**: the same seed and the same timestamps replay the same game
//! - **Time-injected**: every timed operation takes a monotonic `Instant`
//! - **Portable**: renderers only see [`render::DrawCell`] triples
//!
//! # Module Structure
//!
//! - [`board`]: grid, active piece, collision, settling and line clears
//! - [`piece`]: the seven shapes and their 90° rotation
//! - [`rng`]: seeded uniform piece selection
//! - [`render`]: drawable-cell projection for external renderers
//! - [`config`]: runtime dimensions, intervals and seed
//!
//! # Rules
//!
//! - Moves, rotations and soft drops are accepted at most once per 100ms
//! - Gravity attempts a drop every 500ms, ignoring the move throttle
//! - Rotation is a single in-place test with exact rollback (no wall kicks)
//! - A piece that cannot fall settles, full rows clear, a new piece spawns
//! - A spawn that overlaps settled cells ends the game
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use tetromino_core::{Board, DropOutcome, MoveOutcome};
//!
//! let t0 = Instant::now();
//! let mut board = Board::new(12345);
//!
//! assert_eq!(board.move_left(t0), MoveOutcome::Applied);
//! // Too soon after the last move.
//! assert_eq!(board.move_right(t0 + Duration::from_millis(40)), MoveOutcome::Throttled);
//! assert_eq!(board.soft_drop(t0 + Duration::from_millis(100)), DropOutcome::Fell);
//!
//! // 4 falling cells, none settled yet.
//! assert_eq!(board.drawable_cells().count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod piece;
pub mod render;
pub mod rng;

pub use tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardStatus, DropOutcome, MoveOutcome, SettleEvent};
pub use config::{BoardConfig, ConfigError};
pub use piece::{spawn_cells, CellOffset, Piece, PieceCells};
pub use render::{DrawCell, DrawableCells, ACTIVE_COLOR, SETTLED_COLOR};
pub use rng::PieceRng;
