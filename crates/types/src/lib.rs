//! Shared types - piece kinds, cell colors, intents and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation core, the input layer and the terminal front end alike.
//!
//! # Board Geometry
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, bottom to top)
//! - **Origin**: bottom-left; the row index increases upward
//! - **Spawn pivot**: (`width / 2`, `height - 1`)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `MOVE_INTERVAL_MS` | 100 | Minimum gap between accepted lateral/rotate/drop moves |
//! | `AUTO_DROP_INTERVAL_MS` | 500 | Gravity interval |
//!
//! # Examples
//!
//! ```
//! use tetromino_types::{Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Intent::from_str("up"), Some(Intent::Up));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Minimum interval between accepted lateral, rotation and soft-drop moves
pub const MOVE_INTERVAL_MS: u32 = 100;

/// Gravity interval: one forced drop attempt per 500ms
pub const AUTO_DROP_INTERVAL_MS: u32 = 500;

/// The seven tetromino piece kinds
///
/// Declaration order matches the spawn offset table in `tetromino-core`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    S,
    Z,
    L,
    J,
    T,
}

impl PieceKind {
    /// Every kind, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("l"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("tt"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::T => "t",
        }
    }

    /// Index into [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Colors emitted by the drawable-cell query
///
/// - **Red**: reserved for per-kind coloring, never emitted today
/// - **Green**: settled cells
/// - **Blue**: cells of the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Red,
    Green,
    Blue,
}

/// Discrete input intents consumed by the core
///
/// The external input collaborator translates raw key events into
/// press/release of one of these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move the falling piece one column left
    Left,
    /// Move the falling piece one column right
    Right,
    /// Soft drop: one row down, settling when blocked
    Down,
    /// Rotate clockwise (one rotation per press)
    Up,
}

impl Intent {
    /// Every intent, in declaration order.
    pub const ALL: [Intent; 4] = [Intent::Left, Intent::Right, Intent::Down, Intent::Up];

    /// Parse intent from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetromino_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("Left"), Some(Intent::Left));
    /// assert_eq!(Intent::from_str("rotate"), Some(Intent::Up));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Intent::Left),
            "right" => Some(Intent::Right),
            "down" => Some(Intent::Down),
            "up" | "rotate" => Some(Intent::Up),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Left => "left",
            Intent::Right => "right",
            Intent::Down => "down",
            Intent::Up => "up",
        }
    }

    /// Index into [`Intent::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Whether an intent event is the key going down or coming up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentEdge {
    Press,
    Release,
}

/// A single input-boundary event: one of the 4 intents × {press, release}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentEvent {
    pub intent: Intent,
    pub edge: IntentEdge,
}

impl IntentEvent {
    pub fn press(intent: Intent) -> Self {
        Self {
            intent,
            edge: IntentEdge::Press,
        }
    }

    pub fn release(intent: Intent) -> Self {
        Self {
            intent,
            edge: IntentEdge::Release,
        }
    }
}
