//! Terminal rendering module.
//!
//! The external renderer collaborator: consumes the board's drawable cells
//! and draws them into a framebuffer that is flushed to the terminal.
//!
//! - [`fb`]: glyph framebuffer
//! - [`board_view`]: pure board-to-framebuffer projection (no I/O)
//! - [`renderer`]: crossterm backend with diff redraws

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tetromino_core as core;
pub use tetromino_types as types;

pub use board_view::{color_rgb, BoardView, Viewport};
pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use renderer::{encode_diff, encode_enter, encode_exit, encode_full, TerminalRenderer};
