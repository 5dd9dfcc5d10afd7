//! Tetromino (workspace facade crate).
//!
//! Re-exports the workspace crates under `crates/` as
//! `tetromino::{core,input,term,types}`.

pub use tetromino_core as core;
pub use tetromino_input as input;
pub use tetromino_term as term;
pub use tetromino_types as types;
