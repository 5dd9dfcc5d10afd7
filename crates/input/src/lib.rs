//! Input module (engine-facing).
//!
//! Converts key events into the four discrete intents and resolves held
//! intents into board operations once per tick. The [`InputIntentTracker`]
//! is framework-independent; [`map`] and [`InputHandler`] adapt `crossterm`
//! key events, including terminals without key-release events.

pub mod handler;
pub mod map;
pub mod tracker;

pub use tetromino_core as core;
pub use tetromino_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, intent_for_key, should_quit, should_restart};
pub use tracker::{InputIntentTracker, IntentOutcome, Resolution};
