//! Terminal input handler.
//!
//! Feeds key events into an [`InputIntentTracker`]. Many terminals never
//! emit key-release events; for those a held intent is released once no
//! press for it has arrived within a timeout. The first real release event
//! switches the timeout off.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;

use crate::core::Board;
use crate::map::handle_key_event;
use crate::tracker::{InputIntentTracker, Resolution};
use crate::types::{Intent, IntentEdge, IntentEvent};

// Long enough to bridge the gap between terminal auto-repeat presses, short
// enough that a single tap does not turn into a sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone)]
pub struct InputHandler {
    tracker: InputIntentTracker,
    last_press: [Option<Instant>; 4],
    key_release_timeout: Duration,
    release_events_seen: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            tracker: InputIntentTracker::new(),
            last_press: [None; 4],
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.key_release_timeout = timeout;
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    pub fn tracker(&self) -> &InputIntentTracker {
        &self.tracker
    }

    /// Map and apply a key event. Returns the intent event it produced
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<IntentEvent> {
        let event = handle_key_event(key)?;
        self.handle_intent(event, now);
        Some(event)
    }

    pub fn handle_intent(&mut self, event: IntentEvent, now: Instant) {
        match event.edge {
            IntentEdge::Press => {
                self.last_press[event.intent.index()] = Some(now);
            }
            IntentEdge::Release => {
                self.release_events_seen = true;
                self.last_press[event.intent.index()] = None;
            }
        }
        self.tracker.apply(event);
    }

    /// Release intents whose last press is older than the timeout
    pub fn expire_stale(&mut self, now: Instant) {
        if self.release_events_seen {
            return;
        }
        for intent in Intent::ALL {
            let stale = match self.last_press[intent.index()] {
                Some(t) => now.saturating_duration_since(t) > self.key_release_timeout,
                None => false,
            };
            if stale {
                self.last_press[intent.index()] = None;
                self.tracker.release(intent);
            }
        }
    }

    /// Expire stale holds, then resolve the held intents against `board`
    pub fn update(&mut self, board: &mut Board, now: Instant) -> ArrayVec<Resolution, 4> {
        self.expire_stale(now);
        self.tracker.resolve(board, now)
    }

    pub fn reset(&mut self) {
        self.tracker.release_all();
        self.last_press = [None; 4];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
