//! Held-intent tracker.
//!
//! Records which of the four intents are held and, once per tick, turns the
//! held set into board operations. The board's own move throttle does the
//! rate limiting, so holding a key repeats its move once per move interval.

use std::time::Instant;

use arrayvec::ArrayVec;

use crate::core::{Board, DropOutcome, MoveOutcome};
use crate::types::{Intent, IntentEdge, IntentEvent};

/// Rotation first, so a fresh press is tried before a held lateral key
/// takes the move slot.
const RESOLVE_ORDER: [Intent; 4] = [Intent::Up, Intent::Left, Intent::Right, Intent::Down];

/// What a resolved intent did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Move(MoveOutcome),
    Drop(DropOutcome),
}

/// One board operation triggered by [`InputIntentTracker::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub intent: Intent,
    pub outcome: IntentOutcome,
}

/// Per-instance map from intent to held state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputIntentTracker {
    held: [bool; 4],
}

impl InputIntentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, intent: Intent) {
        self.held[intent.index()] = true;
    }

    pub fn release(&mut self, intent: Intent) {
        self.held[intent.index()] = false;
    }

    /// Apply one input-boundary event
    pub fn apply(&mut self, event: IntentEvent) {
        match event.edge {
            IntentEdge::Press => self.press(event.intent),
            IntentEdge::Release => self.release(event.intent),
        }
    }

    pub fn is_held(&self, intent: Intent) -> bool {
        self.held[intent.index()]
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&held| held)
    }

    pub fn release_all(&mut self) {
        self.held = [false; 4];
    }

    /// Run the board operation of every held intent
    ///
    /// `Up` rotates clockwise and is released whatever the outcome, so one
    /// press gives at most one rotation. A press that lands inside the move
    /// interval is dropped.
    pub fn resolve(&mut self, board: &mut Board, now: Instant) -> ArrayVec<Resolution, 4> {
        let mut out = ArrayVec::new();

        for intent in RESOLVE_ORDER {
            if !self.is_held(intent) {
                continue;
            }

            let outcome = match intent {
                Intent::Left => IntentOutcome::Move(board.move_left(now)),
                Intent::Right => IntentOutcome::Move(board.move_right(now)),
                Intent::Down => IntentOutcome::Drop(board.soft_drop(now)),
                Intent::Up => {
                    self.release(Intent::Up);
                    IntentOutcome::Move(board.rotate_cw(now))
                }
            };

            out.push(Resolution { intent, outcome });
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;
    use crate::types::PieceKind;
    use std::time::Duration;

    fn board_with(kind: PieceKind) -> Board {
        let mut board = Board::new(1);
        board.spawn(Piece::new(kind));
        board
    }

    #[test]
    fn test_press_and_release() {
        let mut tracker = InputIntentTracker::new();
        assert!(!tracker.any_held());

        tracker.apply(IntentEvent::press(Intent::Left));
        assert!(tracker.is_held(Intent::Left));
        assert!(!tracker.is_held(Intent::Right));

        tracker.apply(IntentEvent::release(Intent::Left));
        assert!(!tracker.any_held());
    }

    #[test]
    fn test_nothing_held_resolves_nothing() {
        let mut tracker = InputIntentTracker::new();
        let mut board = board_with(PieceKind::T);
        let before = board.position();

        assert!(tracker.resolve(&mut board, Instant::now()).is_empty());
        assert_eq!(board.position(), before);
    }

    #[test]
    fn test_up_rotates_once_per_press() {
        let t0 = Instant::now();
        let mut tracker = InputIntentTracker::new();
        let mut board = board_with(PieceKind::T);
        let spawn = *board.active();

        tracker.press(Intent::Up);
        let first = tracker.resolve(&mut board, t0);
        assert_eq!(
            first.as_slice(),
            &[Resolution {
                intent: Intent::Up,
                outcome: IntentOutcome::Move(MoveOutcome::Applied),
            }]
        );
        assert!(!tracker.is_held(Intent::Up));

        // Holding the key longer does not rotate again.
        let later = tracker.resolve(&mut board, t0 + Duration::from_millis(500));
        assert!(later.is_empty());

        let mut once = spawn;
        once.rotate_cw();
        assert_eq!(*board.active(), once);
    }

    #[test]
    fn test_throttled_rotation_is_dropped() {
        let t0 = Instant::now();
        let mut tracker = InputIntentTracker::new();
        let mut board = board_with(PieceKind::T);

        assert_eq!(board.move_left(t0), MoveOutcome::Applied);
        let before = *board.active();

        tracker.press(Intent::Up);
        let early = tracker.resolve(&mut board, t0 + Duration::from_millis(16));
        assert_eq!(
            early[0].outcome,
            IntentOutcome::Move(MoveOutcome::Throttled)
        );
        assert!(!tracker.is_held(Intent::Up));

        let later = tracker.resolve(&mut board, t0 + Duration::from_millis(112));
        assert!(later.is_empty());
        assert_eq!(*board.active(), before);
    }

    #[test]
    fn test_held_left_repeats_at_move_interval() {
        let t0 = Instant::now();
        let mut tracker = InputIntentTracker::new();
        let mut board = board_with(PieceKind::T);

        tracker.press(Intent::Left);
        let mut applied = 0;
        // 16ms frames over 250ms: accepted at 0, 112 and 224.
        for frame in 0..16u64 {
            let now = t0 + Duration::from_millis(frame * 16);
            for r in tracker.resolve(&mut board, now) {
                if r.outcome == IntentOutcome::Move(MoveOutcome::Applied) {
                    applied += 1;
                }
            }
        }

        assert_eq!(applied, 3);
        assert_eq!(board.position(), (2, 19));
        assert!(tracker.is_held(Intent::Left));
    }

    #[test]
    fn test_held_down_settles_and_keeps_dropping() {
        let t0 = Instant::now();
        let mut tracker = InputIntentTracker::new();
        let mut board = board_with(PieceKind::I);

        tracker.press(Intent::Down);
        let mut settled = false;
        for step in 0..20u64 {
            let now = t0 + Duration::from_millis(step * 100);
            let res = tracker.resolve(&mut board, now);
            if let IntentOutcome::Drop(DropOutcome::Settled { .. }) = res[0].outcome {
                settled = true;
            }
        }

        assert!(settled);
        assert_eq!(board.pieces_settled(), 1);
        assert_eq!(board.row(0).unwrap().iter().filter(|&&c| c).count(), 4);
    }
}
