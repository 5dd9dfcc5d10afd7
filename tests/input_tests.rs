//! Input tests - key events through the handler into board moves

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tetromino::core::{Board, DropOutcome, MoveOutcome, Piece};
use tetromino::input::{
    should_quit, should_restart, InputHandler, InputIntentTracker, IntentOutcome,
};
use tetromino::types::{Intent, IntentEvent, PieceKind, TICK_MS};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

fn frame(t0: Instant, n: u64) -> Instant {
    t0 + Duration::from_millis(n * TICK_MS as u64)
}

fn board_with(kind: PieceKind) -> Board {
    let mut board = Board::new(21);
    assert!(board.spawn(Piece::new(kind)));
    board
}

#[test]
fn test_press_hold_release_moves_at_interval() {
    let t0 = Instant::now();
    let mut board = board_with(PieceKind::T);
    let mut input = InputHandler::new();

    input.handle_key(key(KeyCode::Right, KeyEventKind::Press), t0);
    // Frames 0..=7 cover 112ms: accepted at 0 and 112.
    for n in 0..=7 {
        input.update(&mut board, frame(t0, n));
    }
    assert_eq!(board.position(), (7, 19));

    input.handle_key(key(KeyCode::Right, KeyEventKind::Release), frame(t0, 8));
    for n in 8..40 {
        input.update(&mut board, frame(t0, n));
    }
    assert_eq!(board.position(), (7, 19));
}

#[test]
fn test_one_board_move_per_interval_across_intents() {
    let t0 = Instant::now();
    let mut board = board_with(PieceKind::T);
    let mut tracker = InputIntentTracker::new();

    tracker.apply(IntentEvent::press(Intent::Left));
    tracker.apply(IntentEvent::press(Intent::Down));

    let out = tracker.resolve(&mut board, t0);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].outcome, IntentOutcome::Move(MoveOutcome::Applied));
    assert_eq!(out[1].outcome, IntentOutcome::Drop(DropOutcome::Throttled));
    assert_eq!(board.position(), (4, 19));
}

#[test]
fn test_rotation_is_served_before_lateral_moves() {
    let t0 = Instant::now();
    let mut board = board_with(PieceKind::T);
    let mut tracker = InputIntentTracker::new();

    tracker.press(Intent::Left);
    tracker.press(Intent::Up);

    let out = tracker.resolve(&mut board, t0);
    assert_eq!(out[0].intent, Intent::Up);
    assert_eq!(out[0].outcome, IntentOutcome::Move(MoveOutcome::Applied));
    assert_eq!(out[1].outcome, IntentOutcome::Move(MoveOutcome::Throttled));
    assert_eq!(board.position(), (5, 19));
}

#[test]
fn test_rotation_pressed_inside_the_move_interval_is_dropped() {
    let t0 = Instant::now();
    let mut board = board_with(PieceKind::T);
    let mut tracker = InputIntentTracker::new();

    tracker.press(Intent::Left);
    tracker.resolve(&mut board, t0);
    tracker.press(Intent::Up);

    let mut rotations = Vec::new();
    for n in 1..20 {
        for r in tracker.resolve(&mut board, frame(t0, n)) {
            if r.intent == Intent::Up {
                rotations.push(r.outcome);
            }
        }
    }
    assert_eq!(rotations, vec![IntentOutcome::Move(MoveOutcome::Throttled)]);
    assert!(!tracker.is_held(Intent::Up));
    assert_eq!(
        board.active().current_cells(),
        Piece::new(PieceKind::T).current_cells()
    );
}

#[test]
fn test_repeat_events_do_not_press() {
    let t0 = Instant::now();
    let mut input = InputHandler::new();
    assert_eq!(
        input.handle_key(key(KeyCode::Left, KeyEventKind::Repeat), t0),
        None
    );
    assert!(!input.tracker().any_held());
}

#[test]
fn test_tap_without_release_events_expires() {
    let t0 = Instant::now();
    let mut board = board_with(PieceKind::T);
    let mut input = InputHandler::new().with_key_release_timeout(Duration::from_millis(150));

    // Terminal without release reporting: press only.
    input.handle_key(key(KeyCode::Left, KeyEventKind::Press), t0);
    for n in 0..30 {
        input.update(&mut board, frame(t0, n));
    }

    // Moves at 0 and 112 before the hold timed out after 150ms.
    assert_eq!(board.position(), (3, 19));
    assert!(!input.tracker().is_held(Intent::Left));
}

#[test]
fn test_held_down_drops_the_piece_to_the_floor() {
    let t0 = Instant::now();
    let mut board = board_with(PieceKind::O);
    let mut input = InputHandler::new();
    input.handle_key(key(KeyCode::Down, KeyEventKind::Press), t0);
    input.handle_key(key(KeyCode::Down, KeyEventKind::Release), t0);
    input.handle_key(key(KeyCode::Down, KeyEventKind::Press), t0);

    let mut settled = None;
    for n in 0..200 {
        for r in input.update(&mut board, frame(t0, n)) {
            if let IntentOutcome::Drop(DropOutcome::Settled { lines_cleared }) = r.outcome {
                settled.get_or_insert(lines_cleared);
            }
        }
        if settled.is_some() {
            break;
        }
    }

    assert_eq!(settled, Some(0));
    assert!(board.is_filled(4, 0));
    assert!(board.is_filled(5, 1));
}

#[test]
fn test_quit_and_restart_keys() {
    assert!(should_quit(key(KeyCode::Char('q'), KeyEventKind::Press)));
    assert!(should_quit(KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }));
    assert!(!should_quit(key(KeyCode::Char('c'), KeyEventKind::Press)));
    assert!(should_restart(key(KeyCode::Char('r'), KeyEventKind::Press)));
    assert!(!should_restart(key(KeyCode::Left, KeyEventKind::Press)));
}

#[test]
fn test_reset_releases_everything() {
    let t0 = Instant::now();
    let mut input = InputHandler::new();
    input.handle_key(key(KeyCode::Left, KeyEventKind::Press), t0);
    input.handle_key(key(KeyCode::Up, KeyEventKind::Press), t0);
    assert!(input.tracker().any_held());

    input.reset();
    assert!(!input.tracker().any_held());
}
