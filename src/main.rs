//! Terminal falling-block runner (default binary).
//!
//! crossterm supplies key events, the framebuffer renderer draws the board.
//! Set `TETROMINO_SEED` for a reproducible piece sequence and
//! `TETROMINO_LOG=<path>` to write tracing output to a file (filtered by
//! `RUST_LOG`, default `info`).

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tetromino::core::{Board, BoardConfig};
use tetromino::input::{should_quit, should_restart, InputHandler};
use tetromino::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tetromino::types::TICK_MS;

fn main() -> Result<()> {
    setup_logging()?;
    let config = board_config()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the file named by `TETROMINO_LOG`; stdout belongs to the renderer.
fn setup_logging() -> Result<()> {
    let Some(path) = std::env::var_os("TETROMINO_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .compact()
        .init();
    Ok(())
}

fn board_config() -> Result<BoardConfig> {
    let config = BoardConfig::default();
    match std::env::var("TETROMINO_SEED") {
        Ok(raw) => {
            let seed = raw.trim().parse::<u64>().with_context(|| {
                format!("TETROMINO_SEED must be an unsigned integer, got {raw:?}")
            })?;
            Ok(config.with_seed(seed))
        }
        Err(_) => Ok(config),
    }
}

fn run(term: &mut TerminalRenderer, config: BoardConfig) -> Result<()> {
    let mut board = Board::with_config(config)?;
    info!(seed = board.seed(), "board ready");

    let view = BoardView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&board, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if should_quit(key) {
                            info!(
                                lines = board.lines_cleared(),
                                pieces = board.pieces_settled(),
                                "quit"
                            );
                            return Ok(());
                        }
                        if should_restart(key) {
                            board.reset();
                            input.reset();
                            continue;
                        }
                    }
                    input.handle_key(key, Instant::now());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let now = Instant::now();
            last_tick = now;

            input.update(&mut board, now);
            board.auto_tick(now);

            if let Some(settled) = board.take_last_event() {
                debug!(
                    kind = settled.kind.as_str(),
                    lines = settled.lines_cleared,
                    total = board.lines_cleared(),
                    "settled"
                );
            }
        }
    }
}
