//! Terminal output: writes framebuffers to a crossterm terminal.
//!
//! The first frame, and any frame whose size differs from the last one, is a
//! full redraw. Otherwise only the horizontal runs of glyphs that changed are
//! rewritten. Escape sequences are staged in a byte buffer and written with a
//! single flush per frame.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use crate::fb::{CellStyle, FrameBuffer, Glyph, Rgb};

/// Frame writer over any byte sink; stdout unless built with [`TerminalRenderer::with_writer`].
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    shown: Option<FrameBuffer>,
    staged: Vec<u8>,
    /// Key release reporting was pushed on enter and must be popped on exit.
    key_events_enhanced: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Raw mode, alternate screen, hidden cursor, no autowrap.
    ///
    /// Terminals that support the keyboard enhancement protocol are asked to
    /// report key releases.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.key_events_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        self.staged.clear();
        encode_enter(&mut self.staged, self.key_events_enhanced)?;
        self.flush()
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        self.staged.clear();
        encode_exit(&mut self.staged, self.key_events_enhanced)?;
        self.key_events_enhanced = false;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            shown: None,
            staged: Vec::with_capacity(16 * 1024),
            key_events_enhanced: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Redraw everything on the next frame, e.g. after a terminal resize.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.staged.clear();
        let same_size = match &self.shown {
            Some(prev) => prev.width() == fb.width() && prev.height() == fb.height(),
            None => false,
        };

        match self.shown.as_mut() {
            Some(prev) if same_size => {
                encode_diff(prev, fb, &mut self.staged)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full(fb, &mut self.staged)?;
                self.shown = Some(fb.clone());
            }
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.staged)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Stage the session setup sequence.
pub fn encode_enter(out: &mut Vec<u8>, report_key_releases: bool) -> io::Result<()> {
    queue!(out, EnterAlternateScreen, Hide, DisableLineWrap)?;
    if report_key_releases {
        queue!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    Ok(())
}

/// Stage the session teardown sequence, mirroring [`encode_enter`].
pub fn encode_exit(out: &mut Vec<u8>, report_key_releases: bool) -> io::Result<()> {
    if report_key_releases {
        queue!(out, PopKeyboardEnhancementFlags)?;
    }
    queue!(
        out,
        ResetColor,
        SetAttribute(Attribute::Reset),
        EnableLineWrap,
        Show,
        LeaveAlternateScreen
    )
}

/// Stage a clear-screen plus every glyph of `fb`.
pub fn encode_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        queue!(out, MoveTo(0, y))?;
        for &glyph in fb.row(y) {
            pen.write(out, glyph)?;
        }
    }
    Pen::finish(out)
}

/// Stage only the glyph runs that differ between two same-sized frames.
pub fn encode_diff(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        for (start, end) in changed_runs(prev.row(y), row) {
            queue!(out, MoveTo(start as u16, y))?;
            for &glyph in &row[start..end] {
                pen.write(out, glyph)?;
            }
        }
    }
    Pen::finish(out)
}

/// Half-open column ranges where `next` differs from `prev`.
fn changed_runs(prev: &[Glyph], next: &[Glyph]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;

    for (x, glyph) in next.iter().enumerate() {
        let changed = prev.get(x) != Some(glyph);
        match (open, changed) {
            (None, true) => open = Some(x),
            (Some(start), false) => {
                runs.push((start, x));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        runs.push((start, next.len()));
    }

    runs
}

/// Tracks the active style so escape codes are only emitted on change.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn write(&mut self, out: &mut Vec<u8>, glyph: Glyph) -> io::Result<()> {
        if self.style != Some(glyph.style) {
            let style = glyph.style;
            queue!(
                out,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(color(style.fg)),
                SetBackgroundColor(color(style.bg))
            )?;
            if style.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            self.style = Some(style);
        }
        queue!(out, Print(glyph.ch))
    }

    fn finish(out: &mut Vec<u8>) -> io::Result<()> {
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))
    }
}

fn color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}
