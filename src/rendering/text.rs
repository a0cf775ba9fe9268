use std::fmt::Write as _;
use std::io::{self, Stdout, Write, stdin, stdout};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use termion::event::Key;
use termion::input::TermRead;
use termion::raw::{IntoRawMode, RawTerminal};
use termion::screen::AlternateScreen;
use termion::{clear, cursor};
use tracing::debug;

use super::{EventSource, PauseOutcome, Renderer};
use crate::domain::Grid;
use crate::error::RenderError;
use crate::input::InputEvent;

const BACKEND: &str = "text console";

/// Each cell is two columns wide so cells come out roughly square
const ALIVE_GLYPH: &str = "██";
const DEAD_GLYPH: &str = "  ";

/// Stdout in raw mode on the alternate screen
pub type Terminal = AlternateScreen<RawTerminal<Stdout>>;

/// Grid dimensions `(rows, columns)` that fit a terminal of `size`
/// (as reported by `termion::terminal_size`, columns first).
/// The last row stays free so the cursor never scrolls the frame.
pub fn terminal_grid(size: io::Result<(u16, u16)>) -> Result<(usize, usize), RenderError> {
    let (columns, rows) = size
        .map_err(|err| RenderError::init(BACKEND, format!("terminal size unavailable: {err}")))?;
    let grid = (rows.saturating_sub(1) as usize, (columns / 2) as usize);
    if grid.0 == 0 || grid.1 == 0 {
        return Err(RenderError::init(
            BACKEND,
            format!("a {columns}x{rows} terminal is too small"),
        ));
    }
    Ok(grid)
}

/// Terminal backend drawing one text row per grid row.
///
/// Frames are assembled in memory and written with a single flush,
/// overwriting the previous frame in place.
pub struct TextRenderer<W: Write> {
    out: W,
    keys: Option<Receiver<Key>>,
    pending: Vec<InputEvent>,
    cursor_hidden: bool,
}

impl<W: Write> TextRenderer<W> {
    /// Render into any writer, with no keyboard input
    pub fn new(out: W) -> Self {
        Self {
            out,
            keys: None,
            pending: Vec::new(),
            cursor_hidden: false,
        }
    }

    /// Render into `out` and read quit keys from `keys`
    pub fn with_keys(out: W, keys: Receiver<Key>) -> Self {
        Self {
            out,
            keys: Some(keys),
            pending: Vec::new(),
            cursor_hidden: false,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn frame(grid: &Grid) -> String {
        let mut frame = String::with_capacity(grid.rows() * (grid.columns() * 6 + 2) + 8);
        let _ = write!(frame, "{}", cursor::Goto(1, 1));
        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let glyph = if grid.get(row, column).is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH };
                frame.push_str(glyph);
            }
            frame.push_str("\r\n");
        }
        frame
    }

    fn drain_keys(&mut self) {
        if let Some(keys) = &self.keys {
            self.pending.extend(keys.try_iter().map(key_event));
        }
    }

    fn quit_pending(&self) -> bool {
        self.pending.iter().any(|event| matches!(event, InputEvent::Quit))
    }
}

impl TextRenderer<Terminal> {
    /// Take over the controlling terminal: raw mode, alternate screen,
    /// hidden cursor. Dropping the renderer undoes these in reverse order.
    pub fn acquire() -> Result<Self, RenderError> {
        let out = stdout();
        if !termion::is_tty(&out) {
            return Err(RenderError::init(BACKEND, "stdout is not a terminal"));
        }
        let raw = out
            .into_raw_mode()
            .map_err(|err| RenderError::init(BACKEND, format!("raw mode unavailable: {err}")))?;
        let mut screen = AlternateScreen::from(raw);
        write!(screen, "{}{}", clear::All, cursor::Hide)
            .and_then(|_| screen.flush())
            .map_err(|err| RenderError::init(BACKEND, format!("terminal setup failed: {err}")))?;

        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            for key in stdin().keys().map_while(Result::ok) {
                if sender.send(key).is_err() {
                    break;
                }
            }
        });

        debug!("text renderer ready");
        let mut renderer = Self::with_keys(screen, receiver);
        renderer.cursor_hidden = true;
        Ok(renderer)
    }
}

/// Ctrl-C arrives as a key in raw mode, so it is handled here too
fn key_event(key: Key) -> InputEvent {
    match key {
        Key::Char('q') | Key::Ctrl('c') | Key::Esc => InputEvent::Quit,
        _ => InputEvent::Other,
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    async fn render(&mut self, grid: &Grid) -> Result<(), RenderError> {
        let frame = Self::frame(grid);
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    async fn pause(&mut self, duration: Duration) -> PauseOutcome {
        let deadline = Instant::now() + duration;
        loop {
            self.drain_keys();
            if self.quit_pending() {
                return PauseOutcome::Quit;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return PauseOutcome::Continue;
            }
            let Some(keys) = &self.keys else {
                thread::sleep(remaining);
                return PauseOutcome::Continue;
            };
            match keys.recv_timeout(remaining) {
                Ok(key) => self.pending.push(key_event(key)),
                Err(RecvTimeoutError::Timeout) => return PauseOutcome::Continue,
                Err(RecvTimeoutError::Disconnected) => self.keys = None,
            }
        }
    }
}

impl<W: Write> EventSource for TextRenderer<W> {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.drain_keys();
        std::mem::take(&mut self.pending)
    }
}

impl<W: Write> Drop for TextRenderer<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = write!(self.out, "{}", cursor::Show);
            let _ = self.out.flush();
        }
        debug!(backend = BACKEND, "renderer released");
    }
}
