use std::io;
use std::io::Stdout;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;
use tracing::warn;

use crate::Pixel;
use crate::ScreenSize;
use crate::error::Result;
use crate::error::TerminalResultExt;
use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;
use crate::raster::Raster;
use crate::rect::Rect;
use crate::surface::Color;
use crate::surface::InputSource;
use crate::surface::Surface;

/// Upper half block. Its top half takes the foreground color and its bottom half the
/// background color, which fits two rows of dots in one line of text.
const UPPER_HALF: char = '\u{2580}';

/// A terminal acting as both display surface and input source.
///
/// Drawing goes to a [`Raster`] with one dot per cell; [`Surface::present`] writes it out two
/// dot rows per line, with the caption on the line below. The terminal is put back the way it
/// was when this is dropped.
pub struct Terminal {
    out: Stdout,

    raster: Raster,

    caption: String,

    /// Width of the terminal, in columns
    cols: ScreenSize,

    /// Height of the terminal, in lines
    rows: ScreenSize,

    /// Set when the screen no longer matches what was last presented
    stale: bool,
}

impl Terminal {
    /// Take over the terminal for a `width` by `height` surface with cells of side `scale`.
    pub fn new(width: u32, height: u32, scale: u32) -> Result<Self> {
        let (cols, rows) = terminal::size().during("query the terminal size")?;

        terminal::enable_raw_mode().during("enable raw mode")?;

        // From here on, dropping `term` restores the terminal
        let mut term = Self {
            out: io::stdout(),
            raster: Raster::new(width, height, scale),
            caption: String::new(),
            cols,
            rows,
            stale: true,
        };

        execute!(
            term.out,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )
        .during("enter the alternate screen")?;

        term.check_size();

        Ok(term)
    }

    /// Lines needed to show the whole raster plus the caption
    fn lines(&self) -> usize {
        self.raster.height().div_ceil(2)
    }

    fn check_size(&self) {
        let (need_cols, need_rows) = (self.raster.width(), self.lines() + 1);

        if (self.cols as usize) < need_cols || (self.rows as usize) < need_rows {
            warn!(
                cols = self.cols,
                rows = self.rows,
                need_cols,
                need_rows,
                "terminal is too small, the grid will be clipped"
            );
        }
    }
}

impl Surface for Terminal {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.raster.clear(color)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.raster.fill_rect(rect, color)
    }

    fn caption(&mut self, text: &str) -> Result<()> {
        self.caption.clear();
        self.caption.push_str(text);

        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.stale {
            queue!(
                self.out,
                style::ResetColor,
                terminal::Clear(terminal::ClearType::All)
            )?;
            self.stale = false;
        }

        let frame = frame(
            &self.raster,
            &self.caption,
            self.cols as usize,
            self.rows as usize,
        );

        for (line, pairs) in frame.lines.iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, line as ScreenSize))?;

            // only emit colors when they change
            let mut last = None;

            for &pair in pairs {
                if last != Some(pair) {
                    let (upper, lower) = pair;

                    queue!(
                        self.out,
                        style::SetForegroundColor(to_crossterm(upper)),
                        style::SetBackgroundColor(to_crossterm(lower)),
                    )?;
                    last = Some(pair);
                }

                queue!(self.out, style::Print(UPPER_HALF))?;
            }
        }

        if let Some(caption) = frame.caption {
            queue!(
                self.out,
                style::ResetColor,
                cursor::MoveTo(0, frame.lines.len() as ScreenSize),
                terminal::Clear(terminal::ClearType::CurrentLine),
                style::Print(caption),
            )?;
        }

        self.out.flush()?;

        Ok(())
    }
}

impl InputSource for Terminal {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if !event::poll(timeout).during("poll for input")? {
            return Ok(None);
        }

        let event = event::read().during("read input")?;

        if let CrossTermEvent::Resize(cols, rows) = event {
            debug!(cols, rows, "terminal resized");

            self.cols = cols;
            self.rows = rows;
            self.stale = true;
            self.check_size();

            return Ok(None);
        }

        Ok(convert_event(event, self.raster.scale()))
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // nothing sensible to do if restoring fails
        let _ = execute!(
            self.out,
            style::ResetColor,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// What a terminal of `cols` by `rows` shows of a raster.
struct Frame {
    /// One entry per visible line, holding the (upper, lower) dot colors of each visible column
    lines: Vec<Vec<(Color, Color)>>,

    /// The caption cut to the terminal width, if there is a line left below the grid for it
    caption: Option<String>,
}

fn frame(raster: &Raster, caption: &str, cols: usize, rows: usize) -> Frame {
    let lines = raster.height().div_ceil(2);
    let width = raster.width().min(cols);

    let visible = (0..lines.min(rows))
        .map(|line| (0..width).map(|x| raster.dot_pair(x, line)).collect())
        .collect();

    let caption = (lines < rows).then(|| caption.chars().take(cols).collect());

    Frame {
        lines: visible,
        caption,
    }
}

fn to_crossterm(c: Color) -> style::Color {
    style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Converts a crossterm event into a simulation event.
///
/// Each line of text shows two rows of cells, `scale` display units each. A left click picks
/// the upper one and a right click the lower one.
pub fn convert_event(event: CrossTermEvent, scale: u32) -> Option<Event> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Esc, ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(AppEvent::Exit.into()),
            KeyEvent {
                code: KeyCode::Char('p' | 'P') | KeyCode::Pause,
                ..
            } => Some(AppEvent::TogglePause.into()),
            KeyEvent {
                code: KeyCode::Char('g' | 'G'),
                ..
            } => Some(AppEvent::ToggleTint.into()),
            _ => None,
        },
        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            ..
        }) => {
            let half = match button {
                MouseButton::Left => 0,
                MouseButton::Right => 1,
                MouseButton::Middle => return None,
            };

            // aim for the middle of the dot
            let s = scale as Pixel;
            let x = column as Pixel * s + s / 2;
            let y = (2 * row as Pixel + half) * s + s / 2;

            Some(EngineEvent::Press { x, y }.into())
        }
        _ => None,
    }
}
