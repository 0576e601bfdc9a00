use std::time::Duration;

use crate::error::Result;
use crate::events::Event;
use crate::rect::Rect;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }
}

/// Something that can be drawn on.
pub trait Surface {
    /// Paint the whole surface with `color`
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Paint `rect` with `color`. Parts of `rect` outside of the surface are ignored.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Show a short line of status text. Surfaces without room for text can ignore it.
    fn caption(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    /// Make everything drawn since the last call visible
    fn present(&mut self) -> Result<()>;
}

/// Something that produces [`Event`]s.
pub trait InputSource {
    /// Wait at most `timeout` for the next event.
    ///
    /// Returns `None` if nothing happened, or if what happened has no meaning for the
    /// simulation.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}
