use core::fmt::Debug;

use crate::Pixel;

/// Axis-aligned rectangle on the display surface, in display units.
///
/// The covered area is `[x, x + w) × [y, y + h)`.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: Pixel,
    pub y: Pixel,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: Pixel, y: Pixel, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// A square of side `s` with its top left corner at `(x, y)`
    pub const fn square(x: Pixel, y: Pixel, s: u32) -> Self {
        Self::new(x, y, s, s)
    }

    pub fn right(&self) -> Pixel {
        self.x + self.w as Pixel
    }

    pub fn bottom(&self) -> Pixel {
        self.y + self.h as Pixel
    }

    /// Whether `(px, py)` lies inside the rectangle. The right and bottom edges are excluded.
    pub fn contains(&self, px: Pixel, py: Pixel) -> bool {
        (self.x..self.right()).contains(&px) && (self.y..self.bottom()).contains(&py)
    }

    /// Whether the two rectangles share any point.
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.w, self.h)
    }
}
