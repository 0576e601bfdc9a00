use std::ops::Range;

use crate::Pixel;
use crate::error::Result;
use crate::rect::Rect;
use crate::surface::Color;
use crate::surface::Surface;

/// An in-memory [`Surface`] with one color per dot.
///
/// A dot is a `scale` by `scale` square of display units. Dot `(x, y)` has its origin at
/// `(x * scale, y * scale)`, and a rectangle paints every dot whose origin it contains. With a
/// scale equal to the cell size, every cell of a grid lands on exactly one dot.
pub struct Raster {
    /// The dot buffer
    db: Vec<Color>,

    /// Width in dots
    w: usize,

    /// Height in dots
    h: usize,

    /// Side length of a dot, in display units
    scale: u32,

    caption: String,
}

impl Raster {
    /// A raster covering a `width` by `height` surface (in display units).
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        assert!(scale > 0, "dots must be at least one unit wide");

        let (w, h) = (
            width.div_ceil(scale) as usize,
            height.div_ceil(scale) as usize,
        );

        Self {
            db: vec![Color::BLACK; w * h],
            w,
            h,
            scale,
            caption: String::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// The last caption drawn
    pub fn caption_text(&self) -> &str {
        &self.caption
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        self.db[self.xy_from(x, y)]
    }

    /// Colors of dots `(x, 2 * line)` and `(x, 2 * line + 1)`. A missing lower dot reads as
    /// black.
    pub fn dot_pair(&self, x: usize, line: usize) -> (Color, Color) {
        let upper = self.get(x, 2 * line);
        let lower = if 2 * line + 1 < self.h {
            self.get(x, 2 * line + 1)
        } else {
            Color::BLACK
        };

        (upper, lower)
    }

    /// Render the raster as text, one line per row of dots.
    pub fn dump<F>(&self, f: F) -> String
    where
        F: Fn(Color) -> char,
    {
        let mut s = String::with_capacity((self.w + 1) * self.h);

        for row in self.db.chunks(self.w) {
            s.extend(row.iter().map(|&c| f(c)));
            s.push('\n');
        }

        s
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    /// Indices of the dots whose origin lies in `[start, end)`, clipped to `[0, len)`.
    fn span(&self, start: Pixel, end: Pixel, len: usize) -> Range<usize> {
        let lo = (start.max(0) as u32).div_ceil(self.scale) as usize;
        let hi = (end.max(0) as u32).div_ceil(self.scale) as usize;

        lo.min(len)..hi.min(len)
    }
}

impl Surface for Raster {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.db.fill(color);

        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }

        let xs = self.span(rect.x, rect.right(), self.w);
        let ys = self.span(rect.y, rect.bottom(), self.h);

        for y in ys {
            for x in xs.clone() {
                let i = self.xy_from(x, y);
                self.db[i] = color;
            }
        }

        Ok(())
    }

    fn caption(&mut self, text: &str) -> Result<()> {
        self.caption.clear();
        self.caption.push_str(text);

        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Raster;
    use crate::rect::Rect;
    use crate::surface::Color;
    use crate::surface::Surface;

    fn text(raster: &Raster) -> String {
        raster.dump(|c| if c == Color::WHITE { '#' } else { '.' })
    }

    #[test]
    fn dimensions_round_up() {
        let raster = Raster::new(55, 40, 10);

        assert_eq!((raster.width(), raster.height()), (6, 4));
    }

    #[test]
    fn cell_rect_paints_one_dot() {
        let mut raster = Raster::new(50, 40, 10);

        raster.fill_rect(Rect::square(10, 20, 9), Color::WHITE).unwrap();

        insta::assert_snapshot!(text(&raster), @r"
.....
.....
.#...
.....
");
    }

    #[test]
    fn fill_is_clipped() {
        let mut raster = Raster::new(50, 40, 10);

        raster.fill_rect(Rect::new(-20, 30, 40, 30), Color::WHITE).unwrap();
        raster.fill_rect(Rect::new(45, 0, 100, 5), Color::WHITE).unwrap();
        // covers no dot origin
        raster.fill_rect(Rect::new(21, 1, 8, 8), Color::WHITE).unwrap();

        insta::assert_snapshot!(text(&raster), @r"
.....
.....
.....
##...
");
    }

    #[test]
    fn clear_overwrites_everything() {
        let mut raster = Raster::new(30, 30, 10);
        raster.fill_rect(Rect::square(0, 0, 9), Color::WHITE).unwrap();

        raster.clear(Color::rgb(1, 2, 3)).unwrap();

        assert!((0..3).all(|x| (0..3).all(|y| raster.get(x, y) == Color::rgb(1, 2, 3))));
    }

    #[test]
    fn dot_pair_pads_odd_heights() {
        let mut raster = Raster::new(10, 30, 10);
        raster.clear(Color::WHITE).unwrap();

        assert_eq!(raster.dot_pair(0, 0), (Color::WHITE, Color::WHITE));
        assert_eq!(raster.dot_pair(0, 1), (Color::WHITE, Color::BLACK));
    }

    #[test]
    fn empty_rect_paints_nothing() {
        let mut raster = Raster::new(20, 20, 10);

        raster.fill_rect(Rect::new(0, 0, 0, 15), Color::WHITE).unwrap();
        raster.fill_rect(Rect::new(10, 10, 15, 0), Color::WHITE).unwrap();

        assert!((0..2).all(|y| (0..2).all(|x| raster.get(x, y) == Color::BLACK)));
    }

    #[test]
    fn caption_is_kept() {
        let mut raster = Raster::new(10, 10, 10);

        raster.caption("generation 3").unwrap();

        assert_eq!(raster.caption_text(), "generation 3");
    }
}
