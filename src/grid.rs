use std::fmt;

use crate::Coord;
use crate::Pixel;
use crate::cell::Cell;
use crate::rect::Rect;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// Offsets of the eight cells surrounding a cell
const NEIGHBORHOOD: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A fixed size toroidal world of [`Cell`]s.
///
/// Cells live in a flat, row-major buffer. Every coordinate handed to the grid goes through
/// [`Grid::index`], which wraps it around both axes, so `(-1, 0)` is the last cell of the first
/// row and `(width, height)` is `(0, 0)`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    /// Life rules. Always [`B3S23`].
    rules: RuleSet,

    cells: Vec<Cell>,

    /// Number of columns
    width: usize,

    /// Number of rows
    height: usize,

    /// Side length of a cell's slot on the display surface
    cell_size: u32,
}

impl Grid {
    /// Create a `width` by `height` grid of dead cells.
    ///
    /// Cell `(x, y)` is drawn as a square of side `cell_size - 1` with its top left corner at
    /// `(x * cell_size, y * cell_size)`, which leaves a one unit gutter between cells.
    pub fn new(width: usize, height: usize, cell_size: u32) -> Self {
        assert!(width > 0 && height > 0, "grid needs at least one cell");
        assert!(cell_size > 0, "cell size must be positive");
        assert!(
            width <= Coord::MAX as usize && height <= Coord::MAX as usize,
            "grid dimensions must fit in a coordinate"
        );

        // the far edge of the last cell must still be addressable on the display surface
        let side = Pixel::try_from(cell_size).ok();
        let extent = |n: usize| side.and_then(|s| Pixel::try_from(n).ok()?.checked_mul(s));
        assert!(
            extent(width).is_some() && extent(height).is_some(),
            "grid must fit on the display surface"
        );

        let side = cell_size as Pixel;
        let mut cells = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let rect = Rect::square(x as Pixel * side, y as Pixel * side, cell_size - 1);
                cells.push(Cell::dead(rect));
            }
        }

        Self {
            rules: B3S23,
            cells,
            width,
            height,
            cell_size,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// The part of the display surface covered by the grid
    pub fn area(&self) -> Rect {
        Rect::new(
            0,
            0,
            self.width as u32 * self.cell_size,
            self.height as u32 * self.cell_size,
        )
    }

    /// Maps `(x, y)` to its position in `cells`. This is the only place where coordinates wrap.
    fn index(&self, x: Coord, y: Coord) -> usize {
        let x = x.rem_euclid(self.width as Coord) as usize;
        let y = y.rem_euclid(self.height as Coord) as usize;

        y * self.width + x
    }

    pub fn cell(&self, x: Coord, y: Coord) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    pub fn is_alive(&self, x: Coord, y: Coord) -> bool {
        self.cell(x, y).is_alive()
    }

    pub fn display_rect(&self, x: Coord, y: Coord) -> Rect {
        self.cell(x, y).rect()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Every cell along with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Coord, &Cell)> + '_ {
        let w = self.width;

        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i % w) as Coord, (i / w) as Coord, c))
    }

    /// Bring every cell of `pattern` to life.
    pub fn seed<I>(&mut self, pattern: I)
    where
        I: IntoIterator<Item = (Coord, Coord)>,
    {
        for (x, y) in pattern {
            let i = self.index(x, y);
            self.cells[i].set_alive();
        }
    }

    /// Flip a single cell between dead and alive.
    pub fn toggle(&mut self, x: Coord, y: Coord) {
        let i = self.index(x, y);
        self.cells[i].toggle();
    }

    /// The cell whose slot contains the display point `(px, py)`.
    ///
    /// A slot is `cell_size` wide including the gutter, so every point of [`Grid::area`] belongs
    /// to exactly one cell. Points outside of it belong to none.
    pub fn cell_at_point(&self, px: Pixel, py: Pixel) -> Option<(Coord, Coord)> {
        if !self.area().contains(px, py) {
            return None;
        }

        let side = self.cell_size as Pixel;

        Some((px / side, py / side))
    }

    /// Toggle the cell under the display point `(px, py)`, returning its coordinates.
    pub fn toggle_at_point(&mut self, px: Pixel, py: Pixel) -> Option<(Coord, Coord)> {
        let (x, y) = self.cell_at_point(px, py)?;
        self.toggle(x, y);

        Some((x, y))
    }

    /// Advance the world by one generation.
    ///
    /// Every cell is evaluated against the current generation before any of them changes, so
    /// the result does not depend on the order cells are visited in.
    pub fn step(&mut self) {
        // evaluate, only `next` is written to
        for y in 0..self.height as Coord {
            for x in 0..self.width as Coord {
                let i = self.index(x, y);
                let neighbors = self.live_neighbors(x, y);
                let alive = self.rules.next_state(self.cells[i].is_alive(), neighbors);

                self.cells[i].stage(alive);
            }
        }

        // commit
        for cell in &mut self.cells {
            cell.commit();
        }
    }

    fn live_neighbors(&self, x: Coord, y: Coord) -> u8 {
        NEIGHBORHOOD
            .iter()
            .filter(|&&(dx, dy)| self.is_alive(x + dx, y + dy))
            .count() as u8
    }
}

impl fmt::Display for Grid {
    /// One line per row, `#` for live cells and `.` for dead ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }

            f.write_str("\n")?;
        }

        Ok(())
    }
}
