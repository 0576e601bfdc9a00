use crate::Coord;

/// A named shape of live cells, stored as offsets from the pattern's origin.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(Coord, Coord)],
}

/// Travels one cell down and to the right every 4 generations.
///
/// ```notrust
/// . . #
/// # o #
/// . # #
/// ```
///
/// Where `o` marks the origin.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(-1, 0), (1, -1), (0, 1), (1, 0), (1, 1)],
};

/// Period 2 oscillator, horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(-1, 0), (0, 0), (1, 0)],
};

/// The smallest still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

impl Pattern {
    /// The pattern's cells with its origin moved to `(x, y)`
    pub fn at(&self, x: Coord, y: Coord) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.cells.iter().map(move |&(dx, dy)| (x + dx, y + dy))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
