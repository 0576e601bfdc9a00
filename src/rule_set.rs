/// Rules of Conway's Game of Life: a dead cell with exactly 3 live neighbors comes alive, a
/// live cell with 2 or 3 live neighbors stays alive, every other cell is dead next generation.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// The transition rule the grid applies to every cell on each step.
///
/// Only [`B3S23`] is ever built. It is held as two masks indexed by live neighbor count: the
/// birth mask (upper 16 bits) is read for dead cells and the survival mask (lower 16 bits) for
/// live ones, so a transition is a single bit test.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and `s`, numbers
    /// are set on a bit basis. Any bit past the 8th is ignored.
    pub(crate) const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of a cell in the next generation, given its current state and the number of its
    /// live neighbors.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        // more than 8 neighbors cannot happen on a 2D grid
        debug_assert!(neighbors <= 8, "a cell has at most 8 neighbors");

        let mask = if alive {
            self.survivals()
        } else {
            self.births()
        };

        mask & (1 << neighbors) != 0
    }
}
