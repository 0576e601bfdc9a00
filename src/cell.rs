use crate::rect::Rect;

/// One automaton unit of a [`Grid`](crate::grid::Grid).
///
/// A cell carries two states: `current`, which is what the world looks like right now, and
/// `next`, a scratch slot that only the evaluation phase of a step writes to. Keeping both on
/// the cell means a generation is always computed from one consistent snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    current: bool,
    next: bool,

    /// Where the cell is drawn. Not used by the rule.
    rect: Rect,
}

impl Cell {
    /// A dead cell drawn at `rect`
    pub const fn dead(rect: Rect) -> Self {
        Self {
            current: false,
            next: false,
            rect,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current
    }

    /// The state staged for the next generation. Always dead outside of a step.
    pub fn next(&self) -> bool {
        self.next
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn set_alive(&mut self) {
        self.current = true;
    }

    pub(crate) fn toggle(&mut self) {
        self.current = !self.current;
    }

    pub(crate) fn stage(&mut self, alive: bool) {
        self.next = alive;
    }

    /// Move the staged state into `current` and clear the scratch slot.
    pub(crate) fn commit(&mut self) {
        self.current = self.next;
        self.next = false;
    }
}
