use std::time::Duration;

use crate::grid::Grid;
use crate::surface::Color;

/// Startup settings of the presentation loop.
///
/// The defaults are the reference setup: an 800 by 600 surface split into 10 unit cells
/// (80 by 60 of them), advancing once every 100ms, frozen until the user unpauses.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// Width of the display surface, in display units
    pub width: u32,

    /// Height of the display surface, in display units
    pub height: u32,

    /// Side length of a cell's slot
    pub cell_size: u32,

    /// Time between two ticks of the loop
    pub tick: Duration,

    pub start_paused: bool,
}

impl Config {
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 600;
    pub const CELL_SIZE: u32 = 10;
    pub const TICK: Duration = Duration::from_millis(100);

    pub const BACKGROUND_COLOR: Color = Color::BLACK;
    pub const ALIVE_COLOR: Color = Color::WHITE;

    /// Red and blue level of dead cells while the tint is on
    pub const TINT: u8 = 100;

    /// Environment variable holding the path of the log file
    pub const LOG_FILE_VAR: &'static str = "LIFEGRID_LOG";

    /// Number of cells per row
    pub fn columns(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    /// Number of cells per column
    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    /// An empty grid of the configured size
    pub fn grid(&self) -> Grid {
        Grid::new(self.columns(), self.rows(), self.cell_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            cell_size: Self::CELL_SIZE,
            tick: Self::TICK,
            start_paused: true,
        }
    }
}
