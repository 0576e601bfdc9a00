pub mod app;
pub mod cell;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod pattern;
pub mod raster;
pub mod rect;
pub mod rule_set;
pub mod surface;
pub mod term;

pub use error::Error;
pub use error::Result;

/// Terminal dimensions, in columns and lines
pub type ScreenSize = u16;

/// Grid coordinate. Wraps around both axes of the grid.
pub type Coord = i32;

/// Position on the display surface
pub type Pixel = i32;
