//! Grid targeting engine.
//!
//! Splits the screen into square tiles, filters them through the region
//! lists, and hands each surviving tile a spoken code. `TileGrid` is the
//! single source for both drawing and code resolution.

mod codes;
mod core;
mod regions;

pub use codes::{CodeAlphabet, Codes, ColorSuffix, TileCode};
pub use core::{GridCell, GridError, GridGeometry, Offset, Tile, TileGrid, TileStyle};
pub use regions::{RegionKind, RegionSet};
