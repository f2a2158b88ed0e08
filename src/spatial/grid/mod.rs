//! CellGrid - row-major cell storage with a permanent 1-cell border.
//!
//! The border rows and columns are always `Empty` and are never written
//! by the simulation or by any load operation; that is what lets the
//! rule kernel read the full 8-neighborhood of every interior cell
//! without per-cell bounds checks. All addressing goes through
//! `index_of`, which only resolves interior coordinates.
//!
//! Heights are padded to whole partition blocks plus one spare block
//! (see `systems::partition`), so worker row ranges stay uniform.

use crate::domain::cell::Cell;
use crate::systems::partition::pad_height;

mod accessors;
mod indexing;
mod load;
mod resize;

pub struct CellGrid {
    width: u32,
    height: u32,
    size: usize,

    /// Authoritative host-visible cell states, row-major
    /// (`index = y * width + x`).
    pub cells: Vec<Cell>,
}

impl CellGrid {
    /// Create an all-empty grid. Zero in either dimension produces a
    /// 0-cell grid.
    pub fn new(width: u32, height: u32, block_rows: u32) -> Self {
        if width == 0 || height == 0 {
            return Self { width: 0, height: 0, size: 0, cells: Vec::new() };
        }
        let height = pad_height(height, block_rows);
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Cell::Empty; size],
        }
    }
}
