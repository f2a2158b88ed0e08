use crate::core::error::EngineError;
use crate::domain::circuit::Circuit;

use super::*;

impl CellGrid {
    /// Copy a rectangular region of `source` into this grid.
    ///
    /// The region starts at `(src_x, src_y)` in the source and lands
    /// with its origin at `(dst_x, dst_y)` here, clipped to the overlap
    /// of the source extent and this grid's interior - border cells are
    /// never written. A zero-sized source, or a destination entirely
    /// outside the grid, is a silent no-op.
    ///
    /// Fails with `InvalidCircuit` (grid untouched) when the source
    /// declares more cells than its payload holds.
    pub fn load_sub_circuit(
        &mut self,
        dst_x: i32,
        dst_y: i32,
        src_x: u32,
        src_y: u32,
        source: &Circuit,
    ) -> Result<(), EngineError> {
        source.validate()?;
        if self.size == 0 || src_x >= source.width() || src_y >= source.height() {
            return Ok(());
        }
        for sy in src_y..source.height() {
            let dy = dst_y + (sy - src_y) as i32;
            for sx in src_x..source.width() {
                let dx = dst_x + (sx - src_x) as i32;
                if let Some(idx) = self.index_of(dx, dy) {
                    self.cells[idx] = source.cell(sx, sy);
                }
            }
        }
        Ok(())
    }
}
