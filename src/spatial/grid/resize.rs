use super::*;

impl CellGrid {
    /// Reallocate storage to `new_width x new_height` (height padded to
    /// whole blocks plus one). Preserves the overlapping top-left
    /// interior region, truncates the excess and empty-fills growth.
    /// Zero in either dimension clears the grid to 0 cells.
    ///
    /// The new buffer is fully built before it replaces the old one, so
    /// the grid is never observable in a partially-resized state.
    pub fn resize(&mut self, new_width: u32, new_height: u32, block_rows: u32) {
        if new_width == 0 || new_height == 0 {
            self.width = 0;
            self.height = 0;
            self.size = 0;
            self.cells = Vec::new();
            return;
        }

        let new_height = pad_height(new_height, block_rows);
        let new_size = (new_width as usize) * (new_height as usize);
        let mut cells = vec![Cell::Empty; new_size];

        // Copy interior-to-interior only: old border cells are Empty
        // anyway, and positions that become border in the new shape
        // must stay Empty.
        for y in 1..new_height.saturating_sub(1) {
            if y + 1 >= self.height {
                break;
            }
            for x in 1..new_width.saturating_sub(1) {
                if x + 1 >= self.width {
                    break;
                }
                cells[(y * new_width + x) as usize] =
                    self.cells[(y * self.width + x) as usize];
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.size = new_size;
        self.cells = cells;
    }

    /// Drop all cell storage; equivalent to `resize(0, 0, _)`.
    pub fn clear(&mut self) {
        self.resize(0, 0, 1);
    }
}
