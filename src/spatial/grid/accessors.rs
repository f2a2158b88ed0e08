use super::*;

impl CellGrid {
    // === Cell access ===

    /// State at `(x, y)`; `Empty` for border or out-of-range reads.
    /// Not an error by design - it keeps the border transparent to
    /// callers and the hot paths branch-free.
    #[inline]
    pub fn get_cell(&self, x: i32, y: i32) -> Cell {
        match self.index_of(x, y) {
            Some(idx) => self.cells[idx],
            None => Cell::Empty,
        }
    }

    /// Write a cell. Border and out-of-range writes are silently
    /// dropped. Must only be issued while no generation step is
    /// executing (the single control loop guarantees this).
    #[inline]
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
        }
    }

    // === Raw buffer for the renderer ===

    pub fn cells_ptr(&self) -> *const Cell {
        self.cells.as_ptr()
    }

    // === Statistics ===

    /// Cells that are not `Empty`.
    pub fn non_empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Cells currently in the `Head` state.
    pub fn head_count(&self) -> usize {
        self.cells.iter().map(|c| c.head_bit() as usize).sum()
    }
}
