use crate::core::error::EngineError;
use crate::domain::cell::Cell;
use crate::domain::circuit::Circuit;

use super::GridCore;

pub(super) fn paint_cell(core: &mut GridCore, x: i32, y: i32, cell: Cell) {
    // Write-through into the simulator's input buffer so the very next
    // generation reads the edit. Border and out-of-range coordinates
    // drop silently, same as the grid itself.
    let Some(idx) = core.grid.index_of(x, y) else {
        return;
    };
    core.grid.cells[idx] = cell;
    core.sim.input[idx] = cell;
}

pub(super) fn paint_radius(core: &mut GridCore, cx: i32, cy: i32, radius: i32, cell: Cell) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                paint_cell(core, cx + dx, cy + dy, cell);
            }
        }
    }
}

pub(super) fn erase_radius(core: &mut GridCore, cx: i32, cy: i32, radius: i32) {
    paint_radius(core, cx, cy, radius, Cell::Empty);
}

pub(super) fn clear(core: &mut GridCore) {
    core.grid.clear();
    core.sim.reinit(&core.grid.cells);
    core.render.pixel_buffer = Vec::new();
    core.generation = 0;
}

pub(super) fn resize(core: &mut GridCore, new_width: u32, new_height: u32) {
    core.grid
        .resize(new_width, new_height, core.sim.parallelism.block_rows);
    core.sim.reinit(&core.grid.cells);
    core.render.pixel_buffer.resize(core.grid.size(), 0);
}

pub(super) fn load_sub_circuit(
    core: &mut GridCore,
    dst_x: i32,
    dst_y: i32,
    src_x: u32,
    src_y: u32,
    source: &Circuit,
) -> Result<(), EngineError> {
    core.grid
        .load_sub_circuit(dst_x, dst_y, src_x, src_y, source)?;
    // Bulk edits sync the whole input buffer in one pass.
    core.sim.input.copy_from_slice(&core.grid.cells);
    Ok(())
}
