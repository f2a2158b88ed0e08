use crate::core::error::EngineError;
use crate::domain::cell::Cell;
use crate::domain::circuit::Circuit;
use crate::domain::palette::Palette;
use crate::spatial::grid::CellGrid;
use crate::spatial::transform::Transform;
use crate::systems::partition::Parallelism;

use super::perf_stats::PerfStats;
use super::{commands, GridCore, RenderBuffers, Simulator};

pub(super) fn create_grid_core(
    width: u32,
    height: u32,
    parallelism: Parallelism,
) -> Result<GridCore, EngineError> {
    let parallelism = parallelism.validate()?;
    let grid = CellGrid::new(width, height, parallelism.block_rows);
    let input = grid.cells.clone();
    let output = vec![Cell::Empty; grid.size()];
    Ok(GridCore {
        sim: Simulator { parallelism, input, output },
        render: RenderBuffers {
            pixel_buffer: vec![0u32; grid.size()],
        },
        grid,
        transform: Transform::new(),
        palette: Palette::default(),
        generation: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

pub(super) fn create_grid_core_from_circuit(
    circuit: &Circuit,
    parallelism: Parallelism,
) -> Result<GridCore, EngineError> {
    circuit.validate()?;
    // +2 per axis for the border; the circuit lands at (1, 1) so it
    // occupies the interior.
    let mut core = create_grid_core(
        circuit.width().saturating_add(2),
        circuit.height().saturating_add(2),
        parallelism,
    )?;
    commands::load_sub_circuit(&mut core, 1, 1, 0, 0, circuit)?;
    Ok(core)
}
