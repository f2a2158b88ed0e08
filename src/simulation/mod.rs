//! Simulation orchestration.
//!
//! `GridCore` owns the cell grid, the double-buffered simulator and the
//! view transform; `GridHandle` shares it between holders; `World` is
//! the wasm facade. The core only orchestrates - the rule lives in
//! `systems::rule`, partitioning in `systems::partition`, and every
//! operation here delegates to a submodule the way the step/commands/
//! init split keeps each concern in one file.

use crate::core::error::EngineError;
use crate::domain::cell::Cell;
use crate::domain::circuit::Circuit;
use crate::domain::palette::Palette;
use crate::spatial::grid::CellGrid;
use crate::spatial::transform::Transform;
use crate::spatial::vec2::Vec2;
use crate::systems::partition::Parallelism;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;
mod handle;

pub use facade::{AbiLayout, World};
pub use handle::GridHandle;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Double-buffered generation state.
///
/// `input` is the authoritative state a generation reads; `output` is
/// what the workers write. After each generation `output` is copied
/// back into `input` - a worker therefore never reads the buffer it is
/// concurrently writing.
pub struct Simulator {
    pub(crate) parallelism: Parallelism,
    pub(crate) input: Vec<Cell>,
    pub(crate) output: Vec<Cell>,
}

impl Simulator {
    /// The read and write sides of one generation.
    fn buffers(&mut self) -> (&[Cell], &mut [Cell]) {
        (&self.input, &mut self.output)
    }

    /// Rebuild both buffers from the authoritative cells; used after
    /// resize and bulk loads, which invalidate buffer identities.
    fn reinit(&mut self, cells: &[Cell]) {
        self.input.clear();
        self.input.extend_from_slice(cells);
        self.output.clear();
        self.output.resize(cells.len(), Cell::Empty);
    }
}

pub(crate) struct RenderBuffers {
    pixel_buffer: Vec<u32>,
}

pub(crate) struct AbiLayoutData {
    pub(crate) cells_ptr: *const u8,
    pub(crate) cells_len: usize,
    pub(crate) pixels_ptr: *const u32,
    pub(crate) pixels_len: usize,
}

/// The simulation core: cell grid + simulator + view transform.
pub struct GridCore {
    grid: CellGrid,
    sim: Simulator,
    transform: Transform,
    palette: Palette,
    generation: u64,
    render: RenderBuffers,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl std::fmt::Debug for GridCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridCore")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("generation", &self.generation)
            .field("perf_enabled", &self.perf_enabled)
            .finish()
    }
}

impl GridCore {
    /// Create an empty grid with the detected parallelism capability.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        init::create_grid_core(width, height, Parallelism::detect())
    }

    /// Create with an explicit capability (tests, embedders).
    pub fn with_parallelism(
        width: u32,
        height: u32,
        parallelism: Parallelism,
    ) -> Result<Self, EngineError> {
        init::create_grid_core(width, height, parallelism)
    }

    /// Create from a source circuit, copied with a 1-cell offset so the
    /// circuit occupies the interior.
    pub fn from_circuit(circuit: &Circuit) -> Result<Self, EngineError> {
        init::create_grid_core_from_circuit(circuit, Parallelism::detect())
    }

    pub fn from_circuit_with_parallelism(
        circuit: &Circuit,
        parallelism: Parallelism,
    ) -> Result<Self, EngineError> {
        init::create_grid_core_from_circuit(circuit, parallelism)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn grid(&self) -> &CellGrid { &self.grid }

    pub fn parallelism(&self) -> Parallelism { self.sim.parallelism }

    /// Advance the simulation by `generations` back-to-back steps.
    /// The host-visible cells are synchronized once at the end of the
    /// batch. `step(0)` and stepping an empty grid are no-ops.
    pub fn step(&mut self, generations: u32) {
        step::step(self, generations);
    }

    /// State at `(x, y)`; `Empty` outside the interior.
    pub fn get_cell(&self, x: i32, y: i32) -> Cell {
        self.grid.get_cell(x, y)
    }

    /// Write one cell; silently dropped outside the interior. Keeps the
    /// simulator's input buffer coherent with the edit.
    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        commands::paint_cell(self, x, y, cell);
    }

    /// Paint a filled circle of cells (brush editing).
    pub fn paint_radius(&mut self, cx: i32, cy: i32, radius: i32, cell: Cell) {
        commands::paint_radius(self, cx, cy, radius, cell);
    }

    /// Erase a filled circle back to `Empty`.
    pub fn erase_radius(&mut self, cx: i32, cy: i32, radius: i32) {
        commands::erase_radius(self, cx, cy, radius);
    }

    /// Drop all cell storage and reset the generation counter.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Reallocate to the new dimensions, preserving the overlapping
    /// region and reinitializing the generation buffers.
    pub fn resize(&mut self, width: u32, height: u32) {
        commands::resize(self, width, height);
    }

    /// Copy a region of `source` into the grid interior.
    pub fn load_sub_circuit(
        &mut self,
        dst_x: i32,
        dst_y: i32,
        src_x: u32,
        src_y: u32,
        source: &Circuit,
    ) -> Result<(), EngineError> {
        commands::load_sub_circuit(self, dst_x, dst_y, src_x, src_y, source)
    }

    // === Settings ===

    /// Enable or disable per-step perf metrics (adds timing overhead
    /// when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Clamp the worker count used by subsequent steps (floor 1).
    pub fn set_worker_limit(&mut self, max_workers: usize) {
        settings::set_worker_limit(self, max_workers);
    }

    // === View transform ===

    pub fn transform(&self) -> &Transform { &self.transform }

    pub fn transform_mut(&mut self) -> &mut Transform { &mut self.transform }

    /// Grid cell under a pixel position, clamped to valid coordinates.
    pub fn pick_cell(&self, px: f32, py: f32) -> (u32, u32) {
        self.transform
            .world_to_cell(Vec2::new(px, py), self.grid.width(), self.grid.height())
    }

    // === Renderer interface ===

    /// Get pointer to the raw cell state array (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells_ptr() as *const u8
    }

    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }

    /// Palette-map the whole frame into the pixel transfer buffer.
    pub fn extract_pixels(&mut self) -> *const u32 {
        render_extract::extract_pixels(self)
    }

    pub fn pixels_len(&self) -> usize {
        render_extract::pixels_len(self)
    }

    pub fn palette_manifest_json(&self) -> String {
        self.palette.manifest_json()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            cells_ptr: self.cells_ptr(),
            cells_len: self.cells_len(),
            pixels_ptr: self.render.pixel_buffer.as_ptr(),
            pixels_len: self.render.pixel_buffer.len(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
