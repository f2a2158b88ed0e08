use wasm_bindgen::prelude::*;

/// Snapshot of the last `step(n)` batch. All zeros while perf metrics
/// are disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) kernel_ms: f64,
    pub(super) sync_ms: f64,
    pub(super) generations: u32,
    pub(super) workers: u32,
    pub(super) band_rows: u32,
    pub(super) grid_cells: u32,
    pub(super) non_empty_cells: u32,
    pub(super) head_cells: u32,
    pub(super) memory_bytes: u32,
}

#[wasm_bindgen]
impl PerfStats {
    pub fn step_ms(&self) -> f64 { self.step_ms }
    pub fn kernel_ms(&self) -> f64 { self.kernel_ms }
    pub fn sync_ms(&self) -> f64 { self.sync_ms }
    pub fn generations(&self) -> u32 { self.generations }
    pub fn workers(&self) -> u32 { self.workers }
    pub fn band_rows(&self) -> u32 { self.band_rows }
    pub fn grid_cells(&self) -> u32 { self.grid_cells }
    pub fn non_empty_cells(&self) -> u32 { self.non_empty_cells }
    pub fn head_cells(&self) -> u32 { self.head_cells }
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}
