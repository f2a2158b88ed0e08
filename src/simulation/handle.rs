//! GridHandle - reference-counted shared ownership of a grid core.
//!
//! Multiple holders (the event loop, renderer glue, scripted drivers)
//! share one simulation; the last release tears down cell storage and
//! generation buffers deterministically. A single control thread drives
//! all mutation - the interior `RefCell` enforces that discipline at
//! runtime instead of introducing locks the scheduling model does not
//! need.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::core::error::EngineError;
use crate::domain::cell::Cell;
use crate::domain::circuit::Circuit;
use crate::spatial::vec2::Vec2;
use crate::systems::partition::Parallelism;

use super::{GridCore, PerfStats};

#[derive(Clone)]
pub struct GridHandle {
    inner: Rc<RefCell<GridCore>>,
}

impl GridHandle {
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        Ok(Self::from_core(GridCore::new(width, height)?))
    }

    pub fn with_parallelism(
        width: u32,
        height: u32,
        parallelism: Parallelism,
    ) -> Result<Self, EngineError> {
        Ok(Self::from_core(GridCore::with_parallelism(
            width, height, parallelism,
        )?))
    }

    pub fn from_circuit(circuit: &Circuit) -> Result<Self, EngineError> {
        Ok(Self::from_core(GridCore::from_circuit(circuit)?))
    }

    fn from_core(core: GridCore) -> Self {
        Self { inner: Rc::new(RefCell::new(core)) }
    }

    /// Number of live holders sharing this grid.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Read access to the core for callers that need more than the
    /// delegated API (the renderer reads cells and uniforms through
    /// this).
    pub fn core(&self) -> Ref<'_, GridCore> {
        self.inner.borrow()
    }

    // === Simulation ===

    pub fn step(&self, generations: u32) {
        self.inner.borrow_mut().step(generations);
    }

    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation()
    }

    // === Cells ===

    pub fn width(&self) -> u32 {
        self.inner.borrow().width()
    }

    pub fn height(&self) -> u32 {
        self.inner.borrow().height()
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Cell {
        self.inner.borrow().get_cell(x, y)
    }

    pub fn set_cell(&self, x: i32, y: i32, cell: Cell) {
        self.inner.borrow_mut().set_cell(x, y, cell);
    }

    pub fn paint_radius(&self, cx: i32, cy: i32, radius: i32, cell: Cell) {
        self.inner.borrow_mut().paint_radius(cx, cy, radius, cell);
    }

    pub fn erase_radius(&self, cx: i32, cy: i32, radius: i32) {
        self.inner.borrow_mut().erase_radius(cx, cy, radius);
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.inner.borrow_mut().resize(width, height);
    }

    pub fn load_sub_circuit(
        &self,
        dst_x: i32,
        dst_y: i32,
        src_x: u32,
        src_y: u32,
        source: &Circuit,
    ) -> Result<(), EngineError> {
        self.inner
            .borrow_mut()
            .load_sub_circuit(dst_x, dst_y, src_x, src_y, source)
    }

    // === View transform ===

    pub fn set_view_position(&self, x: f32, y: f32) {
        self.inner
            .borrow_mut()
            .transform_mut()
            .set_position(Vec2::new(x, y));
    }

    pub fn set_view_scale(&self, scale: f32) {
        self.inner.borrow_mut().transform_mut().set_scale(scale);
    }

    pub fn view_position(&self) -> (f32, f32) {
        let pos = self.inner.borrow().transform().position();
        (pos.x, pos.y)
    }

    pub fn view_scale(&self) -> f32 {
        self.inner.borrow().transform().scale()
    }

    /// Consume the "transform changed since last query" signal.
    pub fn view_changed(&self) -> bool {
        self.inner.borrow_mut().transform_mut().take_dirty()
    }

    pub fn zoom(&self, delta: f32, focus_x: f32, focus_y: f32) {
        self.inner
            .borrow_mut()
            .transform_mut()
            .zoom(delta, Vec2::new(focus_x, focus_y));
    }

    pub fn center_cell(&self, x: u32, y: u32, viewport_w: f32, viewport_h: f32) {
        self.inner
            .borrow_mut()
            .transform_mut()
            .center_cell(x, y, Vec2::new(viewport_w, viewport_h));
    }

    pub fn pick_cell(&self, px: f32, py: f32) -> (u32, u32) {
        self.inner.borrow().pick_cell(px, py)
    }

    // === Settings & metrics ===

    pub fn set_worker_limit(&self, max_workers: usize) {
        self.inner.borrow_mut().set_worker_limit(max_workers);
    }

    pub fn enable_perf_metrics(&self, enabled: bool) {
        self.inner.borrow_mut().enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.inner.borrow().get_perf_stats()
    }

    // === Renderer interface ===

    pub fn cells_ptr(&self) -> *const u8 {
        self.inner.borrow().cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.inner.borrow().cells_len()
    }

    pub fn extract_pixels(&self) -> *const u32 {
        self.inner.borrow_mut().extract_pixels()
    }

    pub fn pixels_len(&self) -> usize {
        self.inner.borrow().pixels_len()
    }

    pub fn palette_manifest_json(&self) -> String {
        self.inner.borrow().palette_manifest_json()
    }
}
