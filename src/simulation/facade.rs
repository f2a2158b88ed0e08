use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::domain::cell::Cell;
use crate::domain::circuit::Circuit;

use super::{GridHandle, PerfStats};

#[cfg(target_arch = "wasm32")]
fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// Off the wasm target (e.g. native `cargo test`), `JsValue::from_str` calls a
// wasm-only intrinsic that panics. Mirror the native fallback idiom used by
// `PerfTimer`: keep the wasm behavior above, and carry the error as an `Err`
// without touching the JS runtime so native tests can exercise error paths.
#[cfg(not(target_arch = "wasm32"))]
fn to_js(err: EngineError) -> JsValue {
    let _ = err.to_string();
    JsValue::NULL
}

#[wasm_bindgen]
pub struct AbiLayout {
    cells_ptr: u32,
    cells_len_elements: u32,
    cells_len_bytes: u32,
    pixels_ptr: u32,
    pixels_len_elements: u32,
    pixels_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn cells_ptr(&self) -> u32 { self.cells_ptr }
    #[wasm_bindgen(getter)]
    pub fn cells_len_elements(&self) -> u32 { self.cells_len_elements }
    #[wasm_bindgen(getter)]
    pub fn cells_len_bytes(&self) -> u32 { self.cells_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn pixels_ptr(&self) -> u32 { self.pixels_ptr }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_elements(&self) -> u32 { self.pixels_len_elements }
    #[wasm_bindgen(getter)]
    pub fn pixels_len_bytes(&self) -> u32 { self.pixels_len_bytes }
}

/// JS-facing wrapper around a shared grid handle.
#[wasm_bindgen]
pub struct World {
    handle: GridHandle,
}

#[wasm_bindgen]
impl World {
    /// Create an empty grid with the given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        Ok(Self {
            handle: GridHandle::new(width, height).map_err(to_js)?,
        })
    }

    /// Parse a circuit JSON document and build a grid around it
    #[wasm_bindgen(js_name = fromCircuitJson)]
    pub fn from_circuit_json(json: &str) -> Result<World, JsValue> {
        let circuit = Circuit::from_json(json).map_err(to_js)?;
        Ok(Self {
            handle: GridHandle::from_circuit(&circuit).map_err(to_js)?,
        })
    }

    /// Another owner of the same grid; storage is freed when the last
    /// holder goes away
    #[wasm_bindgen(js_name = cloneHandle)]
    pub fn clone_handle(&self) -> World {
        World { handle: self.handle.clone() }
    }

    /// Number of live holders sharing the grid
    pub fn holders(&self) -> usize {
        self.handle.holders()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.handle.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.handle.height() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.handle.generation() }

    /// Advance the simulation by `generations` back-to-back steps
    pub fn step(&mut self, generations: u32) {
        self.handle.step(generations);
    }

    /// Write one cell; returns false for an unknown state byte.
    /// Border and out-of-range writes drop silently.
    pub fn set_cell(&mut self, x: i32, y: i32, state: u8) -> bool {
        let Some(cell) = Cell::from_raw(state) else {
            return false;
        };
        self.handle.set_cell(x, y, cell);
        true
    }

    /// State at a position; `Empty` outside the interior
    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.handle.get_cell(x, y) as u8
    }

    /// Paint a filled circle of cells (brush)
    pub fn paint_radius(&mut self, cx: i32, cy: i32, radius: i32, state: u8) -> bool {
        let Some(cell) = Cell::from_raw(state) else {
            return false;
        };
        self.handle.paint_radius(cx, cy, radius, cell);
        true
    }

    /// Erase a filled circle back to empty
    pub fn erase_radius(&mut self, cx: i32, cy: i32, radius: i32) {
        self.handle.erase_radius(cx, cy, radius);
    }

    /// Drop all cells
    pub fn clear(&mut self) {
        self.handle.clear();
    }

    /// Reallocate to new dimensions, preserving the overlapping region
    pub fn resize(&mut self, width: u32, height: u32) {
        self.handle.resize(width, height);
    }

    /// Copy a parsed circuit into the grid at the given offset
    #[wasm_bindgen(js_name = loadCircuitJson)]
    pub fn load_circuit_json(&mut self, json: &str, dst_x: i32, dst_y: i32) -> Result<(), JsValue> {
        let circuit = Circuit::from_json(json).map_err(to_js)?;
        self.handle
            .load_sub_circuit(dst_x, dst_y, 0, 0, &circuit)
            .map_err(to_js)
    }

    // === Renderer interface ===

    /// Get pointer to the raw cell state array (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.handle.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.handle.cells_len()
    }

    /// Palette-map the whole frame into the pixel transfer buffer and
    /// return its pointer
    pub fn extract_pixels(&mut self) -> *const u32 {
        self.handle.extract_pixels()
    }

    pub fn pixels_len(&self) -> usize {
        self.handle.pixels_len()
    }

    pub fn palette_manifest_json(&self) -> String {
        self.handle.palette_manifest_json()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let core = self.handle.core();
        let data = core.abi_layout_data();
        AbiLayout {
            cells_ptr: data.cells_ptr as u32,
            cells_len_elements: data.cells_len as u32,
            cells_len_bytes: data.cells_len as u32,
            pixels_ptr: data.pixels_ptr as u32,
            pixels_len_elements: data.pixels_len as u32,
            pixels_len_bytes: (data.pixels_len * std::mem::size_of::<u32>()) as u32,
        }
    }

    // === View transform ===

    pub fn set_view_position(&mut self, x: f32, y: f32) {
        self.handle.set_view_position(x, y);
    }

    pub fn set_view_scale(&mut self, scale: f32) {
        self.handle.set_view_scale(scale);
    }

    pub fn view_x(&self) -> f32 { self.handle.view_position().0 }

    pub fn view_y(&self) -> f32 { self.handle.view_position().1 }

    pub fn view_scale(&self) -> f32 { self.handle.view_scale() }

    /// Consume the "transform changed since last query" signal; the
    /// renderer re-uploads its uniforms only when this returns true
    pub fn view_changed(&mut self) -> bool {
        self.handle.view_changed()
    }

    /// Focus-preserving zoom around a pixel position
    pub fn zoom(&mut self, delta: f32, focus_x: f32, focus_y: f32) {
        self.handle.zoom(delta, focus_x, focus_y);
    }

    /// Center a cell in the viewport
    pub fn center_cell(&mut self, x: u32, y: u32, viewport_w: f32, viewport_h: f32) {
        self.handle.center_cell(x, y, viewport_w, viewport_h);
    }

    /// Grid X of the cell under a pixel position
    pub fn pick_cell_x(&self, px: f32, py: f32) -> u32 {
        self.handle.pick_cell(px, py).0
    }

    /// Grid Y of the cell under a pixel position
    pub fn pick_cell_y(&self, px: f32, py: f32) -> u32 {
        self.handle.pick_cell(px, py).1
    }

    // === Settings & metrics ===

    /// Clamp the worker count used by subsequent steps (floor 1)
    pub fn set_worker_limit(&mut self, max_workers: u32) {
        self.handle.set_worker_limit(max_workers as usize);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead
    /// when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.handle.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.handle.get_perf_stats()
    }
}
