//! Wireworld Engine - cellular automaton simulation core in WASM
//!
//! Architecture:
//! - core/        - Cross-cutting utilities and the error taxonomy
//! - spatial/     - Cell grid and the view transform
//! - domain/      - Cell states, circuits, palette
//! - systems/     - Transition rule and worker partitioning
//! - simulation/  - Orchestration and the public API

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (keeps internal/external paths short)
pub use crate::core::error;
pub use domain::cell;
pub use domain::circuit;
pub use domain::palette;
pub use spatial::grid;
pub use spatial::transform;
pub use systems::partition;
pub use systems::rule;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Wireworld WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::EngineError;
pub use domain::cell::Cell;
pub use simulation::{GridHandle, World};

// Export cell state encodings for JS
#[wasm_bindgen]
pub fn cell_empty() -> u8 { Cell::Empty as u8 }
#[wasm_bindgen]
pub fn cell_note1() -> u8 { Cell::Note1 as u8 }
#[wasm_bindgen]
pub fn cell_note2() -> u8 { Cell::Note2 as u8 }
#[wasm_bindgen]
pub fn cell_note3() -> u8 { Cell::Note3 as u8 }
#[wasm_bindgen]
pub fn cell_note4() -> u8 { Cell::Note4 as u8 }
#[wasm_bindgen]
pub fn cell_note5() -> u8 { Cell::Note5 as u8 }
#[wasm_bindgen]
pub fn cell_wire() -> u8 { Cell::Wire as u8 }
#[wasm_bindgen]
pub fn cell_tail() -> u8 { Cell::Tail as u8 }
#[wasm_bindgen]
pub fn cell_head() -> u8 { Cell::Head as u8 }
