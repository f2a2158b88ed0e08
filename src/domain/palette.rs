//! Palette mapping between image colors and cell states.
//!
//! Pure lookup both ways; only the circuit loader and the frame
//! extractor touch it. The grid and the simulator are palette-agnostic.
//! Colors are ABGR packed (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
//! so pixel buffers can be copied straight into a canvas.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::error::EngineError;
use crate::domain::cell::{Cell, CELL_STATES};

/// Background color for `Empty`, ABGR.
pub(crate) const BG_COLOR: u32 = 0xFF0A0A0A;

// Classic wireworld scheme: copper wire, blue electron head, red tail,
// plus five muted annotation tones.
const DEFAULT_COLORS: [(Cell, u32); CELL_STATES] = [
    (Cell::Empty, BG_COLOR),
    (Cell::Note1, 0xFF303030),
    (Cell::Note2, 0xFF305030),
    (Cell::Note3, 0xFF303050),
    (Cell::Note4, 0xFF503030),
    (Cell::Note5, 0xFF305050),
    (Cell::Wire, 0xFF00C8FF),
    (Cell::Tail, 0xFF0040FF),
    (Cell::Head, 0xFFFF8000),
];

pub struct Palette {
    cell_by_color: HashMap<u32, Cell>,
    color_by_cell: [u32; CELL_STATES],
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_entries(&DEFAULT_COLORS)
    }
}

impl Palette {
    pub fn from_entries(entries: &[(Cell, u32)]) -> Self {
        let mut cell_by_color = HashMap::with_capacity(entries.len());
        let mut color_by_cell = [BG_COLOR; CELL_STATES];
        for &(cell, color) in entries {
            cell_by_color.insert(color, cell);
            color_by_cell[cell as usize] = color;
        }
        Self { cell_by_color, color_by_cell }
    }

    /// Map a pixel color to its cell state.
    pub fn cell_for_color(&self, color: u32) -> Result<Cell, EngineError> {
        self.cell_by_color
            .get(&color)
            .copied()
            .ok_or(EngineError::UnknownColor { color })
    }

    #[inline]
    pub fn color_for_cell(&self, cell: Cell) -> u32 {
        self.color_by_cell[cell as usize]
    }

    /// JSON manifest of the state/color table, for the JS renderer.
    pub fn manifest_json(&self) -> String {
        let entries: Vec<PaletteManifestEntry> = self
            .color_by_cell
            .iter()
            .enumerate()
            .map(|(state, &color)| PaletteManifestEntry {
                state: state as u8,
                color,
            })
            .collect();
        let out = PaletteManifest {
            format_version: 1,
            entries,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteManifest {
    format_version: u32,
    entries: Vec<PaletteManifestEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PaletteManifestEntry {
    state: u8,
    color: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_every_state() {
        let palette = Palette::default();
        for raw in 0..CELL_STATES as u8 {
            let cell = Cell::from_raw(raw).unwrap();
            let color = palette.color_for_cell(cell);
            assert_eq!(palette.cell_for_color(color).unwrap(), cell);
        }
    }

    #[test]
    fn unknown_color_is_reported() {
        let palette = Palette::default();
        assert_eq!(
            palette.cell_for_color(0x12345678),
            Err(EngineError::UnknownColor { color: 0x12345678 })
        );
    }

    #[test]
    fn manifest_lists_all_states() {
        let manifest = Palette::default().manifest_json();
        assert!(manifest.contains("\"formatVersion\":1"));
        for state in 0..CELL_STATES {
            assert!(manifest.contains(&format!("\"state\":{}", state)));
        }
    }
}
