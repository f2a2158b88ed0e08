//! Circuit payloads - serialized rectangular blocks of cell states.
//!
//! A circuit is the interchange value between the engine and the image
//! loader on the JS side: `{ width, height, cells }` with row-major raw
//! state bytes. The engine never decodes images itself; it either
//! receives a parsed JSON document or a pixel buffer plus a palette.

use serde::{Deserialize, Serialize};

use crate::core::error::EngineError;
use crate::domain::cell::Cell;
use crate::domain::palette::Palette;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Circuit {
    /// Build a circuit from raw state bytes. Fails with `InvalidCircuit`
    /// when the payload is shorter than the declared dimensions.
    pub fn new(width: u32, height: u32, cells: Vec<u8>) -> Result<Self, EngineError> {
        let circuit = Self { width, height, cells };
        circuit.validate()?;
        Ok(circuit)
    }

    /// Parse a JSON document produced by the loader.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let circuit: Circuit = serde_json::from_str(json)
            .map_err(|e| EngineError::MalformedCircuit { detail: e.to_string() })?;
        circuit.validate()?;
        Ok(circuit)
    }

    /// Decode an image's pixel buffer through a palette. This is the
    /// glue consumed by the (excluded) image decoder: it hands us raw
    /// ABGR pixels, we hand back cell states or the first color the
    /// palette does not know.
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: &[u32],
        palette: &Palette,
    ) -> Result<Self, EngineError> {
        let declared = (width as u64 * height as u64) as usize;
        if pixels.len() < declared {
            return Err(EngineError::InvalidCircuit {
                declared,
                actual: pixels.len(),
            });
        }
        let mut cells = Vec::with_capacity(declared);
        for &pixel in &pixels[..declared] {
            cells.push(palette.cell_for_color(pixel)? as u8);
        }
        Ok(Self { width, height, cells })
    }

    /// Check the declared dimensions against the payload length.
    pub fn validate(&self) -> Result<(), EngineError> {
        let declared = (self.width as u64 * self.height as u64) as usize;
        if self.cells.len() < declared {
            return Err(EngineError::InvalidCircuit {
                declared,
                actual: self.cells.len(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// State at `(x, y)`. Undecodable bytes read as `Empty`, the same
    /// tolerance the grid applies to out-of-range coordinates.
    #[inline]
    pub fn cell(&self, x: u32, y: u32) -> Cell {
        debug_assert!(x < self.width && y < self.height);
        let idx = (y * self.width + x) as usize;
        Cell::from_raw(self.cells[idx]).unwrap_or(Cell::Empty)
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let json = r#"{"width":2,"height":2,"cells":[0,6,7,8]}"#;
        let circuit = Circuit::from_json(json).unwrap();
        assert_eq!(circuit.width(), 2);
        assert_eq!(circuit.cell(1, 0), Cell::Wire);
        assert_eq!(circuit.cell(0, 1), Cell::Tail);
        assert_eq!(circuit.cell(1, 1), Cell::Head);
    }

    #[test]
    fn short_payload_is_invalid() {
        let err = Circuit::new(3, 3, vec![0; 8]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidCircuit { declared: 9, actual: 8 }
        );
    }

    #[test]
    fn garbage_json_is_malformed() {
        assert!(matches!(
            Circuit::from_json("not json"),
            Err(EngineError::MalformedCircuit { .. })
        ));
    }

    #[test]
    fn unknown_state_bytes_read_as_empty() {
        let circuit = Circuit::new(2, 1, vec![6, 42]).unwrap();
        assert_eq!(circuit.cell(0, 0), Cell::Wire);
        assert_eq!(circuit.cell(1, 0), Cell::Empty);
    }

    #[test]
    fn from_pixels_maps_through_palette() {
        let palette = Palette::default();
        let pixels = [
            palette.color_for_cell(Cell::Wire),
            palette.color_for_cell(Cell::Head),
        ];
        let circuit = Circuit::from_pixels(2, 1, &pixels, &palette).unwrap();
        assert_eq!(circuit.cell(0, 0), Cell::Wire);
        assert_eq!(circuit.cell(1, 0), Cell::Head);
    }

    #[test]
    fn from_pixels_rejects_unknown_color() {
        let palette = Palette::default();
        let err = Circuit::from_pixels(1, 1, &[0xDEADBEEF], &palette).unwrap_err();
        assert_eq!(err, EngineError::UnknownColor { color: 0xDEADBEEF });
    }
}
