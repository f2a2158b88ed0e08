//! Row partitioning of a generation step across independent workers.
//!
//! The interior rows of the grid are divided into uniform, block-aligned
//! bands; each worker owns the writes for exactly one band per
//! generation. Reads go to the shared input buffer, so the one-row
//! neighbor overlap at band boundaries never turns into a double write.

use crate::core::error::EngineError;

/// Rows per partition block; grid heights are padded to whole blocks.
pub const BLOCK_ROWS: u32 = 8;

/// Minimum worker count the simulator requires at construction.
pub const MIN_WORKERS: usize = 2;

/// Upper bound on logical workers; past this the bands are wide enough
/// that more tasks only add scheduling overhead.
const MAX_WORKERS: usize = 256;

/// Round `height` up to whole blocks plus one spare block, so every
/// worker's row range is uniform and the border row sits inside a
/// complete block.
pub fn pad_height(height: u32, block_rows: u32) -> u32 {
    if height == 0 {
        return 0;
    }
    let b = block_rows.max(1);
    ((height + b - 1) / b) * b + b
}

/// Worker/block capability, as reported by the environment.
///
/// Workers are logical tasks scheduled onto the rayon pool (or run
/// sequentially without the `parallel` feature), not OS threads, so the
/// reported maximum is typically dozens to hundreds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parallelism {
    pub max_workers: usize,
    pub block_rows: u32,
}

impl Parallelism {
    /// Probe the host. Oversubscribes the thread count so work stealing
    /// can balance uneven bands.
    pub fn detect() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            max_workers: (threads * 16).clamp(1, MAX_WORKERS),
            block_rows: BLOCK_ROWS,
        }
    }

    /// Reject capabilities below the engine's minimum.
    pub fn validate(self) -> Result<Self, EngineError> {
        if self.max_workers < MIN_WORKERS {
            return Err(EngineError::InsufficientParallelism {
                available: self.max_workers,
                required: MIN_WORKERS,
            });
        }
        Ok(self)
    }

    /// Pad a requested grid height for this capability.
    pub fn padded_height(self, height: u32) -> u32 {
        pad_height(height, self.block_rows)
    }

    /// Rows per worker band for a grid of `height` rows. Block-aligned;
    /// the final band may run short when blocks do not divide evenly,
    /// which only narrows that worker's write range.
    pub fn band_rows(self, height: u32) -> usize {
        let block = self.block_rows.max(1) as usize;
        let blocks = ((height as usize) / block).max(1);
        let workers = blocks.min(self.max_workers.max(1));
        let blocks_per_worker = (blocks + workers - 1) / workers;
        blocks_per_worker * block
    }

    /// Effective worker count for a grid of `height` rows.
    pub fn workers_for(self, height: u32) -> usize {
        let band = self.band_rows(height);
        ((height as usize) + band - 1) / band.max(1)
    }
}
