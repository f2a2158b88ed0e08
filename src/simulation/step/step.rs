use crate::domain::cell::Cell;
use crate::systems::rule;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{GridCore, PerfTimer};

pub(super) fn step(core: &mut GridCore, generations: u32) {
    if generations == 0 || core.grid.size() == 0 {
        return;
    }

    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.generations = generations;
        core.perf_stats.grid_cells = core.grid.size() as u32;
        core.perf_stats.workers =
            core.sim.parallelism.workers_for(core.grid.height()) as u32;
        core.perf_stats.band_rows =
            core.sim.parallelism.band_rows(core.grid.height()) as u32;
        // cells + in + out (1 byte each) and the u32 pixel buffer
        core.perf_stats.memory_bytes = (core.grid.size() as u32).saturating_mul(7);
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let width = core.grid.width() as usize;
    let height = core.grid.height() as usize;
    let band_cells = core.sim.parallelism.band_rows(core.grid.height()) * width;

    let mut kernel_ms = 0.0;
    for _ in 0..generations {
        let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
        let (input, output) = core.sim.buffers();
        advance_generation(input, output, width, height, band_cells);
        if let Some(t0) = t0 {
            kernel_ms += t0.elapsed_ms();
        }

        // out -> in copy before the next batch of workers launches:
        // this is the synchronization barrier between generations.
        core.sim.input.copy_from_slice(&core.sim.output);
    }

    // Host-visible sync once per batch, amortized over all generations.
    let sync_t = if perf_on { Some(PerfTimer::start()) } else { None };
    core.grid.cells.copy_from_slice(&core.sim.input);
    core.generation += u64::from(generations);

    if perf_on {
        core.perf_stats.kernel_ms = kernel_ms;
        if let Some(t0) = sync_t {
            core.perf_stats.sync_ms = t0.elapsed_ms();
        }
        core.perf_stats.non_empty_cells = core.grid.non_empty_count() as u32;
        core.perf_stats.head_cells = core.grid.head_count() as u32;
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}

/// One generation: every worker advances one disjoint row band of the
/// output buffer while reading the shared input buffer. Write ranges
/// cannot overlap (each worker holds a distinct `&mut` band); the
/// one-row neighbor reads past a band edge hit the immutable input, so
/// no synchronization is needed inside a generation.
fn advance_generation(
    input: &[Cell],
    output: &mut [Cell],
    width: usize,
    height: usize,
    band_cells: usize,
) {
    let band_rows = band_cells / width;

    #[cfg(feature = "parallel")]
    {
        output
            .par_chunks_mut(band_cells)
            .enumerate()
            .for_each(|(i, band)| {
                rule::advance_band(input, band, width, height, i * band_rows);
            });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, band) in output.chunks_mut(band_cells).enumerate() {
            rule::advance_band(input, band, width, height, i * band_rows);
        }
    }
}
