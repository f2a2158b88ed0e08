use super::*;
use crate::domain::cell::Cell;
use crate::systems::partition::Parallelism;

const TEST_PAR: Parallelism = Parallelism { max_workers: 8, block_rows: 4 };

fn core(width: u32, height: u32) -> GridCore {
    GridCore::with_parallelism(width, height, TEST_PAR).unwrap()
}

/// Deterministic mixed seed touching every state, for comparison tests.
fn seed_soup(core: &mut GridCore) {
    for y in 1..core.height() as i32 - 1 {
        for x in 1..core.width() as i32 - 1 {
            let raw = ((x * 7 + y * 13) % 9) as u8;
            core.set_cell(x, y, Cell::from_raw(raw).unwrap());
        }
    }
}

#[test]
fn interior_set_get_roundtrip() {
    let mut world = core(10, 10);
    for y in 1..world.height() as i32 - 1 {
        for x in 1..world.width() as i32 - 1 {
            world.set_cell(x, y, Cell::Wire);
            assert_eq!(world.get_cell(x, y), Cell::Wire);
        }
    }
}

#[test]
fn border_reads_empty_and_writes_drop() {
    let mut world = core(10, 10);
    let (w, h) = (world.width() as i32, world.height() as i32);
    let border: Vec<(i32, i32)> = (0..w)
        .flat_map(|x| [(x, 0), (x, h - 1)])
        .chain((0..h).flat_map(|y| [(0, y), (w - 1, y)]))
        .collect();
    for &(x, y) in &border {
        world.set_cell(x, y, Cell::Head);
        assert_eq!(world.get_cell(x, y), Cell::Empty, "border ({}, {})", x, y);
    }
    // Far out of range is the same story.
    assert_eq!(world.get_cell(-3, 5), Cell::Empty);
    assert_eq!(world.get_cell(5, 10_000), Cell::Empty);
    world.set_cell(-3, 10_000, Cell::Head);
}

#[test]
fn head_decays_to_tail_and_tail_to_wire() {
    let mut world = core(8, 8);
    world.set_cell(2, 2, Cell::Head);
    world.set_cell(4, 4, Cell::Tail);
    world.step(1);
    assert_eq!(world.get_cell(2, 2), Cell::Tail);
    assert_eq!(world.get_cell(4, 4), Cell::Wire);
}

#[test]
fn wire_fires_on_one_or_two_head_neighbors_only() {
    for heads in 0..=4 {
        let mut world = core(8, 8);
        world.set_cell(3, 3, Cell::Wire);
        // Stack heads around the wire, diagonals first.
        let spots = [(2, 2), (4, 2), (2, 4), (4, 4)];
        for &(x, y) in spots.iter().take(heads) {
            world.set_cell(x, y, Cell::Head);
        }
        world.step(1);
        let expected = if heads == 1 || heads == 2 { Cell::Head } else { Cell::Wire };
        assert_eq!(world.get_cell(3, 3), expected, "{} head neighbors", heads);
    }
}

#[test]
fn empty_and_notes_are_invariant() {
    let mut world = core(10, 10);
    world.set_cell(2, 2, Cell::Note1);
    world.set_cell(3, 3, Cell::Note5);
    // Surround a note with heads; it must not conduct.
    world.set_cell(2, 3, Cell::Head);
    world.set_cell(4, 3, Cell::Head);
    world.step(3);
    assert_eq!(world.get_cell(2, 2), Cell::Note1);
    assert_eq!(world.get_cell(3, 3), Cell::Note5);
    assert_eq!(world.get_cell(7, 7), Cell::Empty);
}

#[test]
fn signal_propagates_down_a_horizontal_wire() {
    // 5x7 grid, wire across row 3, head at the leftmost wire cell.
    let mut world = core(5, 7);
    for x in 1..=3 {
        world.set_cell(x, 3, Cell::Wire);
    }
    world.set_cell(1, 3, Cell::Head);

    world.step(1);
    assert_eq!(world.get_cell(1, 3), Cell::Tail);
    assert_eq!(world.get_cell(2, 3), Cell::Head);
    assert_eq!(world.get_cell(3, 3), Cell::Wire);

    world.step(1);
    assert_eq!(world.get_cell(1, 3), Cell::Wire);
    assert_eq!(world.get_cell(2, 3), Cell::Tail);
    assert_eq!(world.get_cell(3, 3), Cell::Head);
}

#[test]
fn batched_step_equals_sequential_steps() {
    let mut batched = core(24, 21);
    let mut sequential = core(24, 21);
    seed_soup(&mut batched);
    seed_soup(&mut sequential);

    batched.step(5);
    for _ in 0..5 {
        sequential.step(1);
    }

    assert_eq!(batched.grid().cells, sequential.grid().cells);
    assert_eq!(batched.generation(), 5);
    assert_eq!(sequential.generation(), 5);
}

#[test]
fn result_is_independent_of_worker_count() {
    let narrow = Parallelism { max_workers: 2, block_rows: 4 };
    let wide = Parallelism { max_workers: 64, block_rows: 4 };
    let mut a = GridCore::with_parallelism(32, 29, narrow).unwrap();
    let mut b = GridCore::with_parallelism(32, 29, wide).unwrap();
    seed_soup(&mut a);
    seed_soup(&mut b);

    a.step(8);
    b.step(8);
    assert_eq!(a.grid().cells, b.grid().cells);

    // A runtime clamp down to a single worker changes nothing either.
    let mut c = GridCore::with_parallelism(32, 29, wide).unwrap();
    seed_soup(&mut c);
    c.set_worker_limit(1);
    assert_eq!(c.parallelism().max_workers, 1);
    c.step(8);
    assert_eq!(a.grid().cells, c.grid().cells);
}

#[test]
fn step_zero_and_empty_grid_are_no_ops() {
    let mut world = core(10, 10);
    world.set_cell(2, 2, Cell::Head);
    let before = world.grid().cells.clone();
    world.step(0);
    assert_eq!(world.grid().cells, before);
    assert_eq!(world.generation(), 0);

    let mut empty = core(0, 16);
    assert_eq!(empty.width(), 0);
    assert_eq!(empty.cells_len(), 0);
    empty.step(10);
    assert_eq!(empty.get_cell(1, 1), Cell::Empty);
}

#[test]
fn edits_are_visible_to_the_next_step() {
    let mut world = core(8, 8);
    world.set_cell(2, 2, Cell::Wire);
    world.set_cell(3, 2, Cell::Wire);
    world.step(2); // nothing conducts yet

    world.set_cell(2, 2, Cell::Head);
    world.step(1);
    assert_eq!(world.get_cell(2, 2), Cell::Tail);
    assert_eq!(world.get_cell(3, 2), Cell::Head);
}

#[test]
fn resize_preserves_the_overlapping_region() {
    let mut world = core(10, 10);
    world.set_cell(2, 3, Cell::Wire);
    world.set_cell(4, 5, Cell::Head);
    world.set_cell(8, 8, Cell::Note2);

    world.resize(20, 25);
    assert_eq!(world.get_cell(2, 3), Cell::Wire);
    assert_eq!(world.get_cell(4, 5), Cell::Head);
    assert_eq!(world.get_cell(8, 8), Cell::Note2);
    assert_eq!(world.get_cell(15, 20), Cell::Empty);

    // Shrinking truncates without corrupting what is kept.
    world.resize(6, 6);
    assert_eq!(world.get_cell(2, 3), Cell::Wire);
    assert_eq!(world.get_cell(4, 5), Cell::Head);
    assert_eq!(world.get_cell(8, 8), Cell::Empty);

    // Buffers were reinitialized: the surviving head still conducts.
    world.set_cell(3, 5, Cell::Wire);
    world.step(1);
    assert_eq!(world.get_cell(4, 5), Cell::Tail);
    assert_eq!(world.get_cell(3, 5), Cell::Head);
}

#[test]
fn resize_to_zero_clears_the_grid() {
    let mut world = core(10, 10);
    world.set_cell(2, 2, Cell::Wire);
    world.resize(0, 7);
    assert_eq!(world.width(), 0);
    assert_eq!(world.height(), 0);
    assert_eq!(world.cells_len(), 0);

    let mut world = core(10, 10);
    world.clear();
    assert_eq!(world.cells_len(), 0);
    assert_eq!(world.generation(), 0);
    world.step(3); // still a no-op
}

#[test]
fn load_clips_to_the_interior() {
    let mut world = core(12, 12);
    let source = Circuit::new(5, 5, vec![Cell::Wire as u8; 25]).unwrap();
    let dst_x = world.width() as i32 - 2;
    world.load_sub_circuit(dst_x, 2, 0, 0, &source).unwrap();

    // Only the single column before the border fits.
    for dy in 2..7 {
        assert_eq!(world.get_cell(dst_x, dy), Cell::Wire);
    }
    assert_eq!(world.get_cell(world.width() as i32 - 1, 2), Cell::Empty);
    assert_eq!(world.grid().non_empty_count(), 5);
}

#[test]
fn load_with_source_offset_skips_source_rows() {
    let mut world = core(12, 12);
    let mut cells = vec![Cell::Empty as u8; 9];
    cells[0] = Cell::Head as u8; // (0, 0) - skipped by the offset
    cells[4] = Cell::Wire as u8; // (1, 1)
    let source = Circuit::new(3, 3, cells).unwrap();

    world.load_sub_circuit(2, 2, 1, 1, &source).unwrap();
    assert_eq!(world.get_cell(2, 2), Cell::Wire);
    assert_eq!(world.grid().head_count(), 0);
}

#[test]
fn load_rejects_short_circuit_and_leaves_grid_untouched() {
    let mut world = core(12, 12);
    world.set_cell(2, 2, Cell::Wire);
    let before = world.grid().cells.clone();

    // Deserialized directly, so it bypassed construction validation.
    let bad: Circuit =
        serde_json::from_str(r#"{"width":9,"height":9,"cells":[6,6,6]}"#).unwrap();
    let err = world.load_sub_circuit(3, 3, 0, 0, &bad).unwrap_err();
    assert_eq!(err, EngineError::InvalidCircuit { declared: 81, actual: 3 });
    assert_eq!(world.grid().cells, before);
}

#[test]
fn from_circuit_lands_in_the_interior() {
    let circuit = Circuit::new(
        3,
        1,
        vec![Cell::Head as u8, Cell::Wire as u8, Cell::Wire as u8],
    )
    .unwrap();
    let mut world = GridCore::from_circuit_with_parallelism(&circuit, TEST_PAR).unwrap();
    assert_eq!(world.width(), 5);
    assert_eq!(world.get_cell(1, 1), Cell::Head);
    assert_eq!(world.get_cell(2, 1), Cell::Wire);
    assert_eq!(world.get_cell(3, 1), Cell::Wire);

    world.step(1);
    assert_eq!(world.get_cell(1, 1), Cell::Tail);
    assert_eq!(world.get_cell(2, 1), Cell::Head);
}

#[test]
fn construction_requires_two_workers() {
    let err = GridCore::with_parallelism(8, 8, Parallelism { max_workers: 1, block_rows: 4 })
        .unwrap_err();
    assert!(matches!(err, EngineError::InsufficientParallelism { available: 1, .. }));
}

#[test]
fn brush_paints_and_erases_through_the_border_checks() {
    let mut world = core(16, 16);
    world.paint_radius(2, 2, 2, Cell::Wire);
    assert_eq!(world.get_cell(2, 2), Cell::Wire);
    assert_eq!(world.get_cell(2, 4), Cell::Wire);
    // The brush crossed the border; border cells stayed empty.
    assert_eq!(world.get_cell(2, 0), Cell::Empty);
    assert_eq!(world.get_cell(0, 2), Cell::Empty);

    world.erase_radius(2, 2, 2);
    assert_eq!(world.grid().non_empty_count(), 0);
}

#[test]
fn perf_stats_populate_when_enabled() {
    let mut world = core(32, 32);
    world.set_cell(2, 2, Cell::Head);
    world.set_cell(3, 2, Cell::Wire);
    world.enable_perf_metrics(true);
    world.step(4);

    let stats = world.get_perf_stats();
    assert_eq!(stats.generations(), 4);
    assert!(stats.workers() >= 1);
    assert_eq!(stats.grid_cells(), world.cells_len() as u32);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.non_empty_cells() >= 2);
}

#[test]
fn extract_pixels_maps_the_palette() {
    let mut world = core(8, 8);
    world.set_cell(2, 2, Cell::Head);
    world.extract_pixels();
    let idx = (2 * world.width() + 2) as usize;
    assert_eq!(
        world.render.pixel_buffer[idx],
        world.palette.color_for_cell(Cell::Head)
    );
    assert_eq!(
        world.render.pixel_buffer[0],
        world.palette.color_for_cell(Cell::Empty)
    );
    assert_eq!(world.pixels_len(), world.cells_len());
}

#[test]
fn handle_shares_one_grid_between_holders() {
    let handle = GridHandle::with_parallelism(10, 10, TEST_PAR).unwrap();
    let other = handle.clone();
    assert_eq!(handle.holders(), 2);

    other.set_cell(2, 2, Cell::Head);
    assert_eq!(handle.get_cell(2, 2), Cell::Head);

    handle.step(1);
    assert_eq!(other.get_cell(2, 2), Cell::Tail);

    drop(other);
    assert_eq!(handle.holders(), 1);
}

#[test]
fn handle_exposes_the_view_transform() {
    let handle = GridHandle::with_parallelism(64, 64, TEST_PAR).unwrap();
    assert!(handle.view_changed()); // initial state counts as a change
    assert!(!handle.view_changed());

    handle.set_view_scale(4.0);
    handle.set_view_position(-8.0, -8.0);
    assert!(handle.view_changed());
    assert_eq!(handle.pick_cell(0.0, 0.0), (2, 2));

    handle.zoom(2.0, 0.0, 0.0);
    assert_eq!(handle.view_scale(), 6.0);
    assert_eq!(handle.pick_cell(0.0, 0.0), (2, 2));
}
