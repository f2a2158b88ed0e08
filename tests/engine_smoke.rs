use wireworld_engine::cell::Cell;
use wireworld_engine::World;

#[test]
fn engine_smoke_electron_travels_a_long_wire() {
    let mut world = World::new(128, 64).unwrap();
    world.enable_perf_metrics(true);

    // A long straight wire carrying one rightbound electron.
    world.set_cell(1, 30, Cell::Tail as u8);
    world.set_cell(2, 30, Cell::Head as u8);
    for x in 3..100 {
        world.set_cell(x, 30, Cell::Wire as u8);
    }

    world.step(16);

    // One cell per generation: the head sits 16 cells further right.
    assert_eq!(world.generation(), 16);
    assert_eq!(world.get_cell(18, 30), Cell::Head as u8);
    assert_eq!(world.get_cell(17, 30), Cell::Tail as u8);
    assert_eq!(world.get_cell(16, 30), Cell::Wire as u8);
    let heads = (1..100)
        .filter(|&x| world.get_cell(x, 30) == Cell::Head as u8)
        .count();
    assert_eq!(heads, 1);

    let stats = world.get_perf_stats();
    assert_eq!(stats.generations(), 16);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.workers() >= 1);
    assert!(stats.non_empty_cells() >= 99);
}

#[test]
fn engine_smoke_worker_count_does_not_change_results() {
    let build = || {
        let mut world = World::new(96, 96).unwrap();
        for x in 1..90 {
            world.set_cell(x, 40, Cell::Wire as u8);
            world.set_cell(x, 41, Cell::Wire as u8);
        }
        world.set_cell(1, 40, Cell::Head as u8);
        world.set_cell(1, 41, Cell::Tail as u8);
        world
    };

    let mut a = build();
    let mut b = build();
    a.set_worker_limit(1);
    b.set_worker_limit(64);
    a.step(32);
    b.step(32);

    for y in 0..96 {
        for x in 0..96 {
            assert_eq!(a.get_cell(x, y), b.get_cell(x, y), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn engine_smoke_handles_share_and_release() {
    let mut world = World::new(32, 32).unwrap();
    let mut other = world.clone_handle();
    assert_eq!(world.holders(), 2);

    other.set_cell(4, 4, Cell::Head as u8);
    assert_eq!(world.get_cell(4, 4), Cell::Head as u8);

    world.step(1);
    assert_eq!(other.get_cell(4, 4), Cell::Tail as u8);

    drop(other);
    assert_eq!(world.holders(), 1);
}

#[test]
fn engine_smoke_view_drives_the_renderer_contract() {
    let mut world = World::new(64, 64).unwrap();
    assert!(world.view_changed());
    assert!(!world.view_changed());

    world.set_view_scale(8.0);
    world.center_cell(10, 10, 512.0, 512.0);
    assert!(world.view_changed());
    assert_eq!(world.pick_cell_x(256.0, 256.0), 10);
    assert_eq!(world.pick_cell_y(256.0, 256.0), 10);

    world.set_cell(10, 10, Cell::Wire as u8);
    world.extract_pixels();
    assert_eq!(world.pixels_len(), world.cells_len());
    assert!(world.palette_manifest_json().contains("formatVersion"));
}
