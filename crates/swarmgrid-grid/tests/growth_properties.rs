use proptest::prelude::*;
use swarmgrid_cell::CellConfig;
use swarmgrid_core::{Cell, CellKind, GridCoord, StatusField};
use swarmgrid_grid::{Grid, GridConfig};

fn small_grid(size: u16, pool_capacity: u32) -> Grid {
    Grid::new(GridConfig {
        initial_size: size,
        cells: CellConfig::new(3, pool_capacity),
    })
    .unwrap()
}

fn coord() -> impl Strategy<Value = GridCoord> {
    (-20i8..=20, -20i8..=20).prop_map(|(x, y)| GridCoord::new(x, y))
}

#[test]
fn boundary_scenario_from_four_by_four() {
    let mut grid = small_grid(4, 64);
    assert_eq!(grid.center(), (2, 2));

    let target = GridCoord::new(3, -3);
    let field = StatusField::bit(0, 0);
    assert_eq!(grid.get_field(target, field), Ok(0));

    let (columns, rows) = grid.size();
    assert!(columns > 4, "expected a column added on the right");
    assert_eq!(rows, 5);
    assert_eq!(grid.center(), (2, 3));
    assert!(grid.cell(target).is_ok());
}

#[test]
fn pool_then_heap_across_growth() {
    // 3x3 fills 9 of 10 pool slots; the next column takes the last slot
    // and spills the remaining two cells to the heap.
    let mut grid = small_grid(3, 10);
    grid.check_bounds(GridCoord::new(2, 0));
    let stats = grid.allocator_stats();
    assert_eq!(stats.pooled, 10);
    assert_eq!(stats.heap, 2);
    assert_eq!(
        grid.cell(GridCoord::new(2, -1)).unwrap().kind(),
        CellKind::Pooled
    );
    assert_eq!(grid.cell(GridCoord::new(2, 1)).unwrap().kind(), CellKind::Heap);
}

proptest! {
    #[test]
    fn every_requested_coordinate_becomes_addressable(
        size in 1u16..6,
        coords in proptest::collection::vec(coord(), 1..16),
    ) {
        let mut grid = small_grid(size, 32);
        for &c in &coords {
            grid.get_flag(c, 0, 0x01).unwrap();
            prop_assert!(grid.contains(c));
            prop_assert!(grid.cell(c).is_ok());
        }
        // Growth is monotonic: earlier coordinates are still covered.
        for &c in &coords {
            prop_assert!(grid.contains(c));
        }
    }

    #[test]
    fn growth_preserves_existing_values(
        writes in proptest::collection::vec((coord(), 0u8..3, 0u8..8), 1..12),
        lookups in proptest::collection::vec(coord(), 1..12),
    ) {
        let mut grid = small_grid(3, 16);
        for &(c, stride, offset) in &writes {
            grid.set_field(c, StatusField::bit(stride, offset), 1).unwrap();
        }
        let before: Vec<_> = writes
            .iter()
            .map(|&(c, stride, _)| {
                let cell = grid.cell(c).unwrap();
                (cell.address(), cell.status(stride).unwrap())
            })
            .collect();

        for &p in &lookups {
            grid.check_bounds(p);
        }

        for (&(c, stride, _), &(address, register)) in writes.iter().zip(&before) {
            let cell = grid.cell(c).unwrap();
            prop_assert_eq!(cell.address(), address);
            prop_assert_eq!(cell.status(stride).unwrap(), register);
        }
    }

    #[test]
    fn single_bit_round_trip_keeps_neighbours(
        c in coord(),
        stride in 0u8..3,
        offset in 0u8..8,
        other in 0u8..8,
    ) {
        prop_assume!(offset != other);
        let mut grid = small_grid(2, 4);
        grid.set_field(c, StatusField::bit(stride, other), 1).unwrap();
        let field = StatusField::bit(stride, offset);

        grid.set_field(c, field, 1).unwrap();
        prop_assert_eq!(grid.get_field(c, field).unwrap(), 1);
        grid.set_field(c, field, 0).unwrap();
        prop_assert_eq!(grid.get_field(c, field).unwrap(), 0);

        prop_assert_eq!(grid.get_field(c, StatusField::bit(stride, other)).unwrap(), 1);
    }

    #[test]
    fn origin_tracks_front_growth(dx in -40i8..0, dy in -40i8..0) {
        let mut grid = small_grid(4, 0);
        let growth = grid.check_bounds(GridCoord::new(dx, dy));
        let (cx, cy) = grid.center();
        prop_assert_eq!(cx, 2 + growth.columns_front);
        prop_assert_eq!(cy, 2 + growth.rows_front);
        prop_assert_eq!(grid.x_axis().span().0, dx.min(-2) as isize);
        prop_assert_eq!(grid.y_axis().span().0, dy.min(-2) as isize);
    }
}
