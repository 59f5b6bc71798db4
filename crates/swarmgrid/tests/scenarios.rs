use swarmgrid::prelude::*;

fn accessor(size: u16, pool: u32) -> StatusAccessor {
    StatusAccessor::from_config(GridConfig {
        initial_size: size,
        cells: CellConfig::new(3, pool),
    })
    .unwrap()
}

#[test]
fn fresh_grid_reads_false() {
    let mut acc = accessor(150, 22_500);
    let resp = acc
        .read_flag(&FlagRequest {
            x: 0,
            y: 0,
            stride: 0,
            mask: 0x01,
        })
        .unwrap();
    assert_eq!(resp, FlagResponse { data: false });
}

#[test]
fn write_one_then_read_one() {
    let mut acc = accessor(150, 22_500);
    let ack = acc
        .write(&WriteRequest {
            x: 0,
            y: 0,
            stride: 0,
            offset: 0,
            mask: 0x01,
            data: 1,
        })
        .unwrap();
    assert_eq!(ack, WriteResponse { success: true });
    let resp = acc
        .read_field(&FieldRequest {
            x: 0,
            y: 0,
            stride: 0,
            offset: 0,
            mask: 0x01,
        })
        .unwrap();
    assert_eq!(resp, FieldResponse { data: 1 });
}

#[test]
fn pooled_and_heap_cells_answer_alike() {
    // 2x2 fills the pool; the cells added by growth come from the heap.
    let mut acc = accessor(2, 4);
    let pooled = GridCoord::new(0, 0);
    let heap = GridCoord::new(5, 5);
    acc.grid_mut().check_bounds(heap);
    assert_eq!(acc.grid().cell(pooled).unwrap().kind(), CellKind::Pooled);
    assert_eq!(acc.grid().cell(heap).unwrap().kind(), CellKind::Heap);

    for c in [pooled, heap] {
        let field = StatusField::new(1, 3, 0x08);
        acc.grid_mut().set_field(c, field, 1).unwrap();
        assert_eq!(acc.grid_mut().get_field(c, field), Ok(1));
        assert_eq!(acc.grid_mut().get_flag(c, 1, 0x08), Ok(true));
        assert_eq!(
            acc.grid_mut().get_field(c, StatusField::new(3, 0, 0x01)),
            Err(GridError::Cell(CellError::InvalidStride {
                stride: 3,
                stride_count: 3
            }))
        );
    }
}

#[test]
fn multi_bit_write_toggles_only_the_offset_bit() {
    let mut acc = accessor(2, 4);
    let c = GridCoord::new(0, 0);
    // Field spans bits 2..=3; register starts at 0.
    let field = StatusField::new(0, 2, 0x0C);
    let register = acc.grid_mut().set_field(c, field, 3).unwrap();
    assert_eq!(register, 0x04);
    assert_eq!(acc.grid_mut().get_field(c, field), Ok(1));
}

#[test]
fn search_controller_marks_cells_through_server() {
    let mut registry = HandlerRegistry::new();
    GridStatusPort::register_handlers(&mut registry).unwrap();
    let mut server = GridServer::spawn(ServiceConfig::default(), registry).unwrap();

    let port = GridStatusPort::new(server.client()).with_cell_size(1.0).unwrap();
    let mut ctl = SearchController::builder()
        .seed(12)
        .status_port(port)
        .build()
        .unwrap();
    for _ in 0..5 {
        let wp = ctl.do_work().waypoints[0];
        ctl.set_current_location(wp);
    }

    let accessor = server.shutdown().unwrap();
    let stats = accessor.grid().allocator_stats();
    assert_eq!(stats.heap, 0);
    let visited = (-6..=6i8)
        .flat_map(|x| (-6..=6i8).map(move |y| GridCoord::new(x, y)))
        .filter(|&c| accessor.grid().cell(c).unwrap().status(0) == Ok(1))
        .count();
    assert!(visited >= 1);
}
