//! Heap allocation accounting for cell creation.
//!
//! Installs a counting global allocator. Counts are per thread so the
//! test harness running other work concurrently cannot skew them.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use swarmgrid_cell::{CellAllocator, CellConfig, CellHandle};
use swarmgrid_core::CellKind;

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let _ = ALLOCATIONS.try_with(|n| n.set(n.get() + 1));
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn allocations() -> usize {
    ALLOCATIONS.with(|n| n.get())
}

/// Create `count` cells into pre-reserved storage and return the number
/// of heap allocations made while doing so.
fn allocations_for(allocator: &mut CellAllocator, count: usize) -> (usize, Vec<CellHandle>) {
    let mut cells = Vec::with_capacity(count);
    let before = allocations();
    for _ in 0..count {
        cells.push(allocator.create_cell());
    }
    (allocations() - before, cells)
}

#[test]
fn pooled_cells_do_not_allocate() {
    let mut allocator = CellAllocator::new(&CellConfig::new(3, 101)).unwrap();
    // Warm-up registers the tracing callsites outside the measured window.
    let _first = allocator.create_cell();

    let (allocated, cells) = allocations_for(&mut allocator, 100);
    assert!(cells.iter().all(|c| c.kind() == CellKind::Pooled));
    assert_eq!(allocated, 0, "heap allocations for 100 pooled cells");
    assert!(allocator.pool().is_full());
}

#[test]
fn heap_cells_allocate_once_each() {
    let mut allocator = CellAllocator::new(&CellConfig::new(3, 0)).unwrap();
    let _first = allocator.create_cell();

    let (allocated, cells) = allocations_for(&mut allocator, 50);
    assert!(cells.iter().all(|c| c.kind() == CellKind::Heap));
    assert_eq!(allocated, 50);
}
