//! Pool-first cell allocation with heap fallback.

use swarmgrid_core::Cell;
use tracing::{debug, trace};

use crate::config::{CellConfig, ConfigError};
use crate::handle::{CellHandle, CellRef, CellRefMut};
use crate::heap::HeapCell;
use crate::pool::CellPool;

/// Counters describing how cells have been allocated so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocatorStats {
    /// Cells backed by the pool.
    pub pooled: u32,
    /// Cells backed by individual heap allocations.
    pub heap: u64,
    /// Pool capacity in cells.
    pub pool_capacity: u32,
}

impl AllocatorStats {
    /// Total cells created.
    pub fn total(&self) -> u64 {
        self.pooled as u64 + self.heap
    }
}

/// Creates cells, preferring the pool until it is exhausted.
///
/// The choice is made once per cell and never revisited. Exhaustion is
/// not an error: the allocator silently switches to heap cells.
///
/// The allocator owns the pool's register buffer, so pooled handles are
/// resolved through [`cell`](Self::cell) and [`cell_mut`](Self::cell_mut).
pub struct CellAllocator {
    pool: CellPool,
    stride_count: u8,
    heap_cells: u64,
}

impl CellAllocator {
    /// Create an allocator with a freshly reserved pool.
    ///
    /// Returns `Err` if the config fails [`CellConfig::validate`].
    pub fn new(config: &CellConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            pool: CellPool::new(config)?,
            stride_count: config.stride_count,
            heap_cells: 0,
        })
    }

    /// Allocate a new zero-initialised cell.
    ///
    /// Pooled cells only claim a slot in the pre-reserved buffer; heap
    /// cells are boxed individually.
    pub fn create_cell(&mut self) -> CellHandle {
        if let Some(cell) = self.pool.claim() {
            trace!(slot = cell.slot(), "allocating cell in pool");
            return CellHandle::Pooled(cell);
        }
        if self.heap_cells == 0 {
            debug!(
                capacity = self.pool.capacity(),
                "cell pool exhausted, falling back to heap cells"
            );
        }
        self.heap_cells += 1;
        let cell = Box::new(HeapCell::new(self.stride_count));
        trace!(address = %cell.address(), "allocating cell on heap");
        CellHandle::Heap(cell)
    }

    /// Resolve `handle` for reading.
    ///
    /// `handle` must have been created by this allocator.
    pub fn cell<'a>(&'a self, handle: &'a CellHandle) -> CellRef<'a> {
        match handle {
            CellHandle::Pooled(cell) => CellRef::Pooled(&self.pool, cell),
            CellHandle::Heap(cell) => CellRef::Heap(cell),
        }
    }

    /// Resolve `handle` for reading and writing.
    pub fn cell_mut<'a>(&'a mut self, handle: &'a mut CellHandle) -> CellRefMut<'a> {
        match handle {
            CellHandle::Pooled(cell) => CellRefMut::Pooled(&mut self.pool, cell),
            CellHandle::Heap(cell) => CellRefMut::Heap(cell),
        }
    }

    /// Number of registers every created cell holds.
    pub fn stride_count(&self) -> u8 {
        self.stride_count
    }

    /// The backing pool.
    pub fn pool(&self) -> &CellPool {
        &self.pool
    }

    /// Allocation counters.
    pub fn stats(&self) -> AllocatorStats {
        AllocatorStats {
            pooled: self.pool.claimed(),
            heap: self.heap_cells,
            pool_capacity: self.pool.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use swarmgrid_core::{CellKind, CellWrite};

    fn allocator(stride_count: u8, capacity: u32) -> CellAllocator {
        CellAllocator::new(&CellConfig::new(stride_count, capacity)).unwrap()
    }

    #[test]
    fn prefers_pool_then_heap() {
        let mut alloc = allocator(3, 2);
        let kinds: Vec<CellKind> = (0..4).map(|_| alloc.create_cell().kind()).collect();
        assert_eq!(
            kinds,
            vec![
                CellKind::Pooled,
                CellKind::Pooled,
                CellKind::Heap,
                CellKind::Heap
            ]
        );
        let stats = alloc.stats();
        assert_eq!(stats.pooled, 2);
        assert_eq!(stats.heap, 2);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn both_variants_share_the_contract() {
        let mut alloc = allocator(2, 1);
        let mut pooled = alloc.create_cell();
        let mut heap = alloc.create_cell();
        assert_eq!(pooled.kind(), CellKind::Pooled);
        assert_eq!(heap.kind(), CellKind::Heap);
        for handle in [&mut pooled, &mut heap] {
            let mut cell = alloc.cell_mut(handle);
            assert_eq!(cell.stride_count(), 2);
            assert_eq!(cell.status(1), Ok(0));
            cell.set_status(1, 0x42).unwrap();
            assert_eq!(cell.status(1), Ok(0x42));
            assert!(cell.status(2).is_err());
        }
        assert_eq!(alloc.cell(&pooled).status(1), Ok(0x42));
        assert_eq!(alloc.cell(&heap).kind(), CellKind::Heap);
    }

    #[test]
    fn zero_capacity_allocates_only_heap() {
        let mut alloc = allocator(1, 0);
        assert_eq!(alloc.create_cell().kind(), CellKind::Heap);
        assert_eq!(alloc.stats().pooled, 0);
    }

    #[test]
    fn pooled_cells_share_the_reserved_buffer() {
        let mut alloc = allocator(3, 4);
        let before = alloc.pool().memory_bytes();
        let first = alloc.create_cell();
        let second = alloc.create_cell();
        assert_eq!(alloc.pool().memory_bytes(), before);
        let (a, b) = (alloc.cell(&first).address(), alloc.cell(&second).address());
        assert_eq!(b.0 - a.0, 3);
    }

    #[test]
    fn zero_strides_rejected() {
        assert!(matches!(
            CellAllocator::new(&CellConfig::new(0, 8)),
            Err(ConfigError::NoRegisters)
        ));
    }

    proptest! {
        #[test]
        fn first_n_cells_are_pooled(capacity in 0u32..32, extra in 0u32..32) {
            let mut alloc = allocator(1, capacity);
            for i in 0..capacity + extra {
                let expected = if i < capacity { CellKind::Pooled } else { CellKind::Heap };
                prop_assert_eq!(alloc.create_cell().kind(), expected);
            }
            prop_assert!(alloc.pool().claimed() <= capacity);
        }
    }
}
