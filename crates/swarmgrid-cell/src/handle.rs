//! Owned cell handles and the borrowed views that resolve them.
//!
//! The grid stores a [`CellHandle`] per position. A pooled handle is
//! just a slot index, so it cannot answer status queries on its own: it
//! is resolved through the [`CellAllocator`](crate::CellAllocator) into
//! a [`CellRef`] or [`CellRefMut`], which implement the
//! [`Cell`]/[`CellWrite`] contract for both variants.

use swarmgrid_core::{Cell, CellAddress, CellError, CellKind, CellWrite};

use crate::heap::HeapCell;
use crate::pool::{CellPool, PooledCell};

/// Exclusive ownership of one grid cell.
#[derive(Debug)]
pub enum CellHandle {
    /// A slot in the allocator's pool.
    Pooled(PooledCell),
    /// An individually allocated cell.
    Heap(Box<HeapCell>),
}

impl CellHandle {
    /// Storage strategy backing this handle.
    pub fn kind(&self) -> CellKind {
        match self {
            Self::Pooled(_) => CellKind::Pooled,
            Self::Heap(_) => CellKind::Heap,
        }
    }
}

/// Shared view of a cell of either variant.
pub enum CellRef<'a> {
    /// A pooled slot together with the pool holding its registers.
    Pooled(&'a CellPool, &'a PooledCell),
    /// A heap cell.
    Heap(&'a HeapCell),
}

impl Cell for CellRef<'_> {
    fn status(&self, stride: u8) -> Result<u8, CellError> {
        match self {
            Self::Pooled(pool, cell) => pool.status(cell, stride),
            Self::Heap(cell) => cell.status(stride),
        }
    }

    fn address(&self) -> CellAddress {
        match self {
            Self::Pooled(pool, cell) => pool.address(cell),
            Self::Heap(cell) => cell.address(),
        }
    }

    fn stride_count(&self) -> u8 {
        match self {
            Self::Pooled(pool, _) => pool.stride_count(),
            Self::Heap(cell) => cell.stride_count(),
        }
    }

    fn kind(&self) -> CellKind {
        match self {
            Self::Pooled(..) => CellKind::Pooled,
            Self::Heap(_) => CellKind::Heap,
        }
    }
}

/// Exclusive view of a cell of either variant.
pub enum CellRefMut<'a> {
    /// A pooled slot together with the pool holding its registers.
    Pooled(&'a mut CellPool, &'a PooledCell),
    /// A heap cell.
    Heap(&'a mut HeapCell),
}

impl Cell for CellRefMut<'_> {
    fn status(&self, stride: u8) -> Result<u8, CellError> {
        match self {
            Self::Pooled(pool, cell) => pool.status(cell, stride),
            Self::Heap(cell) => cell.status(stride),
        }
    }

    fn address(&self) -> CellAddress {
        match self {
            Self::Pooled(pool, cell) => pool.address(cell),
            Self::Heap(cell) => cell.address(),
        }
    }

    fn stride_count(&self) -> u8 {
        match self {
            Self::Pooled(pool, _) => pool.stride_count(),
            Self::Heap(cell) => cell.stride_count(),
        }
    }

    fn kind(&self) -> CellKind {
        match self {
            Self::Pooled(..) => CellKind::Pooled,
            Self::Heap(_) => CellKind::Heap,
        }
    }
}

impl CellWrite for CellRefMut<'_> {
    fn set_status(&mut self, stride: u8, value: u8) -> Result<(), CellError> {
        match self {
            Self::Pooled(pool, cell) => pool.set_status(cell, stride, value),
            Self::Heap(cell) => cell.set_status(stride, value),
        }
    }
}
