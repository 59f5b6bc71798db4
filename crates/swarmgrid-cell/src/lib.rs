//! Pooled and heap-backed status cells for swarmgrid.
//!
//! Cells are created through a [`CellAllocator`], which prefers a
//! fixed-capacity [`CellPool`] and silently falls back to the heap once
//! the pool is exhausted:
//!
//! ```text
//! CellAllocator
//! ├── CellPool (one contiguous register buffer, `pool_capacity` slots)
//! │   └── CellHandle::Pooled × claimed  (slot index, no allocation)
//! └── CellHandle::Heap × overflow       (one boxed HeapCell per cell)
//! ```
//!
//! The allocator resolves either handle variant into a [`CellRef`] or
//! [`CellRefMut`], which implement [`swarmgrid_core::Cell`] and
//! [`swarmgrid_core::CellWrite`], so the grid never sees the difference.
//! Pool slots are never reclaimed; the claimed counter only increases.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod config;
pub mod handle;
pub mod heap;
pub mod pool;

pub use allocator::{AllocatorStats, CellAllocator};
pub use config::{CellConfig, ConfigError};
pub use handle::{CellHandle, CellRef, CellRefMut};
pub use heap::HeapCell;
pub use pool::{CellPool, PooledCell};
