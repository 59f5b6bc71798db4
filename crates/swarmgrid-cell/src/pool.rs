//! Fixed-capacity cell pool with bump-style slot allocation.
//!
//! A [`CellPool`] pre-reserves one contiguous register buffer large
//! enough for `pool_capacity` cells. Each [`claim`](CellPool::claim)
//! hands out the next slot as a [`PooledCell`] and advances a cursor.
//! Slots are never returned: once the cursor reaches capacity the pool
//! reports full and stays full.
//!
//! A `PooledCell` is only a slot index. Its registers are read and
//! written through the pool that issued it, so claiming a cell never
//! touches the heap.

use swarmgrid_core::traits::check_stride;
use swarmgrid_core::{CellAddress, CellError};

use crate::config::{CellConfig, ConfigError};

/// A fixed-capacity pool of cell register slots.
pub struct CellPool {
    registers: Box<[u8]>,
    stride_count: u8,
    capacity: u32,
    /// Bump cursor: next unclaimed slot.
    claimed: u32,
}

impl CellPool {
    /// Reserve a zero-initialised buffer for `config.pool_capacity` cells.
    ///
    /// Returns `Err` if the config fails [`CellConfig::validate`].
    pub fn new(config: &CellConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            registers: vec![0; config.pool_bytes()].into_boxed_slice(),
            stride_count: config.stride_count,
            capacity: config.pool_capacity,
            claimed: 0,
        })
    }

    /// Claim the next free slot as a new cell.
    ///
    /// Returns `None` once every slot has been handed out.
    pub fn claim(&mut self) -> Option<PooledCell> {
        if self.is_full() {
            return None;
        }
        let slot = self.claimed;
        self.claimed += 1;
        Some(PooledCell { slot })
    }

    /// Whether every slot has been claimed.
    pub fn is_full(&self) -> bool {
        self.claimed >= self.capacity
    }

    /// Number of slots claimed so far.
    pub fn claimed(&self) -> u32 {
        self.claimed
    }

    /// Total number of slots.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Slots still available.
    pub fn remaining(&self) -> u32 {
        self.capacity - self.claimed
    }

    /// Registers per slot.
    pub fn stride_count(&self) -> u8 {
        self.stride_count
    }

    /// Size of the reserved register buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.registers.len()
    }

    /// Address the next claimed cell will occupy, or `None` when full.
    pub fn next_free_address(&self) -> Option<CellAddress> {
        if self.is_full() {
            return None;
        }
        Some(CellAddress::of(&self.registers[self.base(self.claimed)..]))
    }

    // ── Slot access ─────────────────────────────────────────────
    //
    // `cell` must have been claimed from this pool.

    /// Read register `stride` of `cell`.
    pub fn status(&self, cell: &PooledCell, stride: u8) -> Result<u8, CellError> {
        let index = self.index(cell, stride)?;
        Ok(self.registers[index])
    }

    /// Overwrite register `stride` of `cell`.
    pub fn set_status(&mut self, cell: &PooledCell, stride: u8, value: u8) -> Result<(), CellError> {
        let index = self.index(cell, stride)?;
        self.registers[index] = value;
        Ok(())
    }

    /// Storage address of `cell`'s registers.
    pub fn address(&self, cell: &PooledCell) -> CellAddress {
        CellAddress::of(&self.registers[self.base(cell.slot)..])
    }

    fn base(&self, slot: u32) -> usize {
        slot as usize * self.stride_count as usize
    }

    fn index(&self, cell: &PooledCell, stride: u8) -> Result<usize, CellError> {
        let offset = check_stride(stride, self.stride_count)?;
        Ok(self.base(cell.slot) + offset)
    }
}

/// A cell whose registers live in a [`CellPool`] slot.
///
/// Not `Clone`: each claimed slot has exactly one owner.
#[derive(Debug, PartialEq, Eq)]
pub struct PooledCell {
    slot: u32,
}

impl PooledCell {
    /// Index of the pool slot backing this cell.
    pub fn slot(&self) -> u32 {
        self.slot
    }
}
