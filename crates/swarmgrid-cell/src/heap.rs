//! Heap-backed cells, used once the pool is exhausted.

use smallvec::{smallvec, SmallVec};
use swarmgrid_core::traits::check_stride;
use swarmgrid_core::{Cell, CellAddress, CellError, CellKind, CellWrite};

/// A cell with its own register storage.
///
/// Registers are stored inline for up to four strides. The allocator
/// boxes each heap cell, so the registers never move once created.
#[derive(Debug)]
pub struct HeapCell {
    registers: SmallVec<[u8; 4]>,
}

impl HeapCell {
    /// Create a zero-initialised cell with `stride_count` registers.
    pub fn new(stride_count: u8) -> Self {
        Self {
            registers: smallvec![0; stride_count as usize],
        }
    }
}

impl Cell for HeapCell {
    fn status(&self, stride: u8) -> Result<u8, CellError> {
        let index = check_stride(stride, self.stride_count())?;
        Ok(self.registers[index])
    }

    fn address(&self) -> CellAddress {
        CellAddress::of(&self.registers)
    }

    fn stride_count(&self) -> u8 {
        self.registers.len() as u8
    }

    fn kind(&self) -> CellKind {
        CellKind::Heap
    }
}

impl CellWrite for HeapCell {
    fn set_status(&mut self, stride: u8, value: u8) -> Result<(), CellError> {
        let index = check_stride(stride, self.stride_count())?;
        self.registers[index] = value;
        Ok(())
    }
}
