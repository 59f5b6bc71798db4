//! The [`Cell`] capability trait.

use std::fmt;

use crate::error::CellError;
use crate::id::CellAddress;

/// Which storage strategy backs a cell.
///
/// Purely informational: both variants answer the [`Cell`] contract
/// identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Registers live in a slot of the fixed-capacity cell pool.
    Pooled,
    /// Registers live in an individual heap allocation.
    Heap,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pooled => write!(f, "pooled"),
            Self::Heap => write!(f, "heap"),
        }
    }
}

/// Read access to a fixed-size unit of the grid holding a strided set of
/// status bytes.
///
/// Implemented by the heap-backed cell and by the borrowed views the
/// allocator hands out for either variant, so callers never need to know
/// which storage backs a given grid position.
///
/// All cells of one grid share the same `stride_count`, fixed at
/// construction. A stride outside `0..stride_count` is rejected with
/// [`CellError::InvalidStride`].
pub trait Cell: Send {
    /// Read the status register at `stride`.
    fn status(&self, stride: u8) -> Result<u8, CellError>;

    /// Storage address of the registers, for diagnostics only.
    fn address(&self) -> CellAddress;

    /// Number of status registers this cell holds.
    fn stride_count(&self) -> u8;

    /// Storage strategy backing this cell.
    fn kind(&self) -> CellKind;
}

/// A [`Cell`] whose registers can be overwritten.
pub trait CellWrite: Cell {
    /// Overwrite the status register at `stride`.
    fn set_status(&mut self, stride: u8, value: u8) -> Result<(), CellError>;
}

/// Check `stride` against a register count.
///
/// Shared by the cell implementations so they report the same error.
pub fn check_stride(stride: u8, stride_count: u8) -> Result<usize, CellError> {
    if stride >= stride_count {
        return Err(CellError::InvalidStride {
            stride,
            stride_count,
        });
    }
    Ok(stride as usize)
}
