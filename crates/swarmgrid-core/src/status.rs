//! Bit-level status-register addressing.
//!
//! Every cell holds a fixed number of one-byte status registers. A
//! [`StatusField`] names one bit (or bit group) inside one register:
//!
//! - `stride` selects the register,
//! - `mask` selects the participating bits,
//! - `offset` is the bit position used to shift the field in and out.
//!
//! Writes are single-bit toggles. When the requested value differs from
//! the current field value, the bit at `offset` is flipped and nothing
//! else changes. For one-bit fields this is an ordinary assignment; for
//! multi-bit masks it is not, and callers relying on the toggle
//! behaviour get exactly that.

use crate::error::CellError;

/// Descriptor of a bit field inside a cell's status registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StatusField {
    /// Index of the status register (byte) within the cell.
    pub stride: u8,
    /// Bit position of the field within the register.
    pub offset: u8,
    /// Bits of the register that belong to the field.
    pub mask: u8,
}

impl StatusField {
    /// Highest valid bit offset in a one-byte register.
    pub const MAX_OFFSET: u8 = 7;

    /// Create a field descriptor.
    pub const fn new(stride: u8, offset: u8, mask: u8) -> Self {
        Self {
            stride,
            offset,
            mask,
        }
    }

    /// A single-bit field at `offset` in register `stride`.
    pub const fn bit(stride: u8, offset: u8) -> Self {
        Self {
            stride,
            offset,
            mask: 1 << (offset & Self::MAX_OFFSET),
        }
    }

    /// Check the descriptor against a cell layout with `stride_count`
    /// registers.
    pub fn validate(&self, stride_count: u8) -> Result<(), CellError> {
        if self.stride >= stride_count {
            return Err(CellError::InvalidStride {
                stride: self.stride,
                stride_count,
            });
        }
        if self.offset > Self::MAX_OFFSET {
            return Err(CellError::InvalidOffset {
                offset: self.offset,
            });
        }
        Ok(())
    }

    /// Whether any masked bit of `register` is set.
    pub fn is_set(&self, register: u8) -> bool {
        register & self.mask != 0
    }

    /// Extract the field value: `(register & mask) >> offset`.
    pub fn extract(&self, register: u8) -> u8 {
        (register & self.mask) >> self.offset
    }

    /// Compute the register after writing `value` to this field.
    ///
    /// Returns `None` when the field already holds `value` (no write is
    /// needed), otherwise the register with bit `offset` toggled.
    ///
    /// # Panics
    ///
    /// Debug builds panic on shift overflow if `offset` exceeds
    /// [`Self::MAX_OFFSET`]. Run [`validate`](Self::validate) first.
    pub fn apply(&self, register: u8, value: u8) -> Option<u8> {
        if self.extract(register) == value {
            return None;
        }
        Some(register ^ (1u8 << self.offset))
    }
}
