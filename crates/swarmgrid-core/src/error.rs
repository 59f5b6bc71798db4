//! Cell-level error types.

use std::error::Error;
use std::fmt;

/// Errors from addressing a cell's status registers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellError {
    /// The stride selects a register the cell does not have.
    InvalidStride {
        /// The requested register index.
        stride: u8,
        /// Number of registers each cell holds.
        stride_count: u8,
    },
    /// The bit offset does not fit in a one-byte register.
    InvalidOffset {
        /// The requested bit position.
        offset: u8,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStride {
                stride,
                stride_count,
            } => {
                write!(
                    f,
                    "invalid stride {stride}: cells hold {stride_count} status registers"
                )
            }
            Self::InvalidOffset { offset } => {
                write!(f, "invalid bit offset {offset}: registers are 8 bits wide")
            }
        }
    }
}

impl Error for CellError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_stride() {
        let e = CellError::InvalidStride {
            stride: 7,
            stride_count: 3,
        };
        assert_eq!(
            e.to_string(),
            "invalid stride 7: cells hold 3 status registers"
        );
    }

    #[test]
    fn display_names_the_offset() {
        let e = CellError::InvalidOffset { offset: 9 };
        assert!(e.to_string().contains("offset 9"));
    }
}
