//! Error types for grid operations.

use std::error::Error;
use std::fmt;

use swarmgrid_core::{CellError, GridCoord};

/// Errors arising from grid status access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate resolved outside physical storage.
    ///
    /// Growth runs before every status access, so this indicates a defect
    /// in the growth logic rather than a bad request.
    OutOfBounds {
        /// The origin-relative coordinate.
        coord: GridCoord,
        /// The physical `(column, row)` it resolved to.
        physical: (isize, isize),
        /// Physical `(columns, rows)` at the time of the access.
        size: (usize, usize),
    },
    /// The register descriptor does not fit the cell layout.
    Cell(CellError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                coord,
                physical,
                size,
            } => {
                write!(
                    f,
                    "coordinate {coord} resolved to physical ({}, {}) outside [0, {}) x [0, {})",
                    physical.0, physical.1, size.0, size.1
                )
            }
            Self::Cell(e) => write!(f, "cell: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cell(e) => Some(e),
            Self::OutOfBounds { .. } => None,
        }
    }
}

impl From<CellError> for GridError {
    fn from(e: CellError) -> Self {
        Self::Cell(e)
    }
}
