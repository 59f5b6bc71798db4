//! Strongly-typed coordinates and cell addresses.

use std::fmt;

/// An origin-relative grid coordinate.
///
/// Coordinates are expressed relative to the grid's logical origin, not
/// to physical storage indices. The grid translates them on every access,
/// so a coordinate stays valid when the grid grows on its negative side.
///
/// Both axes are `i8`, matching the request interface: a robot can ask
/// about any cell within 128 cells of the origin in each direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Column offset from the origin (positive = right).
    pub x: i8,
    /// Row offset from the origin (positive = down).
    pub y: i8,
}

impl GridCoord {
    /// The logical origin `(0, 0)`.
    pub const ORIGIN: GridCoord = GridCoord { x: 0, y: 0 };

    /// Create a coordinate from its two axis offsets.
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i8, i8)> for GridCoord {
    fn from((x, y): (i8, i8)) -> Self {
        Self { x, y }
    }
}

/// Storage address of a cell's status registers.
///
/// Opaque and used only for diagnostics and identity (e.g. checking that
/// growth did not move a cell). Never used for addressing logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress(pub usize);

impl CellAddress {
    /// Address of the first byte of a register slice.
    pub fn of<T>(registers: &[T]) -> Self {
        Self(registers.as_ptr() as usize)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
