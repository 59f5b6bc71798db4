//! Growable, origin-relative status grid for swarmgrid.
//!
//! A [`Grid`] is a two-dimensional collection of status cells addressed
//! by [`GridCoord`](swarmgrid_core::GridCoord) relative to a movable
//! logical origin. Any status request outside the current extents grows
//! the grid first, so every request succeeds:
//!
//! ```text
//!            front (top)
//!          ┌───┬───┬───┬───┐
//!   front  │   │   │   │   │  back
//!  (left)  ├───┼───┼───┼───┤ (right)
//!          │   │   │ O │   │   O = origin at (x.center, y.center)
//!          └───┴───┴───┴───┘
//!            back (bottom)
//! ```
//!
//! Growing on the front of an axis prepends storage and shifts that
//! axis' center, so every previously valid coordinate keeps its cell.
//! The grid never shrinks.
//!
//! # Examples
//!
//! ```
//! use swarmgrid_core::{GridCoord, StatusField};
//! use swarmgrid_grid::{Grid, GridConfig};
//!
//! let mut grid = Grid::new(GridConfig::with_size(4)).unwrap();
//! let visited = StatusField::bit(0, 0);
//!
//! grid.set_field(GridCoord::new(3, -3), visited, 1).unwrap();
//! assert_eq!(grid.get_field(GridCoord::new(3, -3), visited).unwrap(), 1);
//! assert_eq!(grid.center(), (2, 3));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod error;
pub mod grid;

pub use axis::{Axis, Growth, Side};
pub use config::{ConfigError, GridConfig};
pub use error::GridError;
pub use grid::Grid;
