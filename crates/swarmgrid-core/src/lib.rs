//! Core types and traits for the swarmgrid status grid.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the swarmgrid workspace:
//! coordinates, cell addresses, the status-register descriptor, the
//! [`Cell`] and [`CellWrite`] capability traits, and the cell-level
//! error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod status;
pub mod traits;

pub use error::CellError;
pub use id::{CellAddress, GridCoord};
pub use status::StatusField;
pub use traits::{Cell, CellKind, CellWrite};
