//! Status request handling for swarmgrid.
//!
//! Translates external status requests into [`Grid`](swarmgrid_grid::Grid)
//! operations and back into responses.
//!
//! # Architecture
//!
//! ```text
//! Client thread(s)                 Server thread
//!     |                                 |
//!     |--call(name, request)----------->| rx.recv()
//!     |   [tx: bounded(queue_capacity)] | registry.dispatch(name)
//!     |                                 |   StatusAccessor
//!     |                                 |     Grid::check_bounds
//!     |                                 |     Grid::get_* / set_field
//!     |<--response via reply channel----|
//! ```
//!
//! - [`StatusAccessor`] answers the three request forms (flag read,
//!   field read, field write) against a grid it owns.
//! - [`HandlerRegistry`] binds register fields to names at registration
//!   time and dispatches coordinate-only requests by name.
//! - [`GridServer`] runs the accessor on a dedicated thread so that all
//!   grid access is serialized, one request at a time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accessor;
pub mod config;
pub mod error;
pub mod registry;
pub mod request;
pub mod server;

pub use accessor::StatusAccessor;
pub use config::{ConfigError, ServiceConfig};
pub use error::ServiceError;
pub use registry::{Binding, HandlerRegistry};
pub use request::{
    FieldRequest, FieldResponse, FlagRequest, FlagResponse, HandlerRequest, HandlerResponse,
    WriteRequest, WriteResponse,
};
pub use server::{GridClient, GridServer};
