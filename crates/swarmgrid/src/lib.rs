//! swarmgrid: a growable status grid shared by a robot swarm.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all swarmgrid sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use swarmgrid::prelude::*;
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register_flag_getter("visited", 0, 0x01).unwrap();
//! registry.register_setter("mark_visited", 0, 0, 0x01).unwrap();
//!
//! let config = ServiceConfig::new(GridConfig::with_size(8));
//! let mut server = GridServer::spawn(config, registry).unwrap();
//! let client = server.client();
//!
//! // Coordinates outside the grid grow it; unseen cells read as zero.
//! assert_eq!(client.get("visited", -12, 3), Ok(HandlerResponse::Flag(false)));
//! client.set("mark_visited", -12, 3, 1).unwrap();
//! assert_eq!(client.get("visited", -12, 3), Ok(HandlerResponse::Flag(true)));
//!
//! let accessor = server.shutdown().unwrap();
//! let (columns, _) = accessor.grid().size();
//! assert!(columns > 8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `swarmgrid-core` | `Cell` trait, coordinates, `StatusField`, `CellError` |
//! | [`cell`] | `swarmgrid-cell` | Cell pool, heap cells, allocator |
//! | [`grid`] | `swarmgrid-grid` | The growable grid and its axes |
//! | [`service`] | `swarmgrid-service` | Status accessor, named handlers, grid server |
//! | [`search`] | `swarmgrid-search` | Search/pickup waypoint controller |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`swarmgrid-core`).
pub use swarmgrid_core as types;

/// Cell storage (`swarmgrid-cell`).
///
/// [`cell::CellAllocator`] hands out pooled cells until the pool is full,
/// then heap cells.
pub use swarmgrid_cell as cell;

/// The growable grid (`swarmgrid-grid`).
pub use swarmgrid_grid as grid;

/// Request handling (`swarmgrid-service`).
///
/// [`service::StatusAccessor`] for direct use, [`service::GridServer`] to
/// serialize requests from many threads.
pub use swarmgrid_service as service;

/// Waypoint generation (`swarmgrid-search`).
pub use swarmgrid_search as search;

/// Common imports for typical swarmgrid usage.
///
/// ```rust
/// use swarmgrid::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use swarmgrid_core::{Cell, CellError, CellKind, CellWrite, GridCoord, StatusField};

    // Cells
    pub use swarmgrid_cell::CellConfig;

    // Grid
    pub use swarmgrid_grid::{Grid, GridConfig, GridError};

    // Service
    pub use swarmgrid_service::{
        FieldRequest, FieldResponse, FlagRequest, FlagResponse, GridClient, GridServer,
        HandlerRegistry, HandlerRequest, HandlerResponse, ServiceConfig, ServiceError,
        StatusAccessor, WriteRequest, WriteResponse,
    };

    // Search
    pub use swarmgrid_search::{
        GridStatusPort, Point, SearchController, SearchError, SearchMode, StatusPort,
    };
}
