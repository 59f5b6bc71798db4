//! Reusable grid and server fixtures.
//!
//! - [`small_grid`]: a grid with an explicit size and pool capacity.
//! - [`visited_registry`]: handlers for the visited bit plus a
//!   field getter/setter pair on another register.
//! - [`spawn_server`]: a running [`GridServer`] over [`visited_registry`].

use swarmgrid_cell::CellConfig;
use swarmgrid_grid::{Grid, GridConfig};
use swarmgrid_search::GridStatusPort;
use swarmgrid_service::{GridServer, HandlerRegistry, ServiceConfig};

/// Register count used by every fixture.
pub const STRIDES: u8 = 3;

/// Grid config of `size` x `size` cells backed by a pool of `pool_capacity`.
pub fn grid_config(size: u16, pool_capacity: u32) -> GridConfig {
    GridConfig {
        initial_size: size,
        cells: CellConfig::new(STRIDES, pool_capacity),
    }
}

/// A grid of `size` x `size` cells backed by a pool of `pool_capacity`.
///
/// # Panics
///
/// If the config is invalid.
pub fn small_grid(size: u16, pool_capacity: u32) -> Grid {
    Grid::new(grid_config(size, pool_capacity)).expect("fixture grid config is valid")
}

/// Visited handlers plus `"home"` / `"set_home"` on bit 7 of register 2.
pub fn visited_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    GridStatusPort::register_handlers(&mut registry).expect("fresh registry");
    registry
        .register_field_getter("home", 2, 7, 0x80)
        .expect("fresh registry");
    registry
        .register_setter("set_home", 2, 7, 0x80)
        .expect("fresh registry");
    registry
}

/// Spawn a server over [`visited_registry`].
///
/// # Panics
///
/// If the server fails to start.
pub fn spawn_server(size: u16, pool_capacity: u32) -> GridServer {
    let config = ServiceConfig::new(grid_config(size, pool_capacity));
    GridServer::spawn(config, visited_registry()).expect("fixture server starts")
}
