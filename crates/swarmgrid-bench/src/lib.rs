//! Benchmark profiles and utilities for swarmgrid.
//!
//! - [`reference_profile`]: 150x150 grid with the pool sized to fit it
//! - [`stress_profile`]: 256x256 grid whose growth spills to the heap
//! - [`sample_coords`]: deterministic coordinate sequence via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swarmgrid_cell::CellConfig;
use swarmgrid_core::GridCoord;
use swarmgrid_grid::GridConfig;
use swarmgrid_service::{HandlerRegistry, ServiceConfig, ServiceError};

/// 150x150 cells, three registers, pool of 22 500.
pub fn reference_profile() -> GridConfig {
    GridConfig::default()
}

/// 256x256 cells with the reference pool, so most cells live on the heap.
pub fn stress_profile() -> GridConfig {
    GridConfig {
        initial_size: GridConfig::MAX_INITIAL_SIZE,
        cells: CellConfig::default(),
    }
}

/// Server config over [`reference_profile`] with a deep queue.
pub fn service_profile() -> ServiceConfig {
    ServiceConfig {
        grid: reference_profile(),
        queue_capacity: 1024,
    }
}

/// Handlers used by the service benchmarks.
pub fn bench_registry() -> Result<HandlerRegistry, ServiceError> {
    let mut registry = HandlerRegistry::new();
    registry.register_flag_getter("visited", 0, 0x01)?;
    registry.register_setter("mark_visited", 0, 0, 0x01)?;
    registry.register_field_getter("class", 1, 2, 0x0C)?;
    Ok(registry)
}

/// Generate `n` deterministic coordinates within `radius` of the origin.
///
/// Uses a linear congruential sequence of the seed, so the same
/// arguments always give the same samples.
pub fn sample_coords(n: usize, radius: i8, seed: u64) -> Vec<GridCoord> {
    let span = 2 * radius.unsigned_abs() as u64 + 1;
    let mut state = seed;
    let mut next = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % span) as i64 - radius.unsigned_abs() as i64
    };
    (0..n)
        .map(|_| {
            let x = next() as i8;
            let y = next() as i8;
            GridCoord::new(x, y)
        })
        .collect()
}
