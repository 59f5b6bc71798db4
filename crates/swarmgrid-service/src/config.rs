//! Service configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use swarmgrid_grid::{ConfigError as GridConfigError, GridConfig};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ServiceConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid configuration is invalid.
    Grid(GridConfigError),
    /// Request queue capacity is zero.
    QueueCapacityZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::QueueCapacityZero => write!(f, "queue_capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::QueueCapacityZero => None,
        }
    }
}

impl From<GridConfigError> for ConfigError {
    fn from(e: GridConfigError) -> Self {
        Self::Grid(e)
    }
}

// ── ServiceConfig ──────────────────────────────────────────────────

/// Configuration for a [`GridServer`](crate::GridServer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// The grid the server owns.
    pub grid: GridConfig,
    /// Requests that may wait in the queue before callers block.
    /// Default: 64.
    pub queue_capacity: usize,
}

impl ServiceConfig {
    /// Default request queue capacity.
    pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

    /// A config around `grid` with the default queue capacity.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            queue_capacity: Self::DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        if self.queue_capacity == 0 {
            return Err(ConfigError::QueueCapacityZero);
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
