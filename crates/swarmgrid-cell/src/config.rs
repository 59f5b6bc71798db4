//! Cell layout and pool sizing.

use std::error::Error;
use std::fmt;

/// Errors detected during [`CellConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Cells would hold no status registers.
    NoRegisters,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRegisters => write!(f, "stride_count must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Configuration for cell allocation.
///
/// Shared by every cell of a grid: all cells hold `stride_count`
/// registers, and at most `pool_capacity` of them live in the pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellConfig {
    /// Number of one-byte status registers per cell.
    ///
    /// Default: 3. Must be at least 1.
    pub stride_count: u8,

    /// Number of cells the pool can hold before falling back to the heap.
    ///
    /// Default: 22_500, enough to back a default 150×150 grid entirely
    /// from the pool. Zero disables pooling.
    pub pool_capacity: u32,
}

impl CellConfig {
    /// Default number of status registers per cell.
    pub const DEFAULT_STRIDE_COUNT: u8 = 3;

    /// Default pool capacity in cells.
    pub const DEFAULT_POOL_CAPACITY: u32 = 22_500;

    /// Create a config with the given register count and pool capacity.
    pub fn new(stride_count: u8, pool_capacity: u32) -> Self {
        Self {
            stride_count,
            pool_capacity,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stride_count == 0 {
            return Err(ConfigError::NoRegisters);
        }
        Ok(())
    }

    /// Bytes of register storage per cell.
    pub fn cell_bytes(&self) -> usize {
        self.stride_count as usize
    }

    /// Bytes reserved for the whole pool region.
    pub fn pool_bytes(&self) -> usize {
        self.pool_capacity as usize * self.cell_bytes()
    }
}

impl Default for CellConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STRIDE_COUNT, Self::DEFAULT_POOL_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_covers_default_grid() {
        let config = CellConfig::default();
        assert_eq!(config.pool_capacity, 150 * 150);
        assert_eq!(config.pool_bytes(), 150 * 150 * 3);
    }

    #[test]
    fn default_is_valid() {
        assert_eq!(CellConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_strides_rejected() {
        assert_eq!(
            CellConfig::new(0, 16).validate(),
            Err(ConfigError::NoRegisters)
        );
        assert!(CellConfig::new(1, 0).validate().is_ok());
    }

    #[test]
    fn zero_capacity_reserves_nothing() {
        assert_eq!(CellConfig::new(4, 0).pool_bytes(), 0);
    }
}
